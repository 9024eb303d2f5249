//! Application constants for the sleep health processor
//!
//! Column names, default file locations, chart file names and colour
//! palettes used throughout the pipeline.

// =============================================================================
// Default Paths
// =============================================================================

/// Raw dataset location, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "data/Sleep_health_and_lifestyle_dataset.csv";

/// Cleaned dataset location
pub const DEFAULT_CLEANED_OUTPUT_PATH: &str = "data/processed/sleep_health_cleaned.csv";

/// Directory receiving the rendered charts
pub const DEFAULT_PLOTS_DIR: &str = "analysis/plots";

/// Rows scanned by the CSV reader when inferring column types
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 1000;

/// Cell values read as missing in every column. Empty fields are always
/// missing as well.
pub const NULL_VALUE_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// =============================================================================
// Column Names
// =============================================================================

pub mod columns {
    pub const SLEEP_DISORDER: &str = "Sleep Disorder";
    pub const BLOOD_PRESSURE: &str = "Blood Pressure";
    pub const BMI_CATEGORY: &str = "BMI Category";
    pub const SLEEP_DURATION: &str = "Sleep Duration";
    pub const STRESS_LEVEL: &str = "Stress Level";

    /// Produced by splitting the blood pressure column
    pub const BP_SYSTOLIC: &str = "BP_Systolic";
    pub const BP_DIASTOLIC: &str = "BP_Diastolic";
}

// =============================================================================
// Category Labels
// =============================================================================

pub mod labels {
    /// Explicit category for people without a sleep disorder
    pub const NO_DISORDER: &str = "None";

    /// Display order of the sleep disorder categories
    pub const DISORDER_ORDER: &[&str] = &[NO_DISORDER, "Insomnia", "Sleep Apnea"];

    /// BMI synonym collapsed into [`BMI_NORMAL`]
    pub const BMI_NORMAL_WEIGHT: &str = "Normal Weight";
    pub const BMI_NORMAL: &str = "Normal";
}

/// Delimiter between systolic and diastolic readings
pub const BLOOD_PRESSURE_DELIMITER: char = '/';

// =============================================================================
// Chart Output
// =============================================================================

pub mod chart_files {
    pub const DISORDER_DISTRIBUTION: &str = "01_sleep_disorder_dist.png";
    pub const CORRELATION_HEATMAP: &str = "02_correlation_heatmap.png";
    pub const SLEEP_DURATION_BOXPLOT: &str = "03_sleep_duration_boxplot.png";
    pub const STRESS_LEVEL_BOXPLOT: &str = "04_stress_level_boxplot.png";
    pub const BMI_DISTRIBUTION: &str = "05_bmi_distribution.png";
}

/// Whisker reach in multiples of the interquartile range
pub const BOXPLOT_WHISKER_IQR: f64 = 1.5;

// =============================================================================
// Colour Palettes (RGB)
// =============================================================================

pub mod palettes {
    /// Three samples of viridis, one per disorder category
    pub const VIRIDIS_3: &[[u8; 3]] = &[[0x47, 0x2d, 0x7b], [0x21, 0x91, 0x8c], [0xaa, 0xdc, 0x32]];

    pub const SET2: &[[u8; 3]] = &[
        [0x66, 0xc2, 0xa5],
        [0xfc, 0x8d, 0x62],
        [0x8d, 0xa0, 0xcb],
        [0xe7, 0x8a, 0xc3],
        [0xa6, 0xd8, 0x54],
        [0xff, 0xd9, 0x2f],
        [0xe5, 0xc4, 0x94],
        [0xb3, 0xb3, 0xb3],
    ];

    pub const MUTED: &[[u8; 3]] = &[
        [0x48, 0x78, 0xd0],
        [0xee, 0x85, 0x4a],
        [0x6a, 0xcc, 0x64],
        [0xd6, 0x5f, 0x5f],
        [0x95, 0x6c, 0xb4],
        [0x8c, 0x61, 0x3c],
        [0xdc, 0x7e, 0xc0],
        [0x79, 0x79, 0x79],
        [0xd5, 0xbb, 0x67],
        [0x82, 0xc6, 0xe2],
    ];

    /// Coolwarm anchors for -1, 0 and +1
    pub const COOLWARM_LOW: [u8; 3] = [0x3b, 0x4c, 0xc0];
    pub const COOLWARM_MID: [u8; 3] = [0xdd, 0xdd, 0xdd];
    pub const COOLWARM_HIGH: [u8; 3] = [0xb4, 0x04, 0x26];

    pub const BACKGROUND: [u8; 3] = [0xff, 0xff, 0xff];
    pub const GRID: [u8; 3] = [0xcc, 0xcc, 0xcc];
    pub const INK: [u8; 3] = [0x26, 0x26, 0x26];
    pub const MISSING: [u8; 3] = [0xbf, 0xbf, 0xbf];
}
