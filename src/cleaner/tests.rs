//! Cleaning pipeline tests

use super::*;
use crate::error::SleepHealthError;
use polars::prelude::*;

fn sample_table() -> DataFrame {
    df!(
        "Person ID" => [1i64, 2, 3, 4],
        "Sleep Disorder" => [None, Some("Insomnia"), Some(""), Some("Sleep Apnea")],
        "Blood Pressure" => ["120/80", "126/83", "140/95", " 118 / 76 "],
        "BMI Category" => ["Normal Weight", "Overweight", "Normal", "Obese"],
        "Sleep Duration" => [7.1f64, 5.9, 6.3, 6.8],
    )
    .unwrap()
}

fn strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

fn ints(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name).unwrap().i64().unwrap().into_iter().collect()
}

#[test]
fn test_sleep_disorder_has_no_missing_values() {
    let (cleaned, report) = Cleaner::standard().clean(sample_table()).unwrap();

    assert_eq!(cleaned.column("Sleep Disorder").unwrap().null_count(), 0);
    assert_eq!(
        strings(&cleaned, "Sleep Disorder"),
        vec![
            Some("None".to_string()),
            Some("Insomnia".to_string()),
            Some("None".to_string()),
            Some("Sleep Apnea".to_string()),
        ]
    );
    assert_eq!(
        report.outcome("sleep_disorder_imputation"),
        Some(&StepOutcome::Applied { rows_affected: 2 })
    );
}

#[test]
fn test_blood_pressure_split_into_integer_columns() {
    let (cleaned, _) = Cleaner::standard().clean(sample_table()).unwrap();

    assert!(cleaned.get_column_index("Blood Pressure").is_none());
    assert_eq!(
        ints(&cleaned, "BP_Systolic"),
        vec![Some(120), Some(126), Some(140), Some(118)]
    );
    assert_eq!(
        ints(&cleaned, "BP_Diastolic"),
        vec![Some(80), Some(83), Some(95), Some(76)]
    );

    // New columns are appended after the untouched ones
    let names: Vec<String> = cleaned
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "Person ID",
            "Sleep Disorder",
            "BMI Category",
            "Sleep Duration",
            "BP_Systolic",
            "BP_Diastolic",
        ]
    );
}

#[test]
fn test_bmi_normal_weight_collapsed() {
    let (cleaned, report) = Cleaner::standard().clean(sample_table()).unwrap();

    assert_eq!(
        strings(&cleaned, "BMI Category"),
        vec![
            Some("Normal".to_string()),
            Some("Overweight".to_string()),
            Some("Normal".to_string()),
            Some("Obese".to_string()),
        ]
    );
    assert_eq!(
        report.outcome("bmi_category_canonicalization"),
        Some(&StepOutcome::Applied { rows_affected: 1 })
    );
}

#[test]
fn test_cleaning_is_idempotent() {
    let cleaner = Cleaner::standard();
    let (once, _) = cleaner.clean(sample_table()).unwrap();
    let (twice, report) = cleaner.clean(once.clone()).unwrap();

    assert!(once.equals_missing(&twice));
    assert_eq!(
        report.outcome("blood_pressure_split"),
        Some(&StepOutcome::Skipped {
            missing_column: "Blood Pressure".to_string()
        })
    );
    assert_eq!(
        report.outcome("sleep_disorder_imputation"),
        Some(&StepOutcome::Applied { rows_affected: 0 })
    );
}

#[test]
fn test_row_count_preserved() {
    let input = sample_table();
    let rows = input.height();
    let (cleaned, _) = Cleaner::standard().clean(input).unwrap();

    assert_eq!(cleaned.height(), rows);
}

#[test]
fn test_missing_columns_are_skipped() {
    let df = df!("Age" => [27i64, 28], "Gender" => ["Male", "Female"]).unwrap();

    let (cleaned, report) = Cleaner::standard().clean(df.clone()).unwrap();

    assert!(cleaned.equals_missing(&df));
    assert_eq!(report.applied_count(), 0);
    assert_eq!(report.steps.len(), 3);
    assert_eq!(
        report.outcome("bmi_category_canonicalization"),
        Some(&StepOutcome::Skipped {
            missing_column: "BMI Category".to_string()
        })
    );
}

#[test]
fn test_single_step_runs_when_only_its_column_exists() {
    let df = df!("BMI Category" => ["Normal Weight", "Obese"]).unwrap();

    let (cleaned, report) = Cleaner::standard().clean(df).unwrap();

    assert_eq!(report.applied_count(), 1);
    assert_eq!(
        strings(&cleaned, "BMI Category"),
        vec![Some("Normal".to_string()), Some("Obese".to_string())]
    );
}

#[test]
fn test_malformed_blood_pressure_is_reported() {
    let df = df!(
        "Blood Pressure" => ["120/80", "12080", "130/85"],
    )
    .unwrap();

    match Cleaner::standard().clean(df) {
        Err(SleepHealthError::MalformedCompositeField { column, row, value }) => {
            assert_eq!(column, "Blood Pressure");
            assert_eq!(row, 1);
            assert_eq!(value, "12080");
        }
        other => panic!("Expected MalformedCompositeField error, got {:?}", other),
    }
}

#[test]
fn test_missing_blood_pressure_is_reported() {
    let df = df!("Blood Pressure" => [Some("120/80"), None]).unwrap();

    match Cleaner::standard().clean(df) {
        Err(SleepHealthError::MalformedCompositeField { row, value, .. }) => {
            assert_eq!(row, 1);
            assert_eq!(value, "<missing>");
        }
        other => panic!("Expected MalformedCompositeField error, got {:?}", other),
    }
}

#[test]
fn test_parse_blood_pressure() {
    assert_eq!(steps::parse_blood_pressure("120/80"), Some((120, 80)));
    assert_eq!(steps::parse_blood_pressure(" 135 / 90"), Some((135, 90)));
    assert_eq!(steps::parse_blood_pressure("120/80/70"), None);
    assert_eq!(steps::parse_blood_pressure("120-80"), None);
    assert_eq!(steps::parse_blood_pressure("high/low"), None);
    assert_eq!(steps::parse_blood_pressure("/80"), None);
}

#[test]
fn test_end_to_end_row() {
    let df = df!(
        "Sleep Disorder" => [None::<&str>],
        "Blood Pressure" => ["120/80"],
        "BMI Category" => ["Normal Weight"],
    )
    .unwrap();

    let (cleaned, _) = Cleaner::standard().clean(df).unwrap();

    assert_eq!(strings(&cleaned, "Sleep Disorder"), vec![Some("None".to_string())]);
    assert_eq!(ints(&cleaned, "BP_Systolic"), vec![Some(120)]);
    assert_eq!(ints(&cleaned, "BP_Diastolic"), vec![Some(80)]);
    assert_eq!(strings(&cleaned, "BMI Category"), vec![Some("Normal".to_string())]);
    assert!(cleaned.get_column_index("Blood Pressure").is_none());
}

#[test]
fn test_duplicate_removal_is_opt_in() {
    let df = df!(
        "Gender" => ["Male", "Male", "Female"],
        "Age" => [27i64, 27, 30],
    )
    .unwrap();

    let (kept, _) = Cleaner::standard().clean(df.clone()).unwrap();
    assert_eq!(kept.height(), 3);

    let cleaner = Cleaner::standard().with_duplicate_removal();
    assert_eq!(cleaner.step_names()[0], "duplicate_row_removal");

    let (deduped, report) = cleaner.clean(df).unwrap();
    assert_eq!(deduped.height(), 2);
    assert_eq!(
        report.outcome("duplicate_row_removal"),
        Some(&StepOutcome::Applied { rows_affected: 1 })
    );
    assert_eq!(
        strings(&deduped, "Gender"),
        vec![Some("Male".to_string()), Some("Female".to_string())]
    );
}

#[test]
fn test_missing_markers_from_csv_become_none() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("disorders.csv");
    std::fs::write(&path, "Sleep Disorder\nNaN\nN/A\nNA\n\nnull\nInsomnia\n").unwrap();
    let df = crate::loader::load_table(&path, 100).unwrap();

    let (cleaned, report) = Cleaner::standard().clean(df).unwrap();

    assert_eq!(
        strings(&cleaned, "Sleep Disorder"),
        vec![
            Some("None".to_string()),
            Some("None".to_string()),
            Some("None".to_string()),
            Some("None".to_string()),
            Some("None".to_string()),
            Some("Insomnia".to_string()),
        ]
    );
    assert_eq!(
        report.outcome("sleep_disorder_imputation"),
        Some(&StepOutcome::Applied { rows_affected: 5 })
    );
}

#[test]
fn test_custom_step_list() {
    let df = df!(
        "Sleep Disorder" => [None, Some("Insomnia")],
        "BMI Category" => ["Normal Weight", "Obese"],
    )
    .unwrap();
    let cleaner = Cleaner::from_steps(vec![Box::new(BmiCategoryCanonicalization)]);

    let (cleaned, report) = cleaner.clean(df).unwrap();

    assert_eq!(cleaner.step_names(), vec!["bmi_category_canonicalization"]);
    assert_eq!(report.steps.len(), 1);
    assert_eq!(cleaned.column("Sleep Disorder").unwrap().null_count(), 1);
    assert_eq!(
        strings(&cleaned, "BMI Category"),
        vec![Some("Normal".to_string()), Some("Obese".to_string())]
    );
}
