//! Pipeline scenario tests
//!
//! Each scenario writes a small survey extract into a temporary directory
//! and runs the whole pipeline against it.


use crate::config::PipelineConfig;
use std::fs;
use std::path::Path;

pub(crate) const SAMPLE_CSV: &str = "\
Person ID,Gender,Age,Occupation,Sleep Duration,Quality of Sleep,Physical Activity Level,Stress Level,BMI Category,Blood Pressure,Heart Rate,Daily Steps,Sleep Disorder
1,Male,27,Software Engineer,6.1,6,42,6,Overweight,126/83,77,4200,
2,Male,28,Doctor,6.2,6,60,8,Normal,125/80,75,10000,
2,Male,28,Doctor,6.2,6,60,8,Normal,125/80,75,10000,
4,Male,28,Sales Representative,5.9,4,30,8,Obese,140/90,85,3000,Sleep Apnea
5,Female,29,Teacher,6.3,6,40,7,Normal Weight,140/90,82,3500,Insomnia
6,Female,30,Nurse,7.8,8,75,4,Normal Weight,120/80,70,8000,None
7,Male,31,Engineer,7.7,8,55,4,Overweight,130/86,72,6000,Sleep Apnea
";

/// Config pointing every input and output into `root`
pub(crate) fn scratch_config(root: &Path) -> PipelineConfig {
    PipelineConfig::default()
        .with_input_path(root.join("data").join("survey.csv"))
        .with_cleaned_output_path(root.join("data").join("processed").join("cleaned.csv"))
        .with_plots_dir(root.join("analysis").join("plots"))
        .without_progress()
}

pub(crate) fn write_input(config: &PipelineConfig, contents: &str) {
    if let Some(parent) = config.input_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&config.input_path, contents).unwrap();
}
