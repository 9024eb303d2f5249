//! Command-line interface components.

use crate::config::PipelineConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "sleep-health")]
#[command(about = "Clean the Sleep Health and Lifestyle dataset and render exploratory charts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Raw dataset CSV [default: data/Sleep_health_and_lifestyle_dataset.csv]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Cleaned CSV destination [default: data/processed/sleep_health_cleaned.csv]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory for chart images [default: analysis/plots]
    #[arg(long, value_name = "DIR")]
    pub plots_dir: Option<PathBuf>,

    /// Also write a JSON run report
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Remove fully duplicated rows during cleaning
    #[arg(long)]
    pub drop_duplicates: bool,

    /// Hide the chart progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Overlay the supplied flags on the default configuration
    pub fn to_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default();

        if let Some(input) = &self.input {
            config = config.with_input_path(input);
        }
        if let Some(output) = &self.output {
            config = config.with_cleaned_output_path(output);
        }
        if let Some(plots_dir) = &self.plots_dir {
            config = config.with_plots_dir(plots_dir);
        }
        if let Some(report) = &self.report {
            config = config.with_report_path(report);
        }
        if self.drop_duplicates {
            config = config.with_drop_duplicates();
        }
        if self.no_progress {
            config = config.without_progress();
        }

        config
    }
}

/// Install the global tracing subscriber; `RUST_LOG` takes precedence
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sleep_health_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
