use clap::Parser;
use sleep_health_processor::cli::{self, Args};
use sleep_health_processor::{Pipeline, RunOutcome};
use std::process;
use tracing::{debug, info};

fn main() {
    let args = Args::parse();
    cli::setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(args.to_config());

    match pipeline.run()? {
        RunOutcome::Completed(report) => {
            info!(
                "Finished: {} rows cleaned, {} charts written",
                report.cleaned_shape.rows,
                report.charts.iter().filter(|c| c.is_written()).count()
            );
        }
        // The diagnostic has already been printed; a missing input is not a failure
        RunOutcome::InputMissing { path } => {
            debug!("Input missing at {}", path.display());
        }
    }

    Ok(())
}
