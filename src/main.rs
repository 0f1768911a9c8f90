use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

use weblog_stats::{analyze_weblog, report, utils, Args, Config, FetchError};

fn main() -> ExitCode {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    if let Err(e) = utils::validate_args(&args) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let config = Config::from_args(&args);

    let result = match analyze_weblog(&config) {
        Ok(result) => result,
        Err(e) => {
            if let Some(fetch_error) = e.downcast_ref::<FetchError>() {
                print!("{}", report::render_fetch_failure(&config.url, fetch_error));
            } else {
                error!(error = %e, "Analysis failed");
                eprintln!("Error: {:#}", e);
            }
            return ExitCode::FAILURE;
        }
    };

    if result.rows_rejected > 0 {
        info!(rows_rejected = result.rows_rejected, "Skipped malformed rows");
    }

    if let Err(e) = report::print_report(&result.stats, args.json) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
