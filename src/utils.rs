use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_MIN_COLUMNS;

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` wins over `--verbose`.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(time::macros::format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .init();
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.min_columns < DEFAULT_MIN_COLUMNS {
        anyhow::bail!(
            "--min-columns must be at least {} (path, timestamp, user agent)",
            DEFAULT_MIN_COLUMNS
        );
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("--output must not be empty");
    }

    Ok(())
}
