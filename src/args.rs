use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_LOCAL_FILE, DEFAULT_MIN_COLUMNS, DEFAULT_URL};

#[derive(Parser, Debug)]
#[command(
    name = "weblog-stats",
    about = "Download a web server access log and summarize image hits, browsers and hourly traffic",
    version,
    long_about = None
)]
pub struct Args {
    /// URL of the weblog CSV file
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Local path the downloaded log is written to
    #[arg(short, long, default_value = DEFAULT_LOCAL_FILE)]
    pub output: PathBuf,

    /// Minimum number of columns a row needs to be counted
    #[arg(long, default_value_t = DEFAULT_MIN_COLUMNS)]
    pub min_columns: usize,

    /// Remove the downloaded file once it has been analyzed
    #[arg(long)]
    pub remove_download: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
