use std::path::PathBuf;

use crate::Args;

pub const DEFAULT_URL: &str = "http://s3.amazonaws.com/cuny-is211-spring2015/weblog.csv";
pub const DEFAULT_LOCAL_FILE: &str = "weblog.csv";

/// Rows need path, timestamp and user agent. Status and size are optional.
pub const DEFAULT_MIN_COLUMNS: usize = 3;

/// Everything the pipeline needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub local_file: PathBuf,
    pub min_columns: usize,
    pub keep_download: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            url: args.url.clone(),
            local_file: args.output.clone(),
            min_columns: args.min_columns,
            keep_download: !args.remove_download,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            local_file: PathBuf::from(DEFAULT_LOCAL_FILE),
            min_columns: DEFAULT_MIN_COLUMNS,
            keep_download: true,
        }
    }
}
