pub mod analysis;
pub mod args;
pub mod browser;
pub mod config;
pub mod fetch;
pub mod record;
pub mod report;
pub mod resource;
pub mod stats;
pub mod timestamp;
pub mod utils;

pub use analysis::{analyze_file, analyze_weblog, AnalysisResult};
pub use args::Args;
pub use browser::{detect_browser, BrowserCategory};
pub use config::Config;
pub use fetch::FetchError;
pub use record::RawRecord;
pub use resource::is_image_path;
pub use stats::{HourBucket, LogStats};
pub use timestamp::extract_hour;
