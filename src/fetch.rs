use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Downloads `url` into `destination`, replacing any existing file. No retries.
///
/// A failed transfer leaves no partial file behind.
pub fn download_to_file(url: &str, destination: &Path) -> Result<u64, FetchError> {
    let start_time = Instant::now();
    let url = Url::parse(url)?;
    info!(action = "start", component = "download", url = %url, destination = ?destination, "Downloading log file");

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let mut response = client.get(url).send()?.error_for_status()?;

    let written = match write_body(&mut response, destination) {
        Ok(written) => written,
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(destination) {
                warn!(action = "cleanup", component = "download", error = %cleanup, "Failed to remove partial download");
            }
            return Err(e);
        }
    };

    info!(
        action = "complete",
        component = "download",
        bytes = written,
        duration_ms = start_time.elapsed().as_millis(),
        "Download completed"
    );
    Ok(written)
}

fn write_body(response: &mut reqwest::blocking::Response, destination: &Path) -> Result<u64, FetchError> {
    let write_err = |source: std::io::Error| FetchError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let file = File::create(destination).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    let written = response.copy_to(&mut writer)?;
    writer.flush().map_err(write_err)?;
    Ok(written)
}
