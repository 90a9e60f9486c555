use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use lexiscope_core::Record;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the dataset comes from: a local JSON file or a single HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://`/`https://` strings parse as URLs, anything else as a path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Short display name for headers (file name or full URL).
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Url(url) => url.clone(),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Load and decode the record list from the given source.
///
/// This runs exactly once per session; a failure here is terminal for the
/// dashboard (the UI shows a static error in place of each chart). An empty
/// record array is not an error.
pub async fn load_records(source: &DataSource) -> Result<Vec<Record>, IngestError> {
    let body = match source {
        DataSource::File(path) => read_file(path).await?,
        DataSource::Url(url) => fetch_url(url).await?,
    };
    let records = parse_records(&body)?;
    info!(source = %source, count = records.len(), "dataset loaded");
    Ok(records)
}

/// Decode a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_str(json)
}

async fn read_file(path: &Path) -> Result<String, IngestError> {
    debug!(path = %path.display(), "reading dataset file");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })
}

async fn fetch_url(url: &str) -> Result<String, IngestError> {
    debug!(url, "fetching dataset");
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.text().await?)
}
