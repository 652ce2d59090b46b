use std::path::PathBuf;
use std::time::Duration;

use super::model::Track;
use super::source::CatalogSource;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog document: a JSON array of track records.
pub fn parse_catalog(text: &str) -> Result<Vec<Track>, CatalogError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse the catalog, surfacing every failure to the caller.
pub fn try_fetch_catalog(
    source: &CatalogSource,
    timeout: Duration,
) -> Result<Vec<Track>, CatalogError> {
    let text = match source {
        CatalogSource::File(path) => {
            std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?
        }
        CatalogSource::Url(url) => {
            let agent = ureq::AgentBuilder::new().timeout(timeout).build();
            let response = match agent.get(url.as_str()).call() {
                Ok(response) => response,
                Err(ureq::Error::Status(code, _)) => return Err(CatalogError::Status(code)),
                Err(e) => return Err(CatalogError::Transport(e.to_string())),
            };
            response
                .into_string()
                .map_err(|e| CatalogError::Transport(e.to_string()))?
        }
    };

    parse_catalog(&text)
}

/// Fetch the catalog, substituting an empty one on any failure.
///
/// Failures are reported through the log and never returned; callers treat an
/// empty result as "no catalog available".
pub fn fetch_catalog(source: &CatalogSource, timeout: Duration) -> Vec<Track> {
    match try_fetch_catalog(source, timeout) {
        Ok(tracks) => {
            log::info!("songs fetched from {source}: {} tracks", tracks.len());
            tracks
        }
        Err(e) => {
            log::error!("error fetching songs from {source}: {e}");
            Vec::new()
        }
    }
}
