use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

/// Where the catalog document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(Url),
}

/// Where a track's audio is read from, after resolving `audioUrl`
/// against the catalog location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaLocation {
    File(PathBuf),
    Url(Url),
}

impl MediaLocation {
    /// `file:` URLs become paths; everything else stays a URL.
    fn from_url(url: Url) -> Self {
        if url.scheme() == "file" {
            if let Ok(path) = url.to_file_path() {
                return Self::File(path);
            }
        }
        Self::Url(url)
    }
}

/// An absolute URL with a scheme the player can read.
fn absolute_url(s: &str) -> Option<Url> {
    let url = Url::parse(s).ok()?;
    matches!(url.scheme(), "http" | "https" | "file").then_some(url)
}

impl CatalogSource {
    /// `http(s)://` strings are URLs, `file://` URLs and anything else are paths.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        match absolute_url(s).map(MediaLocation::from_url) {
            Some(MediaLocation::Url(url)) => Self::Url(url),
            Some(MediaLocation::File(path)) => Self::File(path),
            None => Self::File(PathBuf::from(s)),
        }
    }

    /// Resolve a track's `audioUrl` the way a page resolves a relative `src`:
    /// absolute URLs and paths pass through, relative ones are taken relative
    /// to the catalog document.
    pub fn resolve(&self, audio_url: &str) -> MediaLocation {
        let audio_url = audio_url.trim();
        match self {
            Self::Url(base) => match base.join(audio_url) {
                Ok(url) => MediaLocation::from_url(url),
                Err(e) => {
                    log::warn!("cannot resolve {audio_url:?} against {base}: {e}");
                    MediaLocation::File(PathBuf::from(audio_url))
                }
            },
            Self::File(catalog_path) => {
                if let Some(url) = absolute_url(audio_url) {
                    return MediaLocation::from_url(url);
                }
                // Joining an absolute path replaces the base.
                let dir = catalog_path.parent().unwrap_or_else(|| Path::new(""));
                MediaLocation::File(dir.join(audio_url))
            }
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => write!(f, "{u}"),
        }
    }
}

impl fmt::Display for MediaLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => write!(f, "{u}"),
        }
    }
}
