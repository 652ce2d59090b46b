use serde::Deserialize;

/// A single catalog entry. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
}

impl Track {
    /// Text shown in the now-playing label: `"{title} - {artist}"`.
    pub fn now_playing_label(&self) -> String {
        format!("{} - {}", self.title, self.artist)
    }
}
