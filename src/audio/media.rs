//! Loading encoded audio and turning it into `rodio` sinks.
//!
//! Media is read fully into memory once per `Load`, so seeking can rebuild a
//! decoder at any offset without touching the file or network again.

use std::io::{Cursor, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use lofty::prelude::*;
use lofty::probe::Probe;
use rodio::{Decoder, OutputStream, Sink, Source};

use crate::catalog::MediaLocation;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
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

    #[error("failed to decode {location}: {reason}")]
    Decode { location: String, reason: String },
}

/// Encoded audio held in memory.
#[derive(Clone)]
pub(super) struct Media {
    pub location: MediaLocation,
    pub duration: Option<Duration>,
    bytes: Arc<[u8]>,
}

fn read_bytes(location: &MediaLocation, timeout: Duration) -> Result<Vec<u8>, MediaError> {
    match location {
        MediaLocation::File(path) => std::fs::read(path).map_err(|source| MediaError::Io {
            path: path.clone(),
            source,
        }),
        MediaLocation::Url(url) => {
            let agent = ureq::AgentBuilder::new().timeout(timeout).build();
            let response = match agent.get(url.as_str()).call() {
                Ok(response) => response,
                Err(ureq::Error::Status(code, _)) => return Err(MediaError::Status(code)),
                Err(e) => return Err(MediaError::Transport(e.to_string())),
            };
            let mut buf = Vec::new();
            response
                .into_reader()
                .read_to_end(&mut buf)
                .map_err(|e| MediaError::Transport(e.to_string()))?;
            Ok(buf)
        }
    }
}

/// Read the length of an encoded file from its container metadata.
pub(super) fn probe_duration(bytes: &[u8]) -> Option<Duration> {
    let tagged = Probe::new(Cursor::new(bytes))
        .guess_file_type()
        .ok()?
        .read()
        .ok()?;
    let d = tagged.properties().duration();
    (!d.is_zero()).then_some(d)
}

type MemoryDecoder = Decoder<Cursor<Arc<[u8]>>>;

fn decoder(media_bytes: &Arc<[u8]>, location: &MediaLocation) -> Result<MemoryDecoder, MediaError> {
    Decoder::new(Cursor::new(Arc::clone(media_bytes))).map_err(|e| MediaError::Decode {
        location: location.to_string(),
        reason: e.to_string(),
    })
}

/// Fetch and validate the media at `location`.
pub(super) fn open_media(location: &MediaLocation, timeout: Duration) -> Result<Media, MediaError> {
    let bytes: Arc<[u8]> = read_bytes(location, timeout)?.into();

    // Container metadata is more reliable than the decoder's estimate (mp3 rarely has one).
    let decoded_len = decoder(&bytes, location)?.total_duration();
    let duration = probe_duration(&bytes).or(decoded_len.filter(|d| !d.is_zero()));

    Ok(Media {
        location: location.clone(),
        duration,
        bytes,
    })
}

/// Create a paused `Sink` for `media` that starts playback at `start_at`.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    media: &Media,
    start_at: Duration,
    volume: f32,
) -> Result<Sink, MediaError> {
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    let source = decoder(&media.bytes, &media.location)?.skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
