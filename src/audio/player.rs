use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::catalog::CatalogSource;

use super::engine::MediaEngine;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// The application's single playback handle.
///
/// Commands go to the audio thread; the shared `PlaybackInfo` is updated
/// right away so the caller observes its own writes, and again by the thread
/// as real playback progresses.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    base: CatalogSource,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Spawn the audio thread. Relative `audioUrl`s are resolved against `base`.
    pub fn new(base: CatalogSource, fetch_timeout: Duration) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle = spawn_audio_thread(rx, playback_info.clone(), fetch_timeout);

        Self {
            tx,
            playback: playback_info,
            base,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }

    fn with_info<T>(&self, f: impl FnOnce(&mut PlaybackInfo) -> T) -> Option<T> {
        self.playback.lock().ok().map(|mut info| f(&mut *info))
    }

    fn dispatch(&self, cmd: AudioCmd) {
        if let Err(e) = self.send(cmd) {
            log::warn!("audio thread is gone, dropping {:?}", e.0);
        }
    }
}

impl MediaEngine for AudioPlayer {
    fn set_source(&mut self, audio_url: &str) {
        let location = self.base.resolve(audio_url);
        self.with_info(|info| {
            info.source = Some(location.clone());
            info.elapsed = Duration::ZERO;
            info.duration = None;
            info.playing = false;
        });
        self.dispatch(AudioCmd::Load(location));
    }

    fn play(&mut self) {
        self.with_info(|info| info.playing = info.source.is_some());
        self.dispatch(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.with_info(|info| info.playing = false);
        self.dispatch(AudioCmd::Pause);
    }

    fn is_paused(&self) -> bool {
        self.with_info(|info| !info.playing).unwrap_or(true)
    }

    fn current_time(&self) -> Duration {
        self.with_info(|info| info.elapsed).unwrap_or_default()
    }

    fn duration(&self) -> Option<Duration> {
        self.with_info(|info| info.duration).flatten()
    }

    fn set_current_time(&mut self, position: Duration) {
        self.with_info(|info| info.elapsed = position);
        self.dispatch(AudioCmd::SeekTo(position));
    }

    fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.with_info(|info| info.volume = volume);
        self.dispatch(AudioCmd::SetVolume(volume));
    }

    fn volume(&self) -> f32 {
        self.with_info(|info| info.volume).unwrap_or(1.0)
    }
}
