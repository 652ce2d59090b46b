use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::catalog::MediaLocation;

use super::media::{Media, create_sink_at, open_media};
use super::types::{AudioCmd, PlaybackHandle};

/// How often the thread publishes elapsed time and checks for the end of a track.
const TICK: Duration = Duration::from_millis(100);

/// Elapsed playback time: time accumulated before the last resume plus the
/// time since then, capped at the track length when it is known.
pub(super) fn elapsed_at(
    accumulated: Duration,
    started_at: Option<Instant>,
    now: Instant,
    duration: Option<Duration>,
) -> Duration {
    let elapsed = accumulated
        + started_at.map_or(Duration::ZERO, |st| now.saturating_duration_since(st));
    match duration {
        Some(d) => elapsed.min(d),
        None => elapsed,
    }
}

/// Take every command already queued behind `first`, dropping the ones a
/// later command makes pointless.
pub(super) fn drain_pending(first: AudioCmd, rx: &Receiver<AudioCmd>) -> Vec<AudioCmd> {
    let mut batch = vec![first];
    batch.extend(rx.try_iter());
    supersede(batch)
}

/// A `Load` supersedes everything queued before it except volume changes.
/// A `Quit` supersedes everything but volume changes, and ends the batch.
pub(super) fn supersede(mut batch: Vec<AudioCmd>) -> Vec<AudioCmd> {
    let cut = match batch.iter().position(|c| matches!(c, AudioCmd::Quit { .. })) {
        Some(quit) => {
            batch.truncate(quit + 1);
            Some(quit)
        }
        None => batch.iter().rposition(|c| matches!(c, AudioCmd::Load(_))),
    };
    let Some(cut) = cut else {
        return batch;
    };

    let newest = batch.split_off(cut);
    let before = batch.len();
    let mut kept: Vec<AudioCmd> = batch
        .into_iter()
        .filter(|c| matches!(c, AudioCmd::SetVolume(_)))
        .collect();
    if kept.len() < before {
        log::debug!("skipped {} superseded audio commands", before - kept.len());
    }
    kept.extend(newest);
    kept
}

/// Playback state owned by the audio thread.
struct Deck {
    stream: Option<OutputStream>,
    media: Option<Media>,
    sink: Option<Sink>,
    paused: bool,
    // Track start time and accumulated elapsed when paused.
    started_at: Option<Instant>,
    accumulated: Duration,
    volume: f32,
}

impl Deck {
    fn new(stream: Option<OutputStream>) -> Self {
        Self {
            stream,
            media: None,
            sink: None,
            paused: true,
            started_at: None,
            accumulated: Duration::ZERO,
            volume: 1.0,
        }
    }

    fn elapsed(&self) -> Duration {
        elapsed_at(
            self.accumulated,
            self.started_at,
            Instant::now(),
            self.media.as_ref().and_then(|m| m.duration),
        )
    }

    fn build_sink(&self, media: &Media, start_at: Duration) -> Option<Sink> {
        let stream = self.stream.as_ref()?;
        match create_sink_at(stream, media, start_at, self.volume) {
            Ok(sink) => Some(sink),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    fn stop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn load(&mut self, location: MediaLocation, timeout: Duration, info: &PlaybackHandle) {
        self.stop_sink();
        self.media = None;
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;

        match open_media(&location, timeout) {
            Ok(media) => {
                log::debug!("loaded {} (duration {:?})", media.location, media.duration);
                let duration = media.duration;
                self.sink = self.build_sink(&media, Duration::ZERO);
                self.media = Some(media);
                if let Ok(mut info) = info.lock() {
                    info.duration = duration;
                    info.elapsed = Duration::ZERO;
                }
            }
            Err(e) => {
                log::warn!("cannot load {location}: {e}");
                if let Ok(mut info) = info.lock() {
                    info.duration = None;
                    info.playing = false;
                }
            }
        }
    }

    fn play(&mut self, info: &PlaybackHandle) {
        // A media element restarts from zero when played after reaching its end.
        if self.sink.as_ref().is_some_and(|s| s.empty()) {
            if let Some(media) = self.media.clone() {
                self.stop_sink();
                self.sink = self.build_sink(&media, Duration::ZERO);
                self.accumulated = Duration::ZERO;
            }
        }

        let Some(sink) = self.sink.as_ref() else {
            if let Ok(mut info) = info.lock() {
                info.playing = false;
            }
            return;
        };

        sink.play();
        if self.paused {
            self.started_at = Some(Instant::now());
            self.paused = false;
        }
        if let Ok(mut info) = info.lock() {
            info.playing = true;
            info.elapsed = self.accumulated;
        }
    }

    fn pause(&mut self, info: &PlaybackHandle) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
        if !self.paused {
            self.accumulated = self.elapsed();
            self.started_at = None;
            self.paused = true;
        }
        if let Ok(mut info) = info.lock() {
            info.playing = false;
            info.elapsed = self.accumulated;
        }
    }

    fn seek(&mut self, position: Duration, info: &PlaybackHandle) {
        let Some(media) = self.media.clone() else {
            return;
        };
        let position = media.duration.map_or(position, |d| position.min(d));

        // Scrubbing: rebuild the sink and skip into the decoded stream.
        self.stop_sink();
        self.sink = self.build_sink(&media, position);
        if !self.paused {
            if let Some(s) = self.sink.as_ref() {
                s.play();
            }
            self.started_at = Some(Instant::now());
        }
        self.accumulated = position;

        if let Ok(mut info) = info.lock() {
            info.elapsed = position;
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(self.volume);
        }
    }

    /// Publish elapsed time; detect the end of the current track.
    fn tick(&mut self, info: &PlaybackHandle) {
        if self.paused {
            return;
        }

        let ended = self.sink.as_ref().is_none_or(|s| s.empty());
        if ended {
            let end = self
                .media
                .as_ref()
                .and_then(|m| m.duration)
                .unwrap_or_else(|| self.elapsed());
            self.accumulated = end;
            self.started_at = None;
            self.paused = true;
            if let Ok(mut info) = info.lock() {
                info.playing = false;
                info.elapsed = end;
            }
            return;
        }

        if let Ok(mut info) = info.lock() {
            info.elapsed = self.elapsed();
        }
    }

    fn fade_out(&self, fade_out_ms: u64) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        if fade_out_ms == 0 || self.paused {
            sink.set_volume(0.0);
            return;
        }
        let steps: u64 = 20;
        let step_ms = (fade_out_ms / steps).max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            sink.set_volume(self.volume * (1.0 - t));
            thread::sleep(Duration::from_millis(step_ms));
        }
        sink.set_volume(0.0);
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
    fetch_timeout: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
                // but noisy for a TUI app.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(e) => {
                log::error!("no audio output device, playback is disabled: {e}");
                None
            }
        };

        let mut deck = Deck::new(stream);

        'commands: loop {
            match rx.recv_timeout(TICK) {
                Ok(first) => {
                    for cmd in drain_pending(first, &rx) {
                        match cmd {
                            AudioCmd::Load(location) => {
                                deck.load(location, fetch_timeout, &playback_info)
                            }
                            AudioCmd::Play => deck.play(&playback_info),
                            AudioCmd::Pause => deck.pause(&playback_info),
                            AudioCmd::SeekTo(position) => deck.seek(position, &playback_info),
                            AudioCmd::SetVolume(volume) => deck.set_volume(volume),
                            AudioCmd::Quit { fade_out_ms } => {
                                deck.fade_out(fade_out_ms);
                                deck.stop_sink();
                                // Update shared state so the UI doesn't keep showing Playing.
                                if let Ok(mut info) = playback_info.lock() {
                                    info.playing = false;
                                }
                                break 'commands;
                            }
                        }
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            deck.tick(&playback_info);
        }
    })
}
