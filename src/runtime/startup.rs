use crate::app::App;
use crate::audio::MediaEngine;
use crate::config;

/// Apply startup settings and cue the default artist.
pub fn apply_startup<E: MediaEngine>(app: &mut App<E>, settings: &config::Settings) {
    app.set_volume(settings.audio.initial_volume);
    if app.start(&settings.catalog.default_artist) {
        log::info!("{} artists available", app.groups.names().len());
    }
}
