use std::env;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::catalog::{self, CatalogSource};
use crate::player::Player;

mod event_loop;
mod input;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (mut settings, warnings) = settings::load_settings();

    match logging::init(&settings.log) {
        Ok(Some(path)) => log::info!("logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("tuneshelf: logging disabled: {e}"),
    }
    for warning in &warnings {
        log::warn!("{warning}");
    }

    // A catalog path or URL on the command line wins over the config.
    if let Some(arg) = env::args().nth(1) {
        settings.catalog.source = arg;
    }
    let source = CatalogSource::parse(&settings.catalog.source);
    let timeout = Duration::from_secs(settings.catalog.fetch_timeout_secs);

    let songs = catalog::fetch_catalog(&source, timeout);
    log::info!("loaded {} songs from {source}", songs.len());

    let audio_player = AudioPlayer::new(source, timeout);
    let mut app = App::new(songs, Player::new(audio_player));
    startup::apply_startup(&mut app, &settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    app.player
        .engine()
        .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    log::info!("shut down");
    run_result
}
