use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::MediaEngine;
use crate::config;
use crate::runtime::input::{self, InputOutcome, InputState};
use crate::ui::{self, HitMap};

/// Main terminal event loop: draws, handles input and drives the
/// time-update tick. Returns `Ok(())` when shutdown is requested.
pub fn run<E: MediaEngine>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &config::Settings,
    app: &mut App<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.ui.tick_ms);
    let mut hits = HitMap::default();
    let mut input_state = InputState::default();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| hits = ui::draw(f, app, settings))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(key, app, &settings.controls) == InputOutcome::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse(mouse, app, &hits, &settings.controls, &mut input_state)
                }
                // Resize: the next draw lays out again.
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
