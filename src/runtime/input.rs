//! Keyboard and mouse handling, kept apart from the terminal so it can be
//! driven by tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Focus};
use crate::audio::MediaEngine;
use crate::config::ControlsSettings;
use crate::ui::{Hit, HitMap};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

/// Input state carried across events.
#[derive(Debug, Default)]
pub struct InputState {
    /// The pointer was over the volume controls on the last move.
    hovering_volume: bool,
}

fn scrub(controls: &ControlsSettings) -> i64 {
    i64::try_from(controls.scrub_seconds).unwrap_or(i64::MAX)
}

pub fn handle_key<E: MediaEngine>(
    key: KeyEvent,
    app: &mut App<E>,
    controls: &ControlsSettings,
) -> InputOutcome {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputOutcome::Quit;
    }

    if app.groups.search_active() {
        match key.code {
            KeyCode::Esc => app.groups.clear_search(),
            KeyCode::Backspace => app.groups.pop_query_char(),
            KeyCode::Enter => {
                app.groups.finish_search();
                app.focus = Focus::Groups;
                if let Some(first) = app.groups.visible().first().map(|s| s.to_string()) {
                    app.select_group(&first);
                }
            }
            KeyCode::Char(c) if !c.is_control() => app.groups.push_query_char(c),
            _ => {}
        }
        return InputOutcome::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return InputOutcome::Quit,
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Char('j') | KeyCode::Down => match app.focus {
            Focus::Groups => app.groups.cursor_next(),
            Focus::Playlist => app.playlist.cursor_next(),
        },
        KeyCode::Char('k') | KeyCode::Up => match app.focus {
            Focus::Groups => app.groups.cursor_prev(),
            Focus::Playlist => app.playlist.cursor_prev(),
        },
        KeyCode::Enter => {
            match app.focus {
                Focus::Groups => app.select_group_at_cursor(),
                Focus::Playlist => app.activate_cursor_row(),
            };
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_play_pause(),
        KeyCode::Char('h') => {
            app.previous();
        }
        KeyCode::Char('l') => {
            app.next();
        }
        KeyCode::Char('H') => {
            app.seek_by(-scrub(controls));
        }
        KeyCode::Char('L') => {
            app.seek_by(scrub(controls));
        }
        KeyCode::Char('+') | KeyCode::Char('=') => app.change_volume(controls.volume_step),
        KeyCode::Char('-') => app.change_volume(-controls.volume_step),
        KeyCode::Char('m') => app.toggle_panel(),
        KeyCode::Char('v') => app.volume_slider_visible = !app.volume_slider_visible,
        KeyCode::Char('/') => {
            app.focus = Focus::Groups;
            app.groups.open_search();
        }
        KeyCode::Esc => {
            app.close_panel();
            app.volume_slider_visible = false;
            // Also drops a filter kept by Enter.
            app.groups.clear_search();
        }
        _ => {}
    }

    InputOutcome::Continue
}

/// Act on a click that landed on `hit`.
pub fn apply_hit<E: MediaEngine>(hit: Option<Hit>, app: &mut App<E>) {
    // Clicking anywhere but the search box blurs it.
    if hit != Some(Hit::SearchBox) {
        app.groups.dismiss_search();
    }

    let Some(hit) = hit else {
        return;
    };
    match hit {
        Hit::Row(binding) => {
            app.focus = Focus::Playlist;
            app.activate_row(binding);
        }
        Hit::Card(name) => {
            app.focus = Focus::Groups;
            app.select_group(&name);
        }
        Hit::SeekBar(fraction) => {
            app.seek_to(fraction);
        }
        Hit::VolumeIcon => app.volume_slider_visible = !app.volume_slider_visible,
        Hit::VolumeBar(volume) => app.set_volume(volume),
        Hit::Previous => {
            app.previous();
        }
        Hit::PlayPause => app.toggle_play_pause(),
        Hit::Next => {
            app.next();
        }
        Hit::Hamburger => app.toggle_panel(),
        Hit::ClosePanel => app.close_panel(),
        Hit::SearchBox => {
            app.focus = Focus::Groups;
            app.groups.open_search();
        }
    }
}

pub fn handle_mouse<E: MediaEngine>(
    mouse: MouseEvent,
    app: &mut App<E>,
    hits: &HitMap,
    controls: &ControlsSettings,
    state: &mut InputState,
) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => apply_hit(hits.hit(column, row), app),
        // Dragging scrubs the bars without blurring anything.
        MouseEventKind::Drag(MouseButton::Left) => match hits.hit(column, row) {
            Some(Hit::SeekBar(fraction)) => {
                app.seek_to(fraction);
            }
            Some(Hit::VolumeBar(volume)) => app.set_volume(volume),
            _ => {}
        },
        MouseEventKind::Moved => {
            let over = hits.is_over_volume(column, row);
            if over != state.hovering_volume {
                state.hovering_volume = over;
                app.volume_slider_visible = over;
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let up = mouse.kind == MouseEventKind::ScrollUp;
            if hits.is_over_volume(column, row) {
                let step = controls.volume_step;
                app.change_volume(if up { step } else { -step });
                return;
            }
            match (app.focus, up) {
                (Focus::Groups, true) => app.groups.cursor_prev(),
                (Focus::Groups, false) => app.groups.cursor_next(),
                (Focus::Playlist, true) => app.playlist.cursor_prev(),
                (Focus::Playlist, false) => app.playlist.cursor_next(),
            }
        }
        _ => {}
    }
}
