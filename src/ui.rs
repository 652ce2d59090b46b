//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. Every
//! draw also records the clickable regions of the frame in a `HitMap`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Focus};
use crate::audio::MediaEngine;
use crate::config::Settings;

mod hitmap;

pub use hitmap::*;

#[cfg(test)]
mod tests;

const ROW_HEIGHT: u16 = 2;
const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 3;
const SEARCH_WIDTH: u16 = 30;
const VOLUME_SLIDER_WIDTH: u16 = 16;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("tab", "artists/library");
    map.insert("j/k", "up/down");
    map.insert("enter", "play selected");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    // H/L is filled dynamically from config.
    map.insert("+/-", "volume");
    map.insert("v", "volume slider");
    map.insert("/", "search artists");
    map.insert("m", "library panel");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "tab", "j/k", "enter", "space/p", "h/l", "H/L", "+/-", "v", "/", "m", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] seek -/+{}s", scrub_seconds))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

const SEARCH_CONTROLS: &str = "type to filter artists | [enter] play first match | [esc] clear";

/// First and one-past-last index of a `height`-sized window over `total`
/// items that keeps `selected` roughly centered.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

/// The seek bar as text: a filled track up to the indicator, then an empty one.
pub fn seek_bar_line(percent: f64, width: u16) -> String {
    let w = width as usize;
    if w == 0 {
        return String::new();
    }
    let p = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let pos = ((p / 100.0) * (w - 1) as f64).round() as usize;

    let mut s = String::with_capacity(w * 3);
    s.push_str(&"━".repeat(pos));
    s.push('●');
    s.push_str(&"─".repeat(w - 1 - pos));
    s
}

/// Render the entire UI into `frame` and return the clickable regions.
pub fn draw<E: MediaEngine>(frame: &mut Frame, app: &App<E>, settings: &Settings) -> HitMap {
    let mut hits = HitMap::default();
    let area = frame.area();
    let narrow = area.width < settings.ui.narrow_width;

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(5),
        Constraint::Length(3),
    ])
    .split(area);

    draw_header(frame, app, settings, narrow, chunks[0], &mut hits);

    if narrow {
        if app.panel_open {
            draw_library(frame, app, chunks[1], true, &mut hits);
        } else {
            draw_cards(frame, app, chunks[1], &mut hits);
        }
    } else {
        let cols = Layout::horizontal([
            Constraint::Percentage(settings.ui.panel_width_percent),
            Constraint::Min(0),
        ])
        .split(chunks[1]);
        draw_library(frame, app, cols[0], false, &mut hits);
        draw_cards(frame, app, cols[1], &mut hits);
    }

    draw_playbar(frame, app, chunks[2], &mut hits);

    let footer_text = if app.groups.search_active() {
        SEARCH_CONTROLS.to_string()
    } else {
        controls_text(settings.controls.scrub_seconds)
    };
    let footer = Paragraph::new(footer_text)
        .block(
            Block::bordered()
                .title(" controls ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);

    hits
}

fn draw_header<E: MediaEngine>(
    frame: &mut Frame,
    app: &App<E>,
    settings: &Settings,
    narrow: bool,
    area: Rect,
    hits: &mut HitMap,
) {
    let block = Block::bordered();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The hamburger only exists while the panel is hidden on a narrow terminal.
    let show_hamburger = narrow && !app.panel_open;
    let cols = Layout::horizontal([
        Constraint::Length(if show_hamburger { 3 } else { 0 }),
        Constraint::Min(0),
        Constraint::Length(SEARCH_WIDTH),
    ])
    .split(inner);

    if show_hamburger {
        frame.render_widget(Paragraph::new(" ≡ ").bold(), cols[0]);
        hits.push(cols[0], Target::Hamburger);
    }

    let header = Paragraph::new(settings.ui.header_text.as_str()).alignment(Alignment::Center);
    frame.render_widget(header, cols[1]);

    let query = app.groups.query();
    let search = if app.groups.search_active() {
        Paragraph::new(format!(" / {query}▏")).add_modifier(Modifier::REVERSED)
    } else if !query.is_empty() {
        Paragraph::new(format!(" / {query}"))
    } else {
        Paragraph::new(" [/] search artists").dim()
    };
    frame.render_widget(search, cols[2]);
    hits.push(cols[2], Target::SearchBox);
}

fn draw_library<E: MediaEngine>(
    frame: &mut Frame,
    app: &App<E>,
    area: Rect,
    closable: bool,
    hits: &mut HitMap,
) {
    let focused = app.focus == Focus::Playlist;
    let mut block = Block::bordered().title(" Your Library ");
    if focused {
        block = block.border_style(Style::default().add_modifier(Modifier::BOLD));
    }
    if closable {
        block = block.title_top(Line::from(" ✕ ").right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if closable {
        let close = Rect::new(area.right().saturating_sub(4), area.y, 3, 1).intersection(area);
        hits.push(close, Target::ClosePanel);
    }

    if app.playlist.is_empty() {
        frame.render_widget(Paragraph::new("No songs").dim(), inner);
        return;
    }

    // Only build ListItems for the visible window.
    let rows = app.playlist.rows();
    let per_page = (inner.height / ROW_HEIGHT) as usize;
    let cursor = app.playlist.cursor();
    let (start, end) = visible_window(rows.len(), per_page, cursor);
    let playing = app.current_index();

    let items: Vec<ListItem> = (start..end)
        .map(|i| {
            let row = &rows[i];
            let marker = if playing == Some(i) { "♪ " } else { "  " };
            ListItem::new(vec![
                Line::from(format!("{marker}{}", row.title)).bold(),
                Line::from(format!("  {}", row.artist)).dim(),
            ])
        })
        .collect();

    for (pos, i) in (start..end).enumerate() {
        let y = inner.y as usize + pos * ROW_HEIGHT as usize;
        if y >= inner.bottom() as usize {
            break;
        }
        let height = ROW_HEIGHT.min(inner.bottom() - y as u16);
        if let Some(binding) = app.playlist.binding(i) {
            hits.push(
                Rect::new(inner.x, y as u16, inner.width, height),
                Target::Row(binding),
            );
        }
    }

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    };
    let list = List::new(items).highlight_style(highlight);
    let mut state = ListState::default();
    if (start..end).contains(&cursor) {
        state.select(Some(cursor - start));
    }
    frame.render_stateful_widget(list, inner, &mut state);
}

fn draw_cards<E: MediaEngine>(frame: &mut Frame, app: &App<E>, area: Rect, hits: &mut HitMap) {
    let focused = app.focus == Focus::Groups;
    let mut block = Block::bordered().title(" Artists ");
    if focused {
        block = block.border_style(Style::default().add_modifier(Modifier::BOLD));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(status) = &app.status {
        let p = Paragraph::new(status.as_str())
            .alignment(Alignment::Center)
            .bold();
        frame.render_widget(p, inner);
        return;
    }

    let visible = app.groups.visible();
    if visible.is_empty() {
        frame.render_widget(Paragraph::new("No artists match").dim(), inner);
        return;
    }
    if inner.width == 0 || inner.height < CARD_HEIGHT {
        return;
    }

    let cols = (inner.width / CARD_WIDTH).max(1) as usize;
    let rows_fit = (inner.height / CARD_HEIGHT) as usize;
    let card_width = CARD_WIDTH.min(inner.width);

    // Scroll by whole rows so the cursor card stays on screen.
    let cursor_row = app.groups.cursor() / cols;
    let first_row = (cursor_row + 1).saturating_sub(rows_fit);
    let loaded_artist = app.player.loaded().map(|t| t.artist.as_str());

    for (i, name) in visible.iter().enumerate().skip(first_row * cols) {
        let row = i / cols - first_row;
        let col = i % cols;
        if row >= rows_fit {
            break;
        }
        let rect = Rect::new(
            inner.x + col as u16 * CARD_WIDTH,
            inner.y + row as u16 * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        );

        let mut card = Block::bordered();
        if loaded_artist == Some(*name) {
            card = card.border_style(Style::default().add_modifier(Modifier::BOLD));
        }
        let mut text = Paragraph::new(*name)
            .alignment(Alignment::Center)
            .block(card);
        if focused && i == app.groups.cursor() {
            text = text.add_modifier(Modifier::REVERSED);
        }
        frame.render_widget(text, rect);
        hits.push(rect, Target::Card(name.to_string()));
    }
}

fn draw_playbar<E: MediaEngine>(frame: &mut Frame, app: &App<E>, area: Rect, hits: &mut HitMap) {
    let view = app.player.view();
    let block = Block::bordered()
        .title(" Now Playing ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1); 3]).split(inner);

    // Song info and time
    let time_width = view.time_text.chars().count() as u16 + 1;
    let top =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(time_width)]).split(rows[0]);
    let label = if view.label.is_empty() {
        Paragraph::new("Nothing loaded").dim()
    } else {
        Paragraph::new(view.label.as_str()).bold()
    };
    frame.render_widget(label, top[0]);
    frame.render_widget(
        Paragraph::new(view.time_text.as_str()).alignment(Alignment::Right),
        top[1],
    );

    // Seek bar
    frame.render_widget(
        Paragraph::new(seek_bar_line(view.seek_percent, rows[1].width)),
        rows[1],
    );
    hits.push(rows[1], Target::SeekBar);

    // Transport buttons and volume
    let slider_width = if app.volume_slider_visible {
        VOLUME_SLIDER_WIDTH
    } else {
        0
    };
    let ctl = Layout::horizontal([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(4),
        Constraint::Length(slider_width),
    ])
    .split(rows[2]);

    frame.render_widget(Paragraph::new(" ⏮ "), ctl[0]);
    hits.push(ctl[0], Target::Previous);
    frame.render_widget(
        Paragraph::new(format!(" {} ", view.icon.glyph())).bold(),
        ctl[2],
    );
    hits.push(ctl[2], Target::PlayPause);
    frame.render_widget(Paragraph::new(" ⏭ "), ctl[4]);
    hits.push(ctl[4], Target::Next);

    frame.render_widget(Paragraph::new("Vol "), ctl[6]);
    hits.push(ctl[6], Target::VolumeIcon);

    if app.volume_slider_visible {
        let volume = app.player.volume().clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .ratio(volume as f64)
            .label(format!("{:.0}%", volume * 100.0));
        frame.render_widget(gauge, ctl[7]);
        hits.push(ctl[7], Target::VolumeBar);
    }
}
