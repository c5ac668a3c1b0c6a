//! Frame rendering for the terminal UI

use std::f64::consts::TAU;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Paragraph, Tabs,
    },
    Frame,
};

use crate::{state::SessionType, view::DisplaySnapshot};

/// Points sampled around the progress ring
const RING_SAMPLES: usize = 240;
/// Half-height of the canvas coordinate space; the ring has radius 1
const RING_EXTENT: f64 = 1.2;

const WORK_COLOR: Color = Color::Rgb(244, 63, 94);
const BREAK_COLOR: Color = Color::Rgb(16, 185, 129);
const TRACK_COLOR: Color = Color::Rgb(70, 70, 78);
const DIM_COLOR: Color = Color::Rgb(150, 150, 160);

fn session_color(session_type: SessionType) -> Color {
    match session_type {
        SessionType::Work => WORK_COLOR,
        SessionType::Break => BREAK_COLOR,
    }
}

/// Split the unit circle into the elapsed arc and the remaining track.
///
/// The arc starts at 12 o'clock and runs clockwise.
pub fn ring_points(progress_percent: f64, samples: usize) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let filled = (progress_percent.clamp(0.0, 100.0) / 100.0 * samples as f64).round() as usize;
    (0..samples)
        .map(|i| {
            let angle = i as f64 / samples as f64 * TAU;
            (i, (angle.sin(), angle.cos()))
        })
        .fold((Vec::new(), Vec::new()), |(mut arc, mut track), (i, point)| {
            if i < filled {
                arc.push(point);
            } else {
                track.push(point);
            }
            (arc, track)
        })
}

/// Draw the whole timer screen
pub fn draw(frame: &mut Frame<'_>, snapshot: &DisplaySnapshot) {
    let accent = session_color(snapshot.session_type);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Session selector
            Constraint::Min(8),    // Ring
            Constraint::Length(3), // Stats
            Constraint::Length(1), // Key legend
        ])
        .split(frame.size());

    draw_selector(frame, chunks[0], snapshot, accent);
    draw_ring(frame, chunks[1], snapshot, accent);
    draw_stats(frame, chunks[2], snapshot);
    draw_legend(frame, chunks[3], accent);
}

fn draw_selector(frame: &mut Frame<'_>, area: Rect, snapshot: &DisplaySnapshot, accent: Color) {
    let selected = match snapshot.session_type {
        SessionType::Work => 0,
        SessionType::Break => 1,
    };
    let tabs = Tabs::new(vec![" 1 Work ", " 2 Break "])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent))
                .title(Span::styled(
                    " Pomodoro Timer ",
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )),
        )
        .select(selected)
        .style(Style::default().fg(DIM_COLOR))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_ring(frame: &mut Frame<'_>, area: Rect, snapshot: &DisplaySnapshot, accent: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(TRACK_COLOR));
    let inner = block.inner(area);

    // terminal cells are about twice as tall as wide
    let x_extent =
        RING_EXTENT * f64::from(inner.width.max(1)) / (2.0 * f64::from(inner.height.max(1)));
    let (arc, track) = ring_points(snapshot.progress_percent, RING_SAMPLES);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-RING_EXTENT, RING_EXTENT])
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &track,
                color: TRACK_COLOR,
            });
            ctx.draw(&Points {
                coords: &arc,
                color: accent,
            });
        });
    frame.render_widget(canvas, area);

    let status = if snapshot.is_running {
        Span::styled("● running", Style::default().fg(Color::Green))
    } else {
        Span::styled("⏸ paused", Style::default().fg(Color::Yellow))
    };
    let center = Paragraph::new(vec![
        Line::from(Span::styled(
            snapshot.formatted_time.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(snapshot.session_label, Style::default().fg(accent))),
        Line::from(status),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(center, centered_rows(inner, 3));
}

fn draw_stats(frame: &mut Frame<'_>, area: Rect, snapshot: &DisplaySnapshot) {
    let mut spans = vec![
        Span::styled(
            snapshot.completed_sessions.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" sessions completed", Style::default().fg(DIM_COLOR)),
    ];
    if let Some(at) = snapshot.last_completed_at {
        spans.push(Span::styled(
            format!("  •  last at {}", at.format("%H:%M")),
            Style::default().fg(DIM_COLOR),
        ));
    }
    spans.push(Span::styled(
        if snapshot.is_sound_enabled { "  •  sound on" } else { "  •  sound off" },
        Style::default().fg(DIM_COLOR),
    ));

    let stats = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(TRACK_COLOR)),
        );
    frame.render_widget(stats, area);
}

fn draw_legend(frame: &mut Frame<'_>, area: Rect, accent: Color) {
    let key = |label: &'static str| {
        Span::styled(label, Style::default().fg(accent).add_modifier(Modifier::BOLD))
    };
    let text = |label: &'static str| Span::styled(label, Style::default().fg(DIM_COLOR));

    let legend = Paragraph::new(Line::from(vec![
        key("Space"),
        text(" start/pause  "),
        key("R"),
        text(" reset  "),
        key("S"),
        text(" sound  "),
        key("1/2"),
        text(" session  "),
        key("Q"),
        text(" quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(legend, area);
}

/// A full-width strip of `rows` lines in the vertical middle of `area`
fn centered_rows(area: Rect, rows: u16) -> Rect {
    let height = rows.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}
