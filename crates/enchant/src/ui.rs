//! UI rendering for the TUI

use crate::app::App;
use crate::color;
use enchant_core::{FontBackend, Size};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Main drawing function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_content(frame, app, chunks[0]);
    draw_status_bar(frame, app, chunks[1]);

    if app.show_help {
        draw_help_popover(frame);
    }
}

/// Center a `width` x `height` rect inside `area`, clamped to it
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    // One cell of border on each side
    let available = Size {
        width: area.width.saturating_sub(2) as f32,
        height: area.height.saturating_sub(2) as f32,
    };
    app.prepare_frame(available);

    let width = (app.size.width.ceil() as u16).saturating_add(2);
    let height = (app.size.height.ceil() as u16).saturating_add(2);
    let rect = centered_rect(area, width, height);

    let background = color::to_rgb(app.background);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(background));
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    // Glyph y is a baseline; the cell row starts at the top of the line
    let top = app.font.metrics(app.view.paint()).top;
    let buf = frame.buffer_mut();
    for glyph in &app.glyphs {
        let col = glyph.x.round();
        let row = (glyph.y + top).round();
        if col < 0.0 || row < 0.0 || col >= inner.width as f32 || row >= inner.height as f32 {
            continue;
        }
        let position = (inner.x + col as u16, inner.y + row as u16);
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_char(glyph.glyph)
                .set_fg(color::composite(glyph.color, app.background))
                .set_bg(background);
        }
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let dim_style = Style::default().fg(Color::DarkGray);
    let text_style = Style::default().fg(Color::Gray);

    let mut spans = vec![
        Span::styled(
            format!(" {}/{} ", app.index + 1, app.words.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", app.current_word()), text_style),
        Span::styled("│ ", dim_style),
        Span::styled(format!("steps {} ", app.view.animation_steps()), text_style),
        Span::styled(format!("{} ", app.view.interpolator()), text_style),
        Span::styled(format!("{} ", app.view.gravity()), text_style),
    ];
    if app.view.fade_in() {
        spans.push(Span::styled("fade ", key_style));
    }
    if app.autoplay {
        spans.push(Span::styled(
            format!("▶ {}ms ", app.autoplay_speed),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some((current, total)) = app.view.progress() {
        spans.push(Span::styled(format!("[{}/{}] ", current, total), dim_style));
    }
    spans.push(Span::styled("│ ? help", dim_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popover(frame: &mut Frame) {
    let area = frame.area();

    let help = [
        ("l / → / j / space", "Next word"),
        ("h / ← / k", "Previous word"),
        ("a", "Toggle autoplay"),
        ("[ / ]", "Autoplay slower/faster"),
        ("f", "Toggle fade-in"),
        ("i", "Cycle interpolator"),
        ("+ / -", "More/fewer steps"),
        ("g", "Cycle horizontal gravity"),
        ("w", "Toggle full width"),
        ("?", "Toggle help"),
        ("q / Esc", "Quit"),
    ];

    let popup_width = 44u16.min(area.width.saturating_sub(4));
    let popup_height = (help.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_area = centered_rect(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Cyan);
    let label_style = Style::default().fg(Color::Gray);
    let lines: Vec<Line> = help
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:<20}", key), key_style),
                Span::styled(*desc, label_style),
            ])
        })
        .collect();

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(popup, popup_area);
}
