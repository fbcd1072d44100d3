use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::errors::LookupError;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version and request state
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("IP Address Tracker", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Provider: {} ", app.provider.name()),
            Style::default().fg(Color::Yellow),
        ),
    ];

    if let Some(query) = &app.last_query {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Query: {} ", query),
            Style::default().fg(Color::White),
        ));
    }

    if app.in_flight > 0 {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Pending: {} ", app.in_flight),
            Style::default().fg(Color::Magenta),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw the lookup error banner
pub fn draw_error_banner(frame: &mut Frame, error: LookupError, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            error.message(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            "Edit the query and press Enter to try again",
            Style::default().fg(Color::Gray),
        )),
    ];

    let banner = Paragraph::new(text)
        .style(Style::default().bg(colors::ERROR))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::ERROR))
                .title(format!("[{}] {}", error.code(), error.error_type())),
        )
        .alignment(Alignment::Center);

    frame.render_widget(banner, area);
}

/// Draw status bar (clipboard and other non-lookup notices)
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(colors::ERROR).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
        )
    } else if app.view.is_loading() {
        ("Looking up...".to_string(), Style::default().fg(colors::WARNING))
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let shortcuts = [
        ("Enter", "Search", Color::Green),
        ("Ctrl+U", "Clear", Color::Yellow),
        ("PgUp/PgDn", "Zoom", Color::Cyan),
        ("Ctrl+Y", "Copy IP", Color::Blue),
        ("Esc", "Quit", Color::Magenta),
    ];

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
