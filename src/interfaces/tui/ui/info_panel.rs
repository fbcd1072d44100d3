use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::{EMPTY_FIELD, colors};
use crate::services::LookupResult;

/// 信息面板的四个字段，没有结果时全部为占位符
pub fn info_fields(result: Option<&LookupResult>) -> [(&'static str, String); 4] {
    let or_empty = |value: Option<String>| {
        value
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| EMPTY_FIELD.to_string())
    };

    [
        ("IP ADDRESS", or_empty(result.map(|r| r.ip.clone()))),
        ("LOCATION", or_empty(result.map(|r| r.location_text()))),
        ("TIMEZONE", or_empty(result.and_then(|r| r.timezone_text()))),
        ("ISP", or_empty(result.map(|r| r.isp.clone()))),
    ]
}

pub fn draw_info_panel(frame: &mut Frame, result: Option<&LookupResult>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(inner);

    for ((label, value), column) in info_fields(result).into_iter().zip(columns.iter()) {
        let text = vec![
            Line::from(Span::styled(label, Style::default().fg(colors::MUTED))),
            Line::from(Span::styled(value, Style::default().fg(Color::White).bold())),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), *column);
    }
}
