use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph,
        canvas::{Canvas, Map, MapResolution},
    },
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, map};
use crate::interfaces::tui::ui::widgets::Spinner;

fn map_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED))
        .title(title)
        .title_style(Style::default().fg(colors::PRIMARY))
}

/// 地图区域：加载中显示 spinner，有结果显示地图和标记，否则显示提示
pub fn draw_map_region(frame: &mut Frame, app: &App, area: Rect) {
    if app.view.is_loading() {
        let block = map_block("Map".to_string());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        Spinner::new(app.spinner_tick, "Loading map...").render(frame, inner);
        return;
    }

    let (Some(result), Some(viewport)) = (app.current_result(), app.viewport()) else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No map data",
            Style::default().fg(colors::MUTED),
        )))
        .alignment(Alignment::Center)
        .block(map_block("Map".to_string()));
        frame.render_widget(empty, area);
        return;
    };

    let (lat, lng) = result.coordinates();
    let title = format!("Map ({:.4}, {:.4}) zoom {}", lat, lng, app.map_zoom);

    let canvas = Canvas::default()
        .block(map_block(title))
        .marker(Marker::Braille)
        .x_bounds(viewport.x_bounds)
        .y_bounds(viewport.y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: colors::MAP,
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.print(
                lng,
                lat,
                Line::from(vec![
                    Span::styled(map::MARKER, Style::default().fg(Color::Red).bold()),
                    Span::styled(map::MARKER_LABEL, Style::default().fg(Color::White)),
                ]),
            );
        });

    frame.render_widget(canvas, area);
}
