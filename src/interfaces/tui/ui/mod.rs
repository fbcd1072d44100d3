// UI submodules
mod common;
mod info_panel;
mod map_view;
pub mod widgets;

pub use common::{draw_error_banner, draw_footer, draw_status_bar, draw_title_bar};
pub use info_panel::draw_info_panel;
pub use map_view::draw_map_region;

use super::app::{App, ViewState};
use super::constants::SEARCH_PLACEHOLDER;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use widgets::InputField;

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Search bar
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    InputField::new("Search", &app.search_input)
        .active(true)
        .placeholder(SEARCH_PLACEHOLDER)
        .char_count(true)
        .render(frame, main_chunks[1]);

    draw_content(frame, app, main_chunks[2]);

    draw_status_bar(frame, app, main_chunks[3]);
    draw_footer(frame, main_chunks[4]);
}

/// 内容区域只显示一种：错误提示、加载动画，或信息面板加地图
fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    match &app.view {
        ViewState::Error(error) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(0)])
                .split(area);
            draw_error_banner(frame, *error, chunks[0]);
        }
        ViewState::Loading => draw_map_region(frame, app, area),
        ViewState::Success(result) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4), // Info panel
                    Constraint::Min(6),    // Map
                ])
                .split(area);
            draw_info_panel(frame, Some(result), chunks[0]);
            draw_map_region(frame, app, chunks[1]);
        }
        ViewState::Idle => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(6)])
                .split(area);
            draw_info_panel(frame, None, chunks[0]);
            draw_map_region(frame, app, chunks[1]);
        }
    }
}
