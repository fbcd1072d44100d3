//! Input handling utilities
//!
//! 搜索框编辑：任何编辑都会清除错误提示；输入框从非空变为空时重新查询自身 IP

use super::app::{App, ViewState};
use crate::services::LookupQuery;

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    app.search_input.push(c);
    on_input_changed(app, false);
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    let was_empty = app.search_input.is_empty();
    app.search_input.pop();
    on_input_changed(app, was_empty);
}

/// Clear the whole search field (Ctrl+U)
pub fn handle_clear_input(app: &mut App) {
    let was_empty = app.search_input.is_empty();
    app.search_input.clear();
    on_input_changed(app, was_empty);
}

fn on_input_changed(app: &mut App, was_empty: bool) {
    if matches!(app.view, ViewState::Error(_)) {
        app.view = ViewState::Idle;
    }
    app.clear_messages();

    if !was_empty && app.search_input.is_empty() {
        app.dispatch(LookupQuery::Caller);
    }
}
