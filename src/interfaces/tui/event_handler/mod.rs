//! Event handling for TUI
//!
//! 单屏界面：可打印字符进入搜索框，控制键操作查询、地图和剪贴板

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::input_handler::{
    handle_backspace, handle_clear_input, handle_text_input,
};

/// Handle a key press, returns true when the app should exit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('u') if ctrl => handle_clear_input(app),
        KeyCode::Char('y') if ctrl => app.copy_ip_to_clipboard(),
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::PageUp => app.zoom_in(),
        KeyCode::PageDown => app.zoom_out(),
        KeyCode::Char(c) if !ctrl => handle_text_input(app, c),
        _ => {}
    }

    false
}
