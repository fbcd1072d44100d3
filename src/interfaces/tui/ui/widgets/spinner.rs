//! 不定进度的加载指示器

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::interfaces::tui::constants::{SPINNER_FRAMES, colors};

pub struct Spinner<'a> {
    tick: usize,
    label: &'a str,
}

impl<'a> Spinner<'a> {
    pub fn new(tick: usize, label: &'a str) -> Self {
        Self { tick, label }
    }

    /// 当前帧
    pub fn frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }

    /// 在区域中垂直居中渲染
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let line = Line::from(vec![
            Span::styled(self.frame(), Style::default().fg(colors::PRIMARY).bold()),
            Span::raw(" "),
            Span::styled(self.label, Style::default().fg(colors::MUTED)),
        ]);

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
    }
}
