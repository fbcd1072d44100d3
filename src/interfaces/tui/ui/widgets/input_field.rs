//! 通用输入框组件
//!
//! 支持：
//! - 激活状态高亮
//! - 占位符
//! - 字符计数

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// 使用 Builder 模式配置各种选项
///
/// # 示例
///
/// ```rust,ignore
/// InputField::new("Search", &app.search_input)
///     .active(true)
///     .placeholder("IP address or domain")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    /// 字段标题
    title: &'a str,
    /// 输入值
    value: &'a str,
    /// 是否处于激活状态
    is_active: bool,
    /// 占位符文本
    placeholder: Option<&'a str>,
    /// 是否显示字符计数
    show_char_count: bool,
}

impl<'a> InputField<'a> {
    /// 创建新的输入框
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            show_char_count: true,
        }
    }

    /// 设置激活状态
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置占位符
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 设置是否显示字符计数
    pub fn char_count(mut self, show: bool) -> Self {
        self.show_char_count = show;
        self
    }

    /// 获取显示的标题
    fn display_title(&self) -> String {
        if self.show_char_count && !self.value.is_empty() {
            format!("{} ({} chars)", self.title, self.value.chars().count())
        } else {
            self.title.to_string()
        }
    }

    /// 获取边框样式
    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default().fg(colors::PRIMARY).bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 空值时显示占位符
    fn display_value(&self) -> Span<'a> {
        match (self.value.is_empty(), self.placeholder) {
            (true, Some(placeholder)) => Span::styled(placeholder, Style::default().fg(colors::MUTED)),
            _ => Span::raw(self.value),
        }
    }

    /// 渲染输入框，激活时把光标放在文本末尾
    ///
    /// `area` 高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.display_value()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);

        if self.is_active {
            let offset = u16::try_from(self.value.chars().count()).unwrap_or(u16::MAX);
            let max_x = area.right().saturating_sub(2);
            let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}
