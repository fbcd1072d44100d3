//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 事件轮询间隔（毫秒），同时决定加载动画帧率
pub const TICK_RATE_MS: u64 = 100;

/// 加载动画帧
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 搜索框占位符
pub const SEARCH_PLACEHOLDER: &str = "Search for any IP address or domain";

/// 信息面板中字段为空时的占位
pub const EMPTY_FIELD: &str = "-";

/// 地图视图配置
pub mod map {
    /// 缩放级别 0 显示整个世界，每级跨度减半
    pub const MIN_ZOOM: u8 = 0;
    pub const MAX_ZOOM: u8 = 8;
    pub const DEFAULT_ZOOM: u8 = 3;
    /// 标记文本
    pub const MARKER: &str = "◉";
    pub const MARKER_LABEL: &str = " IP Location";
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 地图海岸线
    pub const MAP: Color = Color::Gray;
}
