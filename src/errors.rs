use std::fmt;

/// 查询失败的原因
///
/// 四种错误都直接展示给用户，不自动重试
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// 输入为空或只有空白
    EmptyInput,
    /// 既不是 IP 也不是域名
    InvalidFormat,
    /// API 返回了错误字段，或没有 location
    NoResults,
    /// 连接、超时、DNS 或响应体无法解析
    NetworkFailure,
}

impl LookupError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::EmptyInput => "L001",
            LookupError::InvalidFormat => "L002",
            LookupError::NoResults => "L003",
            LookupError::NetworkFailure => "L004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LookupError::EmptyInput => "Empty Input",
            LookupError::InvalidFormat => "Invalid Format",
            LookupError::NoResults => "No Results",
            LookupError::NetworkFailure => "Network Failure",
        }
    }

    /// 面向用户的提示文本
    pub fn message(&self) -> &'static str {
        match self {
            LookupError::EmptyInput => "Please enter an IP address or domain.",
            LookupError::InvalidFormat => "Invalid IP address or domain format.",
            LookupError::NoResults => "No results found for this IP address or domain.",
            LookupError::NetworkFailure => "Network error. Please try again.",
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LookupError {}

#[derive(Debug, Clone)]
pub enum TrackerError {
    Config(String),
    Terminal(String),
    FileOperation(String),
    Serialization(String),
}

impl TrackerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            TrackerError::Config(_) => "E001",
            TrackerError::Terminal(_) => "E002",
            TrackerError::FileOperation(_) => "E003",
            TrackerError::Serialization(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            TrackerError::Config(_) => "Configuration Error",
            TrackerError::Terminal(_) => "Terminal Error",
            TrackerError::FileOperation(_) => "File Operation Error",
            TrackerError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            TrackerError::Config(msg) => msg,
            TrackerError::Terminal(msg) => msg,
            TrackerError::FileOperation(msg) => msg,
            TrackerError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏和日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TrackerError {}

// 便捷的构造函数
impl TrackerError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        TrackerError::Config(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        TrackerError::Terminal(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        TrackerError::FileOperation(msg.into())
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for TrackerError {
    fn from(err: toml::ser::Error) -> Self {
        TrackerError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for TrackerError {
    fn from(err: config::ConfigError) -> Self {
        TrackerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
