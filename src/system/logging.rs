//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use std::fs::OpenOptions;
use std::io;

use crate::config::LoggingConfig;
use crate::errors::{Result, TrackerError};

use super::panic_handler::RunMode;

/// 根据配置和运行模式选择日志输出
///
/// - 配置了文件：追加写入该文件
/// - TUI 模式未配置文件：丢弃（终端被界面占用）
/// - CLI 模式未配置文件：stderr，stdout 留给查询结果
fn make_writer(config: &LoggingConfig, mode: RunMode) -> Result<Box<dyn io::Write + Send + Sync>> {
    match config.file.as_deref().filter(|f| !f.is_empty()) {
        Some(log_file) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(|e| {
                    TrackerError::file_operation(format!(
                        "Failed to open log file {}: {}",
                        log_file, e
                    ))
                })?;
            Ok(Box::new(file))
        }
        None if mode == RunMode::Tui => Ok(Box::new(io::sink())),
        None => Ok(Box::new(io::stderr())),
    }
}

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(
    config: &LoggingConfig,
    mode: RunMode,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let writer = make_writer(config, mode)?;
    let to_console = mode == RunMode::Cli && config.file.as_ref().is_none_or(|f| f.is_empty());

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| TrackerError::config(format!("Invalid log level {}: {}", config.level, e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_console);

    let res = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    res.map_err(|e| TrackerError::config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_appends_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iptracker.log");
        let config = LoggingConfig {
            file: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };

        let mut writer = make_writer(&config, RunMode::Tui).unwrap();
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_writer_fails_for_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(
                dir.path()
                    .join("missing")
                    .join("x.log")
                    .to_string_lossy()
                    .into_owned(),
            ),
            ..Default::default()
        };

        let err = make_writer(&config, RunMode::Cli).err().unwrap();
        assert_eq!(err.code(), "E003");
    }
}
