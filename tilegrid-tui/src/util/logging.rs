//! 文件日志
//!
//! 终端被界面占用，所有日志写入 `tilegrid.log`。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// 过滤级别环境变量（EnvFilter 语法）
pub const LOG_ENV: &str = "TILEGRID_LOG";
/// 日志文件名
pub const LOG_FILE: &str = "tilegrid.log";

const DEFAULT_DIRECTIVE: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// 默认日志目录：`数据目录/tilegrid`
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tilegrid")
}

/// 由 `TILEGRID_LOG` 构造过滤器，未设置或无法解析时回退到 `info`
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// 安装全局订阅器
///
/// 返回的 guard 在 drop 时刷新缓冲区，调用方需持有到进程结束。
pub fn init(dir: &Path) -> Result<WorkerGuard, LoggingError> {
    let path = dir.join(LOG_FILE);
    fs::create_dir_all(dir).map_err(|source| LoggingError::Io {
        path: path.clone(),
        source,
    })?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::Io { path, source })?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let directives = std::env::var(LOG_ENV).ok();

    // try_init 同时安装 log -> tracing 桥接
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer)
        .finish()
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    Ok(guard)
}
