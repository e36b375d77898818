//! 文件日志

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::backend::AppConfig;

const LOG_FILE_PREFIX: &str = "domain-console.log";

/// 安装全局日志订阅器
///
/// `RUST_LOG` 优先于配置中的 `log_level`。返回的 guard 必须存活到程序退出，
/// 否则缓冲中的日志会丢失。
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let dir = config.log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("Invalid log level {:?}", config.log_level))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
