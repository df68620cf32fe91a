// src/logging/logger.rs

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// 初始化全局 tracing 日志
///
/// JSON events go to an hourly rolling `ad_selector.json` under `log_dir`. The level is taken
/// from `RUST_LOG`. Keep the returned guard alive until exit or buffered events are lost.
pub fn init_tracing(log_dir: &str) -> Result<WorkerGuard, TryInitError> {
    let log_file = rolling::hourly(log_dir, "ad_selector.json");
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);
    Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json().with_writer(non_blocking))
        .try_init()?;
    Ok(guard)
}
