use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize tracing: console always, plus a daily-rolling file under
/// `home_dir` when configured. The returned guard must stay alive for
/// the lifetime of the process or buffered file logs are dropped.
pub fn init_logging(config: &LoggingConfig, home_dir: &Path) -> Option<WorkerGuard> {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let console = fmt::layer().with_target(true);
    let registry = tracing_subscriber::registry().with(filter).with(console);

    match &config.file {
        Some(file) => {
            let path = home_dir.join(file);
            let dir = path.parent().unwrap_or(home_dir).to_path_buf();
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "lorekeep.log".to_string());
            if let Err(e) = std::fs::create_dir_all(&dir) {
                eprintln!("Failed to create log dir {}: {e}", dir.display());
                registry.init();
                return None;
            }

            let appender = tracing_appender::rolling::daily(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}
