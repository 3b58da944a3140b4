use chrono::Local;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志文件路径的环境变量
pub const LOG_ENV_VAR: &str = "LIFEPLOT_LOG";

/// 初始化日志
///
/// 终端被界面占用，日志只写文件，默认关闭。
/// 设置 `LIFEPLOT_LOG` 为文件路径后启用，实际文件名追加时间戳和 pid，
/// 多个实例同时运行时互不覆盖。级别由 `RUST_LOG` 控制，默认 info。
pub fn init_tracing() {
    let Ok(log_path) = std::env::var(LOG_ENV_VAR) else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: failed to create log file: {unique_path}");
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str) -> String {
    format!(
        "{}.{}.{}",
        base,
        Local::now().format("%Y%m%d-%H%M%S"),
        std::process::id()
    )
}
