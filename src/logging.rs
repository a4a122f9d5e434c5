use tracing_subscriber::EnvFilter;

/// 初始化日志，输出到 stderr
///
/// `RUST_LOG` 优先，否则默认 `warn`，`verbose` 时为 `debug`。
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化时忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
