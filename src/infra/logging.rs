//! # Logging / 日志
//!
//! Installs the `tracing` subscriber used by the command-line host. Logs go to
//! stderr so they never mix with verse output on stdout.
//!
//! 安装命令行宿主使用的 `tracing` 订阅器。日志写入 stderr，不会与 stdout 上的经文输出混在一起。

use tracing_subscriber::EnvFilter;

/// Initializes logging. `RUST_LOG` wins when set; otherwise only warnings are
/// shown, or debug output for this crate when `verbose` is set.
///
/// Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,verse_agent=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
