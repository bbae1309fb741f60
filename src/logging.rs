use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive applied when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::new(format!("bookshelf={level}"))
}

/// Initialize tracing.
///
/// Events go to stderr in a compact human format. When `log_file` is set,
/// the same events are also written as JSON lines to a daily-rolling file
/// named after the given path. `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let _ = std::fs::create_dir_all(directory);
            let prefix = path.file_name().unwrap_or_else(|| "bookshelf.log".as_ref());

            let file_layer = fmt::layer()
                .with_writer(tracing_appender::rolling::daily(directory, prefix))
                .with_ansi(false)
                .json();

            registry.with(file_layer).init();
        }
        None => registry.init(),
    }
}
