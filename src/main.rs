//! Entry point of the `taurel-site` command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use taurel_site::cli::{
    self,
    Cli,
};
use taurel_site::config::ConfigManager;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter from the `RUST_LOG` directives, `info` when they are absent or
/// unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Log to `log_file` when given, stderr otherwise. The returned guard flushes
/// the file writer when dropped.
fn init_tracing(log_file: Option<PathBuf>) -> Option<WorkerGuard> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(directives.as_deref());

    let Some(path) = log_file else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        return None;
    };

    let directory = path.parent().map_or_else(|| PathBuf::from("."), PathBuf::from);
    let file_name = path.file_name().map_or_else(|| "taurel-site.log".into(), ToOwned::to_owned);
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
    Some(guard)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let mut manager = ConfigManager::new();
    let loaded = manager.load_settings(args.root.clone());
    let log_file = manager.get_settings().log_file.as_deref().map(|path| manager.resolve_path(path));
    let _guard = init_tracing(log_file);

    if let Err(e) = loaded {
        tracing::error!("{}", e);
        return ExitCode::FAILURE;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli::run(&args, &manager, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
