use std::io;
use std::path::Path;

/// Start JSON-lines tracing into `log_dir/romajitools-trace.jsonl`.
///
/// Creates `log_dir` if needed. Only the first successful call installs a
/// subscriber; later calls just ensure the directory exists.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> io::Result<()> {
    use std::sync::Once;

    static INIT: Once = Once::new();

    std::fs::create_dir_all(log_dir)?;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "romajitools-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // keep the writer alive for the process lifetime

        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("romajitools=debug,romaji_core=debug")
        });
        // Another subscriber may already be global (e.g. in a host test binary).
        let _ = tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
    });
    Ok(())
}

/// Without the `trace` feature, events are compiled out and nothing is written.
#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> io::Result<()> {
    Ok(())
}
