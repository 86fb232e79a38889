use crate::config::AppConfig;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

pub fn tracing_log_path(config: &AppConfig) -> PathBuf {
    if let Some(path) = &config.log_file {
        return path.clone();
    }
    env::var("HOSTMENU_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("hostmenu_trace.jsonl"))
}

/// Route tracing events to a JSON-lines file when logging is enabled.
///
/// Never writes to stdout or stderr: stdout is the host pipe and stderr may
/// be captured by the host, so the trace log is the only diagnostic surface.
pub fn init_tracing(config: &AppConfig) {
    if !config.file_logging_enabled() {
        return;
    }

    let _ = TRACING_INIT.get_or_init(|| {
        let path = tracing_log_path(config);
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
