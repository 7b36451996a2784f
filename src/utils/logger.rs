use crate::core::demo::OutputFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "bounded_access=debug,info"
    } else {
        "bounded_access=warn"
    }
}

/// stdout 保留給示範輸出，日誌一律寫到 stderr；JSON 輸出時日誌也用 JSON
pub fn init_cli_logger(verbose: bool, format: OutputFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        OutputFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
        OutputFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
    }
}
