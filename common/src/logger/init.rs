use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Installs the global subscriber once; later calls are ignored.
///
/// `json` switches the formatter to one JSON object per line, which is what
/// production log shipping expects. `RUST_LOG` overrides the default `info` filter.
pub fn init_logger(service_name: &'static str, json: bool) {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let base = fmt::layer()
            .with_target(true) // <-- shows crate/module path
            .with_line_number(true)
            .with_span_events(fmt::format::FmtSpan::CLOSE)
            .with_writer(std::io::stderr);

        let installed = if json {
            tracing_subscriber::registry()
                .with(filter)
                .with(base.json())
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(base.compact())
                .try_init()
        };

        match installed {
            Ok(()) => tracing::info!(service = service_name, json, "logger initialized"),
            Err(e) => eprintln!("logger already installed elsewhere: {e}"),
        }
    });
}
