//! Logging configuration for the command line front end.
//!
//! Logs go to stderr so analysis output on stdout can be piped. Set
//! `DEBUG_LOGGING=1` to enable debug output for fleetlog crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_DIRECTIVE: &str = "warn";
const DEBUG_DIRECTIVE: &str = "warn,fleetlog_core=debug,fleetlog_cli=debug";

/// Initialize stderr logging. `RUST_LOG` wins over `DEBUG_LOGGING` when set.
pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if debug_logging {
            DEBUG_DIRECTIVE
        } else {
            DEFAULT_DIRECTIVE
        })
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "fleetlog logging initialized");
}
