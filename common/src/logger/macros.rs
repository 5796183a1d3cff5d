use tracing::{Level, Span, field};

use super::TraceId;

/// Root span for one game session. `level` is recorded once the level is loaded.
pub fn session_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::span!(
        Level::INFO,
        "session",
        name = %name,
        trace_id = %trace_id.as_str(),
        level = field::Empty
    )
}

/// Create a child span (inherits trace_id automatically)
pub fn child_span(name: &'static str) -> Span {
    tracing::span!(Level::INFO, "child", name = %name)
}
