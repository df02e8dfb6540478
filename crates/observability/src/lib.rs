//! Tracing and logging (shared setup).

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::LogFormat;

/// Initialize process-wide observability (tracing/logging).
///
/// `default_filter` applies when `RUST_LOG` is unset. This is safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat, default_filter: &str) {
    tracing::init(format, default_filter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_level_init_can_be_repeated() {
        init(LogFormat::Json, "info");
        init(LogFormat::Text, "trace");
    }
}
