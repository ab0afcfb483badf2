//! Tracing/logging setup shared by the binaries.

/// Initialize human-readable logging on stderr.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::Format::Pretty);
}

/// Initialize JSON logging on stderr.
pub fn init_json() {
    tracing::init(tracing::Format::Json);
}

/// Tracing configuration (filters, formats).
pub mod tracing;
