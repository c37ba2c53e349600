//! Metrics collection abstraction for field controllers.
//!
//! Backends (prometheus, statsd, ...) implement [`MetricsBackend`] and are injected into
//! [`crate::SelectionController`] or [`crate::FieldHandle`].
mod backend;
pub use backend::{Interaction, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
