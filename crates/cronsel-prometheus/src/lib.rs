//! Prometheus metrics backend for cronsel field sessions.
//!
//! [`PrometheusMetrics`] implements [`cronsel_core::MetricsBackend`]; hand it to
//! [`cronsel_core::FieldHandle::spawn_with_metrics`] and expose [`PrometheusMetrics::gather`]
//! through whatever HTTP stack the host already runs.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use cronsel_core::{MetricsBackend, MetricsHandle};
//! use cronsel_prometheus::{Encoder, PrometheusMetrics, TextEncoder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let handle: MetricsHandle = Arc::new(metrics.clone());
//! handle.record_activation("minutes");
//!
//! let mut buffer = Vec::new();
//! TextEncoder::new().encode(&metrics.gather(), &mut buffer)?;
//! assert!(String::from_utf8(buffer)?.contains("cronsel_activations_total"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `cronsel_activations_total{field}` - Counter
//! - `cronsel_interactions_total{field, kind}` - Counter
//! - `cronsel_rejected_total{field, reason}` - Counter
//! - `cronsel_selection_size{field}` - Histogram
mod backend;

pub use backend::PrometheusMetrics;
pub use prometheus::{Encoder, Registry, TextEncoder};
