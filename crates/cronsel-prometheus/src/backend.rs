use std::sync::Arc;

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, proto::MetricFamily};

use cronsel_core::{Interaction, MetricsBackend};

const NAMESPACE: &str = "cronsel";

/// Prometheus metrics backend for cronsel.
///
/// ## Label cardinality
/// All labels are bounded:
/// - `field`: "minutes", "hours", "month-days", "months", "week-days"
/// - `kind`: "single", "double", "clear"
/// - `reason`: "out_of_domain", "zero_step"
#[derive(Clone)]
pub struct PrometheusMetrics {
    activations: CounterVec,
    interactions: CounterVec,
    rejected: CounterVec,
    selection_size: HistogramVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a metrics backend registered into `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let activations = CounterVec::new(
            Opts::new("activations_total", "Raw option activations accepted").namespace(NAMESPACE),
            &["field"],
        )?;
        registry.register(Box::new(activations.clone()))?;

        let interactions = CounterVec::new(
            Opts::new("interactions_total", "Classified interactions applied").namespace(NAMESPACE),
            &["field", "kind"],
        )?;
        registry.register(Box::new(interactions.clone()))?;

        let rejected = CounterVec::new(
            Opts::new("rejected_total", "Activations rejected as invalid").namespace(NAMESPACE),
            &["field", "reason"],
        )?;
        registry.register(Box::new(rejected.clone()))?;

        let selection_size = HistogramVec::new(
            HistogramOpts::new("selection_size", "Number of values in emitted selections")
                .namespace(NAMESPACE)
                .buckets(vec![0.0, 1.0, 2.0, 4.0, 7.0, 12.0, 24.0, 31.0, 60.0]),
            &["field"],
        )?;
        registry.register(Box::new(selection_size.clone()))?;

        Ok(Self {
            activations,
            interactions,
            rejected,
            selection_size,
            registry,
        })
    }

    /// Create a metrics backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Underlying registry, for registering custom metrics alongside.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_activation(&self, field: &str) {
        self.activations.with_label_values(&[field]).inc();
    }

    fn record_interaction(&self, field: &str, kind: Interaction) {
        self.interactions
            .with_label_values(&[field, kind.as_label()])
            .inc();
    }

    fn record_selection(&self, field: &str, size: usize) {
        self.selection_size
            .with_label_values(&[field])
            .observe(size as f64);
    }

    fn record_rejected(&self, field: &str, reason: &str) {
        self.rejected.with_label_values(&[field, reason]).inc();
    }
}
