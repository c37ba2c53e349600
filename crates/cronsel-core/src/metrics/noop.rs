use crate::metrics::backend::{Interaction, MetricsBackend};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_activation(&self, _: &str) {}

    #[inline(always)]
    fn record_interaction(&self, _: &str, _: Interaction) {}

    #[inline(always)]
    fn record_selection(&self, _: &str, _: usize) {}

    #[inline(always)]
    fn record_rejected(&self, _: &str, _: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_metrics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpMetrics>(), 0);
    }
}
