//! Timing-based classification of option activations.
use std::time::Duration;

use tokio::time::Instant;

/// Outcome of a classified activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Toggle the activated value.
    Single,
    /// Treat the activated value as a step size.
    Double,
}

/// Timestamps of the activations seen during one pending window.
///
/// Append-only until classified, then cleared.
#[derive(Debug, Clone, Default)]
pub struct InteractionRecord {
    stamps: Vec<Instant>,
}

impl InteractionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, at: Instant) {
        self.stamps.push(at);
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    pub fn clear(&mut self) {
        self.stamps.clear();
    }

    /// Double when the last two activations are strictly less than `window`
    /// apart, single otherwise.
    pub fn classify(&self, window: Duration) -> Activation {
        match self.stamps.as_slice() {
            [.., prev, last] if last.saturating_duration_since(*prev) < window => Activation::Double,
            _ => Activation::Single,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    fn record(offsets_ms: &[u64]) -> InteractionRecord {
        let base = Instant::now();
        let mut r = InteractionRecord::new();
        for ms in offsets_ms {
            r.push(base + Duration::from_millis(*ms));
        }
        r
    }

    #[test]
    fn lone_activation_is_single() {
        assert_eq!(record(&[0]).classify(WINDOW), Activation::Single);
        assert_eq!(InteractionRecord::new().classify(WINDOW), Activation::Single);
    }

    #[test]
    fn close_pair_is_double() {
        assert_eq!(record(&[0, 120]).classify(WINDOW), Activation::Double);
        assert_eq!(record(&[0, 299]).classify(WINDOW), Activation::Double);
    }

    #[test]
    fn gap_at_window_is_single() {
        assert_eq!(record(&[0, 300]).classify(WINDOW), Activation::Single);
        assert_eq!(record(&[0, 450]).classify(WINDOW), Activation::Single);
    }

    #[test]
    fn only_last_two_stamps_count() {
        assert_eq!(record(&[0, 400, 500]).classify(WINDOW), Activation::Double);
        assert_eq!(record(&[0, 10, 500]).classify(WINDOW), Activation::Single);
    }

    #[test]
    fn clear_empties_record() {
        let mut r = record(&[0, 10]);
        r.clear();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }
}
