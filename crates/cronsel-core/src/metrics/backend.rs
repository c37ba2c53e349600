use std::sync::Arc;

use crate::classify::Activation;

/// Kind of interaction that reached the transition layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Toggle of one value.
    Single,
    /// Every-N selection.
    Double,
    /// Clear signal from the widget.
    Clear,
}

impl Interaction {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            Interaction::Single => "single",
            Interaction::Double => "double",
            Interaction::Clear => "clear",
        }
    }
}

impl From<Activation> for Interaction {
    fn from(a: Activation) -> Self {
        match a {
            Activation::Single => Interaction::Single,
            Activation::Double => Interaction::Double,
        }
    }
}

/// Metrics collection interface.
///
/// `field` is always the canonical field name (`"minutes"`, `"week-days"`, ...),
/// so every label stays low-cardinality.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a raw activation accepted into the debounce window.
    fn record_activation(&self, field: &str);
    /// Record a classified interaction.
    fn record_interaction(&self, field: &str, kind: Interaction);
    /// Record an emitted selection and its size.
    fn record_selection(&self, field: &str, size: usize);
    /// Record an activation rejected as a contract violation.
    ///
    /// `reason` is one of `"out_of_domain"`, `"zero_step"`.
    fn record_rejected(&self, field: &str, reason: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(Interaction::Single.as_label(), "single");
        assert_eq!(Interaction::Double.as_label(), "double");
        assert_eq!(Interaction::Clear.as_label(), "clear");
    }

    #[test]
    fn activation_maps_onto_interaction() {
        assert_eq!(Interaction::from(Activation::Double), Interaction::Double);
        assert_eq!(Interaction::from(Activation::Single), Interaction::Single);
    }
}
