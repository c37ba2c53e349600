//! Per-field selection state machine.
//!
//! The controller is time-agnostic: callers pass the current instant into
//! [`SelectionController::activate`] and [`SelectionController::poll`], and
//! arm their own timer from [`SelectionController::deadline`]. The
//! [`crate::session`] module drives it from a tokio task.
mod sink;
pub use sink::{ChannelSink, SelectionSink};

use std::{num::NonZeroU32, time::Duration};

use tokio::time::Instant;
use tracing::{debug, trace, warn};

use cronsel_model::{Domain, FieldConfig, FieldType, FieldValue, Flag, Selection};

use crate::{
    classify::{Activation, InteractionRecord},
    error::CoreError,
    metrics::{Interaction, MetricsHandle, noop_metrics},
    transition,
};

/// Activation waiting for its debounce window to close.
#[derive(Debug)]
struct Pending {
    /// Most recently activated value.
    value: FieldValue,
    record: InteractionRecord,
    deadline: Instant,
}

/// Interprets raw option activations into selection changes.
///
/// States: idle (no pending record) and pending (record armed with a
/// deadline). The selection is the caller's controlled value: the controller
/// never changes it, it only emits replacements through its [`SelectionSink`].
pub struct SelectionController<S> {
    field: FieldType,
    domain: Domain,
    option_count: usize,
    window: Duration,
    read_only: Flag,
    selection: Selection,
    pending: Option<Pending>,
    sink: S,
    metrics: MetricsHandle,
}

impl<S: SelectionSink> SelectionController<S> {
    /// Build a controller for a validated configuration.
    pub fn new(cfg: &FieldConfig, sink: S) -> Result<Self, CoreError> {
        cfg.validate()?;
        let domain = cfg.domain();
        Ok(Self {
            field: cfg.field,
            domain,
            option_count: domain.size() as usize,
            window: cfg.debounce(),
            read_only: cfg.read_only,
            selection: Selection::new(),
            pending: None,
            sink,
            metrics: noop_metrics(),
        })
    }

    /// Replace the metrics backend.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn field(&self) -> FieldType {
        self.field
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Current controlled value.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only.is_enabled()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending window closes, if one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Accept a new controlled value from the owner.
    ///
    /// A selection with values outside the domain is rejected and the
    /// previous one kept; returns `false` in that case.
    pub fn set_selection(&mut self, selection: Selection) -> bool {
        if let Err(e) = self.domain.validate(&selection) {
            warn!(field = %self.field, selection = %selection, error = %e, "owner selection rejected");
            self.metrics.record_rejected(self.field.as_str(), "out_of_domain");
            return false;
        }
        trace!(field = %self.field, selection = %selection, "selection updated by owner");
        self.selection = selection;
        true
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only.into();
    }

    /// Register an activation of `value` at `now`.
    ///
    /// Opens a pending window of the debounce length, or appends to the one
    /// already open. A window that has already closed at `now` is classified
    /// first.
    pub fn activate(&mut self, value: FieldValue, now: Instant) {
        if self.read_only.is_enabled() {
            trace!(field = %self.field, value, "activation ignored: read-only");
            return;
        }
        if !self.domain.contains(value) {
            warn!(field = %self.field, value, "activation outside of field domain rejected");
            self.metrics.record_rejected(self.field.as_str(), "out_of_domain");
            return;
        }
        self.metrics.record_activation(self.field.as_str());
        self.poll(now);

        if let Some(pending) = self.pending.as_mut() {
            pending.record.push(now);
            pending.value = value;
            trace!(field = %self.field, value, stamps = pending.record.len(), "activation appended");
            return;
        }

        let mut record = InteractionRecord::new();
        record.push(now);
        self.pending = Some(Pending {
            value,
            record,
            deadline: now + self.window,
        });
        trace!(field = %self.field, value, "debounce window armed");
    }

    /// Deactivation events follow the same classification path as activations.
    pub fn deactivate(&mut self, value: FieldValue, now: Instant) {
        self.activate(value, now);
    }

    /// Classify the pending window if its deadline has passed at `now`.
    ///
    /// Returns the classification, or `None` when nothing was due. At most
    /// one selection is emitted per call.
    pub fn poll(&mut self, now: Instant) -> Option<Activation> {
        if !self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            return None;
        }
        let Pending { value, record, .. } = self.pending.take()?;

        if self.read_only.is_enabled() {
            trace!(field = %self.field, value, "pending activation dropped: read-only");
            return None;
        }

        let kind = record.classify(self.window);
        debug!(field = %self.field, value, kind = ?kind, "activation classified");
        self.metrics.record_interaction(self.field.as_str(), kind.into());

        match kind {
            Activation::Single => {
                let next = transition::toggle(&self.selection, value);
                self.emit(next);
            }
            Activation::Double => match NonZeroU32::new(value) {
                Some(step) => {
                    let next =
                        transition::apply_step(&self.selection, &self.domain, self.option_count, step);
                    self.emit(next);
                }
                None => {
                    warn!(field = %self.field, "double activation of zero is not a valid step");
                    self.metrics.record_rejected(self.field.as_str(), "zero_step");
                }
            },
        }
        Some(kind)
    }

    /// Clear signal from the widget: emit the empty selection right away.
    ///
    /// Returns `false` when ignored because the field is read-only.
    pub fn clear(&mut self) -> bool {
        if self.read_only.is_enabled() {
            trace!(field = %self.field, "clear ignored: read-only");
            return false;
        }
        self.metrics.record_interaction(self.field.as_str(), Interaction::Clear);
        self.emit(Selection::new());
        true
    }

    /// Drop the pending window without classifying it.
    ///
    /// Returns `true` if a window was armed.
    pub fn cancel_pending(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            trace!(field = %self.field, "pending activation cancelled");
        }
        cancelled
    }

    fn emit(&mut self, next: Selection) {
        debug!(field = %self.field, selection = %next, "selection changed");
        self.metrics.record_selection(self.field.as_str(), next.len());
        self.sink.selection_changed(next);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, sync::Mutex};

    use super::*;
    use crate::metrics::MetricsBackend;

    const D: Duration = Duration::from_millis(300);

    type Emitted = Rc<RefCell<Vec<Selection>>>;

    fn controller(cfg: FieldConfig) -> (SelectionController<impl SelectionSink>, Emitted) {
        let emitted: Emitted = Rc::default();
        let out = Rc::clone(&emitted);
        let ctl = SelectionController::new(&cfg, move |s: Selection| out.borrow_mut().push(s)).unwrap();
        (ctl, emitted)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn single_activation_emits_after_window() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Minutes));
        let t0 = Instant::now();

        ctl.activate(5, t0);
        assert!(ctl.is_pending());
        assert_eq!(ctl.deadline(), Some(t0 + D));

        // nothing emitted while pending
        assert_eq!(ctl.poll(t0 + ms(299)), None);
        assert!(emitted.borrow().is_empty());

        assert_eq!(ctl.poll(t0 + D), Some(Activation::Single));
        assert_eq!(emitted.borrow().as_slice(), &[Selection::from([5])]);
        assert!(!ctl.is_pending());
    }

    #[test]
    fn single_activation_removes_selected_value() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Hours));
        ctl.set_selection(Selection::from([3, 9]));
        let t0 = Instant::now();

        ctl.activate(3, t0);
        ctl.poll(t0 + D);
        assert_eq!(emitted.borrow().as_slice(), &[Selection::from([9])]);
    }

    #[test]
    fn removing_last_value_emits_empty_selection() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Hours));
        ctl.set_selection(Selection::from([9]));
        let t0 = Instant::now();

        ctl.activate(9, t0);
        ctl.poll(t0 + D);
        assert_eq!(emitted.borrow().as_slice(), &[Selection::new()]);
    }

    #[test]
    fn double_activation_selects_multiples_then_toggles_off() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Minutes));
        let t0 = Instant::now();

        ctl.activate(15, t0);
        ctl.activate(15, t0 + ms(120));
        assert_eq!(ctl.poll(t0 + D), Some(Activation::Double));
        let first = emitted.borrow()[0].clone();
        assert_eq!(first.as_slice(), &[0, 15, 30, 45]);

        // owner feeds the value back, then repeats the gesture
        ctl.set_selection(first);
        let t1 = t0 + ms(1_000);
        ctl.activate(15, t1);
        ctl.activate(15, t1 + ms(50));
        ctl.poll(t1 + D);
        assert_eq!(emitted.borrow()[1], Selection::new());
        assert_eq!(emitted.borrow().len(), 2);
    }

    #[test]
    fn slow_repeat_restores_original_selection() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Minutes));
        let original = Selection::from([10, 20]);
        ctl.set_selection(original.clone());
        let t0 = Instant::now();

        ctl.activate(30, t0);
        // arrives exactly at the window boundary: the first window closes as single
        ctl.activate(30, t0 + D);
        let after_first = emitted.borrow()[0].clone();
        assert_eq!(after_first.as_slice(), &[10, 20, 30]);

        ctl.set_selection(after_first);
        assert_eq!(ctl.poll(t0 + D + D), Some(Activation::Single));
        assert_eq!(emitted.borrow()[1], original);
    }

    #[test]
    fn latest_value_wins_inside_window() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Minutes));
        let t0 = Instant::now();

        ctl.activate(10, t0);
        ctl.activate(20, t0 + ms(100));
        ctl.poll(t0 + D);
        assert_eq!(emitted.borrow()[0].as_slice(), &[0, 20, 40]);
    }

    #[test]
    fn zero_step_is_rejected_without_emission() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Minutes));
        let t0 = Instant::now();

        ctl.activate(0, t0);
        ctl.activate(0, t0 + ms(10));
        assert_eq!(ctl.poll(t0 + D), Some(Activation::Double));
        assert!(emitted.borrow().is_empty());
        assert!(!ctl.is_pending());
    }

    #[test]
    fn out_of_domain_activation_is_ignored() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Months));
        let t0 = Instant::now();

        ctl.activate(0, t0);
        ctl.activate(13, t0);
        assert!(!ctl.is_pending());
        assert_eq!(ctl.poll(t0 + D), None);
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn week_days_step_seven_from_one() {
        let cfg = FieldConfig::new(FieldType::WeekDays).with_start_at_zero(false);
        let (mut ctl, emitted) = controller(cfg);
        let t0 = Instant::now();

        ctl.activate(7, t0);
        ctl.activate(7, t0 + ms(10));
        ctl.poll(t0 + D);
        assert_eq!(emitted.borrow()[0].as_slice(), &[7]);
    }

    #[test]
    fn clear_bypasses_debounce() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Hours));
        ctl.set_selection(Selection::from([1, 2]));

        assert!(ctl.clear());
        assert_eq!(emitted.borrow().as_slice(), &[Selection::new()]);
        assert!(!ctl.is_pending());
    }

    #[test]
    fn read_only_blocks_every_transition() {
        let cfg = FieldConfig::new(FieldType::Hours).with_read_only(true);
        let (mut ctl, emitted) = controller(cfg);
        let t0 = Instant::now();

        ctl.activate(4, t0);
        assert!(!ctl.is_pending());
        assert!(!ctl.clear());

        // state is still accepted
        ctl.set_selection(Selection::from([4]));
        assert_eq!(ctl.selection().as_slice(), &[4]);
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn read_only_set_while_pending_drops_window() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Hours));
        let t0 = Instant::now();

        ctl.activate(4, t0);
        ctl.set_read_only(true);
        assert_eq!(ctl.poll(t0 + D), None);
        assert!(!ctl.is_pending());
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn cancel_pending_prevents_emission() {
        let (mut ctl, emitted) = controller(FieldConfig::new(FieldType::Minutes));
        let t0 = Instant::now();

        ctl.activate(5, t0);
        assert!(ctl.cancel_pending());
        assert!(!ctl.cancel_pending());
        assert_eq!(ctl.poll(t0 + D), None);
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn out_of_domain_selection_keeps_previous() {
        let metrics = std::sync::Arc::new(Recording::default());
        let (ctl, emitted) = controller(FieldConfig::new(FieldType::Months));
        let mut ctl = ctl.with_metrics(metrics.clone());

        assert!(ctl.set_selection(Selection::from([1, 12])));
        assert!(!ctl.set_selection(Selection::from([0, 6])));
        assert!(!ctl.set_selection(Selection::from([13])));
        assert_eq!(ctl.selection().as_slice(), &[1, 12]);

        // a toggle acts on the kept value
        let t0 = Instant::now();
        ctl.activate(12, t0);
        ctl.poll(t0 + D);
        assert_eq!(emitted.borrow().as_slice(), &[Selection::from([1])]);

        let rejected = metrics
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.as_str() == "rejected:months:out_of_domain")
            .count();
        assert_eq!(rejected, 2);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = FieldConfig::new(FieldType::Minutes);
        cfg.debounce_ms = 0;
        let res = SelectionController::new(&cfg, |_: Selection| {});
        assert!(matches!(res, Err(CoreError::Config(_))));
    }

    #[derive(Default)]
    struct Recording(Mutex<Vec<String>>);

    impl MetricsBackend for Recording {
        fn record_activation(&self, field: &str) {
            self.0.lock().unwrap().push(format!("activation:{field}"));
        }
        fn record_interaction(&self, field: &str, kind: Interaction) {
            self.0.lock().unwrap().push(format!("{}:{field}", kind.as_label()));
        }
        fn record_selection(&self, field: &str, size: usize) {
            self.0.lock().unwrap().push(format!("selection:{field}:{size}"));
        }
        fn record_rejected(&self, field: &str, reason: &str) {
            self.0.lock().unwrap().push(format!("rejected:{field}:{reason}"));
        }
    }

    #[test]
    fn metrics_follow_interactions() {
        let metrics = std::sync::Arc::new(Recording::default());
        let (ctl, _emitted) = controller(FieldConfig::new(FieldType::Hours));
        let mut ctl = ctl.with_metrics(metrics.clone());
        let t0 = Instant::now();

        ctl.activate(6, t0);
        ctl.activate(6, t0 + ms(10));
        ctl.poll(t0 + D);
        ctl.activate(99, t0 + D);
        ctl.clear();

        let events = metrics.0.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "activation:hours",
                "activation:hours",
                "double:hours",
                "selection:hours:4",
                "rejected:hours:out_of_domain",
                "clear:hours",
                "selection:hours:0",
            ]
        );
    }
}
