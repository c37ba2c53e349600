//! Event loop that owns one [`SelectionController`].
//!
//! A spawned tokio task is the single owner of the controller state. It waits on:
//! - inbound [`FieldEvent`]s from the widget and the owner;
//! - the controller's debounce deadline (the scheduled classification);
//! - a [`CancellationToken`] fired by [`FieldHandle::shutdown`] or by dropping the handle.
//!
//! Cancellation drops any pending window, so no classification ever runs after the
//! owner is gone.
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{Instant, sleep_until},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, trace};

use cronsel_model::{FieldConfig, FieldType, FieldValue, Selection};

use crate::{
    controller::{SelectionController, SelectionSink},
    error::CoreError,
    metrics::{MetricsHandle, noop_metrics},
};

/// Input of a field session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Widget: option picked.
    Activated(FieldValue),
    /// Widget: option unpicked.
    Deactivated(FieldValue),
    /// Widget: clear affordance used.
    Cleared,
    /// Owner: new controlled value.
    SetSelection(Selection),
    /// Owner: toggle read-only mode.
    SetReadOnly(bool),
}

/// Handle to a running field session.
///
/// Dropping the handle cancels the session.
#[derive(Debug)]
pub struct FieldHandle {
    field: FieldType,
    tx: mpsc::UnboundedSender<FieldEvent>,
    cancel: CancellationToken,
    join: Option<JoinHandle<()>>,
}

impl FieldHandle {
    /// Spawn a session on the current tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    pub fn spawn<S>(cfg: &FieldConfig, sink: S) -> Result<Self, CoreError>
    where
        S: SelectionSink + Send + 'static,
    {
        Self::spawn_with_metrics(cfg, sink, noop_metrics())
    }

    /// Spawn a session reporting to the given metrics backend.
    #[instrument(level = "debug", skip(cfg, sink, metrics), fields(field = %cfg.field))]
    pub fn spawn_with_metrics<S>(
        cfg: &FieldConfig,
        sink: S,
        metrics: MetricsHandle,
    ) -> Result<Self, CoreError>
    where
        S: SelectionSink + Send + 'static,
    {
        let controller = SelectionController::new(cfg, sink)?.with_metrics(metrics);
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let join = tokio::spawn(run(controller, rx, cancel.clone()));
        debug!("field session started");
        Ok(Self {
            field: cfg.field,
            tx,
            cancel,
            join: Some(join),
        })
    }

    pub fn field(&self) -> FieldType {
        self.field
    }

    /// Returns `true` once the session task has stopped accepting events.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    pub fn send(&self, event: FieldEvent) -> Result<(), CoreError> {
        self.tx
            .send(event)
            .map_err(|_| CoreError::SessionClosed(self.field))
    }

    pub fn activate(&self, value: FieldValue) -> Result<(), CoreError> {
        self.send(FieldEvent::Activated(value))
    }

    pub fn deactivate(&self, value: FieldValue) -> Result<(), CoreError> {
        self.send(FieldEvent::Deactivated(value))
    }

    pub fn clear(&self) -> Result<(), CoreError> {
        self.send(FieldEvent::Cleared)
    }

    pub fn set_selection(&self, selection: Selection) -> Result<(), CoreError> {
        self.send(FieldEvent::SetSelection(selection))
    }

    pub fn set_read_only(&self, read_only: bool) -> Result<(), CoreError> {
        self.send(FieldEvent::SetReadOnly(read_only))
    }

    /// Cancel the session and wait for its task to finish.
    pub async fn shutdown(mut self) -> Result<(), CoreError> {
        self.cancel.cancel();
        match self.join.take() {
            Some(join) => join.await.map_err(|e| CoreError::Join(e.to_string())),
            None => Ok(()),
        }
    }
}

impl Drop for FieldHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run<S: SelectionSink>(
    mut controller: SelectionController<S>,
    mut rx: mpsc::UnboundedReceiver<FieldEvent>,
    cancel: CancellationToken,
) {
    let field = controller.field();
    loop {
        let deadline = controller.deadline();
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                if controller.cancel_pending() {
                    debug!(field = %field, "session cancelled with a pending activation");
                }
                break;
            }
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                controller.poll(Instant::now());
            }
            event = rx.recv() => match event {
                Some(event) => apply(&mut controller, event),
                None => {
                    trace!(field = %field, "all field handles dropped");
                    break;
                }
            },
        }
    }
    debug!(field = %field, "field session stopped");
}

fn apply<S: SelectionSink>(controller: &mut SelectionController<S>, event: FieldEvent) {
    match event {
        FieldEvent::Activated(v) => controller.activate(v, Instant::now()),
        FieldEvent::Deactivated(v) => controller.deactivate(v, Instant::now()),
        FieldEvent::Cleared => {
            controller.clear();
        }
        FieldEvent::SetSelection(selection) => {
            controller.set_selection(selection);
        }
        FieldEvent::SetReadOnly(read_only) => controller.set_read_only(read_only),
    }
}
