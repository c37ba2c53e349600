use tokio::sync::mpsc;
use tracing::debug;

use cronsel_model::Selection;

/// Receiver of selections emitted by a controller (the field's owner).
pub trait SelectionSink {
    fn selection_changed(&mut self, selection: Selection);
}

impl<F> SelectionSink for F
where
    F: FnMut(Selection),
{
    fn selection_changed(&mut self, selection: Selection) {
        self(selection)
    }
}

/// Sink that forwards emitted selections into an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelSink(mpsc::UnboundedSender<Selection>);

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<Selection>) -> Self {
        Self(tx)
    }

    /// Create a sink together with its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Selection>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self(tx), rx)
    }
}

impl SelectionSink for ChannelSink {
    fn selection_changed(&mut self, selection: Selection) {
        if self.0.send(selection).is_err() {
            debug!("selection receiver dropped; change discarded");
        }
    }
}
