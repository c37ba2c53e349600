pub mod classify;
pub mod controller;
pub mod error;
pub mod format;
pub mod metrics;
pub mod session;
pub mod transition;

pub use classify::{Activation, InteractionRecord};
pub use controller::{ChannelSink, SelectionController, SelectionSink};
pub use error::CoreError;
pub use format::{DisplayOptions, format_selection, render_tag};
pub use metrics::{Interaction, MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};
pub use session::{FieldEvent, FieldHandle};

pub mod prelude {
    pub use crate::controller::{SelectionController, SelectionSink};
    pub use crate::error::CoreError;
    pub use crate::format::{DisplayOptions, format_selection};
    pub use crate::session::{FieldEvent, FieldHandle};
    pub use cronsel_model::{FieldConfig, FieldType, Selection};
}
