use thiserror::Error;

use cronsel_model::{FieldType, ModelError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid field configuration: {0}")]
    Config(#[from] ModelError),

    #[error("field session for {0} is closed")]
    SessionClosed(FieldType),

    #[error("field session task failed: {0}")]
    Join(String),
}
