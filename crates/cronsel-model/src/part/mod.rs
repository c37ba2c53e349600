//! Conversion between a [`Selection`](crate::Selection) and the textual cron
//! part of one field (`*`, `*/15`, `1-5`, `MON,WED`, `0-30/10`, ...).
mod encode;
pub use encode::{every_step, to_cron_part};

mod parse;
pub use parse::parse_part;

/// Cron wildcard token.
pub const WILDCARD: &str = "*";
