use serde::{Deserialize, Serialize};

use crate::domain::{Domain, FieldValue};
use crate::label::{LabelOptions, format_label};

/// One entry of the option list handed to the widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: FieldValue,
    pub label: String,
}

/// Builds the option list for a domain.
///
/// With an explicit `options_list`, entry `i` gets value `start_at + i` and
/// keeps its caller-provided label. Otherwise one option is generated per
/// domain value through [`format_label`].
pub fn build_options(
    domain: &Domain,
    labels: &LabelOptions,
    options_list: Option<&[String]>,
) -> Vec<SelectOption> {
    match options_list {
        Some(list) => list
            .iter()
            .zip(domain.start_at()..)
            .map(|(label, value)| SelectOption {
                value,
                label: label.clone(),
            })
            .collect(),
        None => domain
            .values()
            .map(|value| SelectOption {
                value,
                label: format_label(value, domain.field(), labels),
            })
            .collect(),
    }
}
