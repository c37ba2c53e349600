//! Selection transitions triggered by classified activations.
use std::num::NonZeroU32;

use cronsel_model::{Domain, FieldValue, Selection};

/// Single activation: remove `value` if selected, insert it otherwise.
pub fn toggle(selection: &Selection, value: FieldValue) -> Selection {
    selection.toggled(value)
}

/// Double activation: select every multiple of `step` in the step universe.
///
/// Collapses to the empty (wildcard) selection when the candidate set covers
/// every option, or when it is exactly the current selection (so repeating
/// the same step switches it off).
pub fn apply_step(
    selection: &Selection,
    domain: &Domain,
    option_count: usize,
    step: NonZeroU32,
) -> Selection {
    let candidate = domain.multiples_of(step);
    if candidate.len() == option_count || candidate == *selection {
        Selection::new()
    } else {
        candidate
    }
}
