//! Focus resolution after a page change
//!
//! Pure functions. Every result is clamped to `[0, valid_count - 1]`; with
//! nothing visible they return 0 and the caller leaves focus empty.

use serde::{Deserialize, Serialize};

/// How horizontal page turns place focus on the new page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalRule {
    /// Keep the logical row, landing on its first (forward) or last
    /// (backward) column
    #[default]
    Row,
    /// Keep the slot index while it is still visible, else slot 0
    Slot,
}

impl HorizontalRule {
    pub fn resolve(
        self,
        previous_slot: usize,
        valid_count: usize,
        columns: usize,
        moving_forward: bool,
    ) -> usize {
        match self {
            HorizontalRule::Row => {
                let row = previous_slot / columns.max(1);
                resolve_horizontal_focus(row, valid_count, columns, moving_forward)
            }
            HorizontalRule::Slot => resolve_slot_continuity(previous_slot, valid_count),
        }
    }
}

/// Slot to focus after a horizontal page turn, keeping the row when possible
///
/// Forward lands on the first column of `previous_row`, or on the first column
/// of the last occupied row. Backward lands on the last column of
/// `previous_row`, or on the last visible slot.
pub fn resolve_horizontal_focus(
    previous_row: usize,
    valid_count: usize,
    columns: usize,
    moving_forward: bool,
) -> usize {
    if valid_count == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let target = if moving_forward {
        let row_start = previous_row.saturating_mul(columns);
        if valid_count > row_start {
            row_start
        } else {
            (valid_count - 1) / columns * columns
        }
    } else {
        let row_end = previous_row.saturating_add(1).saturating_mul(columns);
        if valid_count >= row_end {
            row_end - 1
        } else {
            valid_count - 1
        }
    };
    target.min(valid_count - 1)
}

/// Slot to focus after wrapping past the top or bottom row
pub fn resolve_vertical_wrap_focus(valid_count: usize, moving_down: bool) -> usize {
    if moving_down {
        0
    } else {
        valid_count.saturating_sub(1)
    }
}

/// Keep `previous_slot` when still visible, otherwise the first slot
pub fn resolve_slot_continuity(previous_slot: usize, valid_count: usize) -> usize {
    if previous_slot < valid_count {
        previous_slot
    } else {
        0
    }
}
