// Copyright (c) 2025-2026 the covtrack contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal panels. Each panel takes a [`crate::view::ViewState`] and
//! returns the text to print; color is applied through `console`, which
//! disables styling when stdout is not a terminal.

pub mod cards;
pub mod graph;
pub mod json;
pub mod map;
pub mod table;

/// Shared width of the dashboard panels, in character cells.
pub const PANEL_WIDTH: usize = 72;

/// Truncate a label to `max` characters, appending an ellipsis when cut.
pub(crate) fn truncate(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        let kept: String = label.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}\u{2026}")
    }
}
