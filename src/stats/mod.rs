// Copyright (c) 2025-2026 the covtrack contributors
// SPDX-License-Identifier: Apache-2.0

//! The pure transform layer between fetch and render: ranking country
//! records and formatting counts for display.

pub mod format;
pub mod rank;

pub use format::{format_compact, format_count, format_stat};
pub use rank::rank;
