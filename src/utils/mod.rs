// Copyright (c) 2025-2026 the covtrack contributors
// SPDX-License-Identifier: Apache-2.0

pub mod error;
