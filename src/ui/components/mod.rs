// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Reusable egui components structured for MVU-style updates.

pub mod file_hash;
pub mod notifications;
pub mod sidebar;
