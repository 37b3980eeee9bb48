// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Service seams for side effects: native file picker and digest backend.

pub mod digest;
pub mod picker;

pub use digest::{DigestAlgorithm, DigestService};
pub use picker::{FilePicker, NativePicker, PickerOptions};
