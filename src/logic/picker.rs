// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Native file-picker seam.

use std::path::PathBuf;

use anyhow::Result;

/// Dialog settings. The picker always selects one regular file of any extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerOptions {
    /// Dialog window title.
    pub title: String,
}

impl PickerOptions {
    pub fn single_file(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Source of user-chosen paths.
///
/// `Ok(None)` means the user cancelled.
pub trait FilePicker: Send + Sync {
    fn pick_file(&self, options: &PickerOptions) -> Result<Option<PathBuf>>;
}

/// Blocking OS dialog backed by `rfd`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativePicker;

impl FilePicker for NativePicker {
    fn pick_file(&self, options: &PickerOptions) -> Result<Option<PathBuf>> {
        Ok(rfd::FileDialog::new()
            .set_title(&options.title)
            .pick_file())
    }
}
