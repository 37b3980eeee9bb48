// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Shared helper utilities reused by UI and business logic.

pub mod file_info;
pub mod hash;

/// Size and MIME type of a file.
pub use file_info::{FileDetails, file_details};
/// Compute the SHA-256 hash of a file.
pub use hash::hash_file;
/// Compute the MD5 (ETag) of a file.
pub use hash::md5_file;
