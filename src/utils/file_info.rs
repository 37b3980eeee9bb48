// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! File metadata shown next to a digest: size, MIME type and a matching icon.
//!
//! UI-agnostic apart from returning Phosphor glyph strings.

use std::path::Path;

use anyhow::{Context, Result};

/// Size and detected type of a digested file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileDetails {
    /// File size in bytes at the time of hashing.
    pub size: u64,
    /// MIME essence guessed from the file extension.
    pub mime: String,
}

/// Read size metadata and guess the MIME type for `path`.
///
/// # Errors
///
/// Returns an error when the file metadata cannot be read.
pub fn file_details(path: &Path) -> Result<FileDetails> {
    let meta = path
        .metadata()
        .with_context(|| format!("Failed to read metadata: {:?}", path))?;
    Ok(FileDetails {
        size: meta.len(),
        mime: guess_mime(path),
    })
}

/// Guess a MIME essence string from the path extension, defaulting to octet-stream.
pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Return a Phosphor file icon for a MIME essence.
pub fn icon_for(mime: &str) -> &'static str {
    let mime = mime.trim().to_ascii_lowercase();
    let (top, sub) = mime.split_once('/').unwrap_or((mime.as_str(), ""));

    match (top, sub) {
        ("image", _) => egui_phosphor::regular::FILE_IMAGE,
        ("video", _) => egui_phosphor::regular::FILE_VIDEO,
        ("audio", _) => egui_phosphor::regular::FILE_AUDIO,
        ("application", "pdf") => egui_phosphor::regular::FILE_PDF,
        ("text", "csv") => egui_phosphor::regular::FILE_CSV,
        ("text", "html") => egui_phosphor::regular::FILE_HTML,
        ("text", "markdown") => egui_phosphor::regular::FILE_MD,
        ("application", "json" | "xml" | "javascript" | "typescript") | ("text", "xml") => {
            egui_phosphor::regular::FILE_CODE
        }
        (
            "application",
            "zip" | "gzip" | "x-7z-compressed" | "x-rar-compressed" | "x-tar" | "x-gtar"
            | "x-bzip2" | "x-xz" | "zstd",
        ) => egui_phosphor::regular::FILE_ARCHIVE,
        ("text", _) => egui_phosphor::regular::FILE_TXT,
        _ => egui_phosphor::regular::FILE,
    }
}

/// Human-readable formatting for byte sizes with binary units.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
