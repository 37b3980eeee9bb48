// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Streaming file digest helpers (SHA-256 and MD5 ETag).

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a file and return its lowercase hex digest.
///
/// The file is streamed through the hasher, so memory use does not depend on
/// file size.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or fully read.
///
/// # Examples
///
/// ```rust,ignore
/// use std::path::Path;
/// let digest = hashpad::utils::hash_file(Path::new("notes.txt"))?;
/// assert_eq!(digest.len(), 64);
/// ```
pub fn hash_file(path: &Path) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file for hashing: {:?}", path))?;
    hash_reader(file).with_context(|| format!("Failed to read file for hashing: {:?}", path))
}

/// Hash everything readable from `reader` and return the lowercase hex digest.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Compute the MD5 of a file as a lowercase hex string.
///
/// For objects uploaded in a single part this equals the S3 ETag (without quotes).
///
/// # Errors
///
/// Returns an error when the file cannot be opened or fully read.
pub fn md5_file(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file for hashing: {:?}", path))?;
    md5_reader(file).with_context(|| format!("Failed to read file for hashing: {:?}", path))
}

/// MD5 everything readable from `reader` and return the lowercase hex digest.
pub fn md5_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut context = md5::Context::new();
    io::copy(&mut reader, &mut context)?;
    Ok(format!("{:x}", context.compute()))
}
