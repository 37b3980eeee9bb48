// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Digest backends invoked off the UI thread.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

/// Backend that turns a file path into a content digest string.
///
/// Implementations are called from worker threads, one call per request.
pub trait DigestService: Send + Sync {
    /// Short algorithm label shown next to the result, e.g. `"SHA-256"`.
    fn algorithm(&self) -> &'static str;

    /// Compute the digest of the file at `path`.
    ///
    /// # Errors
    ///
    /// Any failure (missing file, permission, read error) is returned as-is;
    /// callers render it with `{:#}` for the user.
    fn digest(&self, path: &Path) -> Result<String>;
}

/// Algorithms selectable from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Md5,
}

impl DigestAlgorithm {
    /// Backend implementing this algorithm.
    pub fn service(self) -> Arc<dyn DigestService> {
        match self {
            DigestAlgorithm::Sha256 => Arc::new(Sha256Service),
            DigestAlgorithm::Md5 => Arc::new(Md5EtagService),
        }
    }
}

/// SHA-256 over the full file contents, lowercase hex.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Service;

impl DigestService for Sha256Service {
    fn algorithm(&self) -> &'static str {
        "SHA-256"
    }

    fn digest(&self, path: &Path) -> Result<String> {
        crate::utils::hash_file(path)
    }
}

/// MD5 over the full file contents, lowercase hex; matches a single-part S3 ETag.
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5EtagService;

impl DigestService for Md5EtagService {
    fn algorithm(&self) -> &'static str {
        "MD5 (ETag)"
    }

    fn digest(&self, path: &Path) -> Result<String> {
        crate::utils::md5_file(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn sha256_service_hashes_file_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.txt");
        fs::write(&path, b"").unwrap();

        let digest = Sha256Service.digest(&path).unwrap();

        assert!(digest.starts_with("e3b0c4"));
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn sha256_service_propagates_missing_file() {
        let tmp = TempDir::new().unwrap();

        let result = Sha256Service.digest(&tmp.path().join("gone.txt"));

        assert!(result.is_err());
    }

    #[test]
    fn md5_service_selected_by_algorithm() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        let service = DigestAlgorithm::Md5.service();

        assert_eq!(service.algorithm(), "MD5 (ETag)");
        assert_eq!(
            service.digest(&path).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn default_algorithm_is_sha256() {
        assert_eq!(DigestAlgorithm::default().service().algorithm(), "SHA-256");
    }
}
