//! Sequential image downloader.
//!
//! Fetches each extracted reference with a blocking GET and writes it to
//! `image_<n>.jpg` under the output directory, `n` counting from 1 in batch
//! order. One bad item never stops the rest of the batch.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use url::Url;

use crate::extract::ImageRef;

/// Why a single fetch failed. Per-item only; never aborts the batch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    #[error("HTTP {0}")]
    Http(u32),
    #[error("file write: {0}")]
    Io(#[from] io::Error),
}

/// Per-reference outcome, in batch order. Reporting only, never persisted.
#[derive(Debug)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    Failed { url: String, reason: String },
}

/// Fetches `url` with a single GET and streams the body to `dest`,
/// overwriting any existing file. The URL is parsed up front so an
/// unfetchable value fails before any network traffic.
///
/// Transport timeouts are libcurl's defaults; redirects are followed. On
/// failure a partially written file may remain at `dest`.
pub fn fetch_to_file(url: &str, dest: &Path) -> Result<(), FetchError> {
    let parsed = Url::parse(url)?;

    let mut file = fs::File::create(dest)?;
    let mut write_err: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(parsed.as_str())?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                write_err = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };
    if let Some(e) = write_err {
        return Err(FetchError::Io(e));
    }
    performed?;

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(())
}

/// Downloads every reference in order into `dir` as `image_<n>.jpg`.
///
/// Creates `dir` (recursively, idempotent) before the first fetch; that
/// failure is the only fatal one. Per-item fetch failures are recorded as
/// [`DownloadOutcome::Failed`] and the batch continues, so the result length
/// always equals `refs.len()`.
pub fn download_all(refs: &[ImageRef], dir: &Path) -> Result<Vec<DownloadOutcome>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let mut results = Vec::with_capacity(refs.len());
    for (i, r) in refs.iter().enumerate() {
        let dest = dir.join(format!("image_{}.jpg", i + 1));
        tracing::debug!("downloading {} -> {}", r.url, dest.display());
        match fetch_to_file(&r.url, &dest) {
            Ok(()) => {
                tracing::info!("image downloaded: {}", dest.display());
                results.push(DownloadOutcome::Saved(dest));
            }
            Err(e) => {
                tracing::warn!("failed to download {}: {}", r.url, e);
                results.push(DownloadOutcome::Failed {
                    url: r.url.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ImageRef;

    fn image_ref(url: &str, index: usize) -> ImageRef {
        ImageRef {
            url: url.to_string(),
            index,
        }
    }

    #[test]
    fn empty_batch_only_creates_directory() {
        let scratch = tempfile::tempdir().unwrap();
        let dir = scratch.path().join("out");
        let results = download_all(&[], &dir).unwrap();
        assert!(results.is_empty());
        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn invalid_url_is_failed_not_fatal() {
        let scratch = tempfile::tempdir().unwrap();
        let results = download_all(&[image_ref("ht!tp://::not a url::", 1)], scratch.path()).unwrap();
        assert_eq!(results.len(), 1);
        match &results[0] {
            DownloadOutcome::Failed { url, reason } => {
                assert_eq!(url, "ht!tp://::not a url::");
                assert!(!reason.is_empty());
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        // Parse fails before file creation, so nothing was written.
        assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
    }

    #[test]
    fn filenames_are_contiguous_from_one() {
        let scratch = tempfile::tempdir().unwrap();
        // Both refs are unreachable (connection refused is immediate on
        // loopback), but the destination names are still assigned in order.
        let refs = vec![
            image_ref("http://127.0.0.1:1/a.jpg", 1),
            image_ref("http://127.0.0.1:1/b.jpg", 2),
        ];
        let results = download_all(&refs, scratch.path()).unwrap();
        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(matches!(r, DownloadOutcome::Failed { .. }));
        }
    }
}
