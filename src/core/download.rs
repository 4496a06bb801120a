//! Export artifact download
//!
//! A successful geodienste.ch export job publishes a download URL in its
//! status payload. This module fetches that artifact, writes it to the
//! configured destination directory and records a SHA-256 checksum so that
//! repeated runs can be compared against each other.

use crate::domain::errors::DownloadError;
use crate::domain::Result;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Fallback file name when the download URL carries no usable path segment
const DEFAULT_ARTIFACT_NAME: &str = "export.zip";

/// Connection timeout for artifact downloads
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A downloaded export artifact on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedArtifact {
    /// File name the artifact was stored under
    pub file_name: String,

    /// Full path of the artifact on disk
    pub path: PathBuf,

    /// Number of bytes written
    pub bytes_written: u64,

    /// Hex-encoded SHA-256 checksum of the artifact
    pub sha256: String,
}

/// Downloads an export artifact into the destination directory
///
/// The file name is derived from the last path segment of the download URL.
/// The destination directory is created if it does not exist yet, and an
/// existing artifact with the same name is overwritten.
///
/// # Arguments
///
/// * `download_url` - Download URL from the export status payload
/// * `destination_dir` - Directory the artifact is written into
///
/// # Errors
///
/// Returns an error if the URL is invalid, the artifact host cannot be
/// reached, the host answers with a non-success status, or the file cannot
/// be written.
pub async fn download_export(
    download_url: &str,
    destination_dir: &Path,
) -> Result<DownloadedArtifact> {
    let url = Url::parse(download_url)
        .map_err(|e| DownloadError::InvalidUrl(format!("{download_url}: {e}")))?;

    let file_name = artifact_file_name(&url);
    let target_path = destination_dir.join(&file_name);

    tokio::fs::create_dir_all(destination_dir).await.map_err(|e| {
        DownloadError::Io(format!(
            "Failed to create {}: {}",
            destination_dir.display(),
            e
        ))
    })?;

    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .map_err(|e| DownloadError::ConnectionFailed(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DownloadError::ConnectionFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(DownloadError::HttpStatus(response.status().as_u16()).into());
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| DownloadError::ConnectionFailed(e.to_string()))?;

    tokio::fs::write(&target_path, &bytes).await.map_err(|e| {
        DownloadError::Io(format!("Failed to write {}: {}", target_path.display(), e))
    })?;

    let sha256 = checksum_bytes(&bytes);

    tracing::info!(
        path = %target_path.display(),
        bytes = bytes.len(),
        sha256 = %sha256,
        "Export artifact downloaded"
    );

    Ok(DownloadedArtifact {
        file_name,
        path: target_path,
        bytes_written: bytes.len() as u64,
        sha256,
    })
}

/// Derives the artifact file name from the last path segment of the URL
fn artifact_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
        .unwrap_or(DEFAULT_ARTIFACT_NAME)
        .to_string()
}

/// Calculate the hex-encoded SHA-256 checksum of raw bytes
fn checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}
