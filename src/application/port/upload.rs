// SPDX-License-Identifier: MPL-2.0
//! Upload port definition.
//!
//! This module defines the [`Uploader`] trait used by the submit controller
//! to send the selected image to the detection server.
//!
//! # Design Notes
//!
//! - One call is one network attempt; retrying is up to the caller
//! - The returned future is `'static` so it can be handed to an Iced `Task`
//! - Only completion matters to the caller; the response body is not parsed

use futures_util::future::BoxFuture;
use thiserror::Error;

// =============================================================================
// UploadError
// =============================================================================

/// Why an upload did not produce a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Submission was attempted with no file selected.
    #[error("no file selected")]
    MissingFile,

    /// The request could not complete (connection refused, timeout, broken body...).
    #[error("upload transport failed: {0}")]
    Transport(String),
}

// =============================================================================
// Request / Receipt
// =============================================================================

/// A single multipart upload: one file under one field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Absolute URL to POST to.
    pub endpoint: String,
    /// Multipart field name the file is attached under.
    pub field_name: String,
    /// File name sent in the part's content disposition.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// What came back from a completed upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadReceipt {
    /// HTTP status code of the response.
    pub status: u16,
    /// Length of the (ignored) response body.
    pub body_len: usize,
}

impl UploadReceipt {
    /// Returns `true` for 2xx responses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outcome of an upload future.
pub type UploadResult = Result<UploadReceipt, UploadError>;

/// In-flight upload.
pub type UploadFuture = BoxFuture<'static, UploadResult>;

// =============================================================================
// Uploader Trait
// =============================================================================

/// Port for sending an image to the detection endpoint.
///
/// # Example
///
/// ```ignore
/// use accident_uploader::application::port::{Uploader, UploadRequest};
///
/// async fn send(uploader: &dyn Uploader, request: UploadRequest) {
///     match uploader.upload(request).await {
///         Ok(receipt) => println!("server answered {}", receipt.status),
///         Err(e) => eprintln!("upload failed: {e}"),
///     }
/// }
/// ```
pub trait Uploader: Send + Sync {
    /// Starts one upload attempt.
    ///
    /// The request is sent when the returned future is polled.
    fn upload(&self, request: UploadRequest) -> UploadFuture;
}
