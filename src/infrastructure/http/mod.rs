// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter for the upload port.
//!
//! Each upload is a single `multipart/form-data` POST with one part. The
//! response body is drained and discarded; any response counts as a
//! completed upload and only failures to get one are errors.

use crate::application::port::{UploadError, UploadFuture, UploadReceipt, UploadRequest, Uploader};
use crate::error::{Error, Result};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

const USER_AGENT: &str = concat!("AccidentUploader/", env!("CARGO_PKG_VERSION"));

/// Fallback content type when the extension is unknown.
const OCTET_STREAM: &str = "application/octet-stream";

/// Uploads files over HTTP with a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: reqwest::Client,
}

impl HttpUploader {
    /// Builds the HTTP client with the given request timeout.
    ///
    /// A client that cannot be built (e.g. no TLS backend) is a startup error.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Initialization(format!("HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Uploader for HttpUploader {
    fn upload(&self, request: UploadRequest) -> UploadFuture {
        let client = self.client.clone();
        Box::pin(async move {
            let UploadRequest {
                endpoint,
                field_name,
                file_name,
                bytes,
            } = request;

            let size = bytes.len();
            let part = Part::bytes(bytes)
                .file_name(file_name.clone())
                .mime_str(mime_for(&file_name))
                .map_err(transport)?;
            let form = Form::new().part(field_name, part);

            tracing::info!(endpoint = %endpoint, file = %file_name, size, "uploading");
            let response = client
                .post(&endpoint)
                .multipart(form)
                .send()
                .await
                .map_err(transport)?;

            let status = response.status();
            let body = response.bytes().await.map_err(transport)?;
            tracing::debug!(status = status.as_u16(), body_len = body.len(), "upload response");

            Ok(UploadReceipt {
                status: status.as_u16(),
                body_len: body.len(),
            })
        })
    }
}

fn transport(err: reqwest::Error) -> UploadError {
    UploadError::Transport(err.to_string())
}

/// Guesses the part content type from the file extension.
fn mime_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("tif" | "tiff") => "image/tiff",
        _ => OCTET_STREAM,
    }
}
