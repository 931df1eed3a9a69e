// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; controllers only see the
//! traits, so they can be exercised with in-memory fakes.
//!
//! # Available Ports
//!
//! - [`upload`]: sending the selected image to the detection endpoint

pub mod upload;

pub use upload::{UploadError, UploadFuture, UploadReceipt, UploadRequest, UploadResult, Uploader};
