// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: multipart uploads via `reqwest` (implements [`Uploader`])
//!
//! [`Uploader`]: crate::application::port::Uploader

pub mod http;

pub use http::HttpUploader;
