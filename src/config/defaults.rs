// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Endpoint the upload form posts to when none is configured.
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "http://localhost:5000/";

/// Multipart field name carrying the image.
pub const DEFAULT_UPLOAD_FIELD: &str = "uploadedImage";

/// Default request timeout for an upload (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 60;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u32 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u32 = 600;

// ==========================================================================
// Toast Surface Defaults
// ==========================================================================

/// Distance between the toast stack and the anchored window corner (pixels).
pub const DEFAULT_TOAST_MARGIN: f32 = 20.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_TOAST_MARGIN >= 0.0);
};
