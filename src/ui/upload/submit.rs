// SPDX-License-Identifier: MPL-2.0
//! Upload submission and outcome reporting.

use super::selection::SelectedFile;
use crate::application::port::{
    UploadError, UploadFuture, UploadRequest, UploadResult, Uploader,
};
use crate::config::UploadConfig;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Kind, NotificationCenter};
use std::fmt;
use std::sync::Arc;

/// Where uploads are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub endpoint: String,
    pub field_name: String,
}

impl UploadTarget {
    #[must_use]
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            endpoint: config.endpoint().to_string(),
            field_name: config.field_name().to_string(),
        }
    }
}

/// Validates a submission, starts the upload and reports its outcome.
pub struct UploadSubmitController {
    uploader: Arc<dyn Uploader>,
    target: UploadTarget,
}

impl fmt::Debug for UploadSubmitController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadSubmitController")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl UploadSubmitController {
    pub fn new(uploader: Arc<dyn Uploader>, target: UploadTarget) -> Self {
        Self { uploader, target }
    }

    #[must_use]
    pub fn target(&self) -> &UploadTarget {
        &self.target
    }

    /// Starts an upload of `selection`.
    ///
    /// Without a selection an alert toast is shown, nothing is sent and
    /// [`UploadError::MissingFile`] is returned. Otherwise the returned
    /// future performs the request; pass its output to [`report`](Self::report).
    pub fn submit(
        &self,
        selection: Option<&SelectedFile>,
        center: &mut NotificationCenter,
        i18n: &I18n,
    ) -> Result<UploadFuture, UploadError> {
        let Some(file) = selection else {
            tracing::debug!("submit without a selected file");
            center.notify(i18n.tr("notification-missing-file"), Kind::Alert);
            return Err(UploadError::MissingFile);
        };

        let request = UploadRequest {
            endpoint: self.target.endpoint.clone(),
            field_name: self.target.field_name.clone(),
            file_name: file.file_name().to_string(),
            bytes: file.bytes().to_vec(),
        };
        Ok(self.uploader.upload(request))
    }

    /// Shows the toast for a finished upload.
    ///
    /// Any server response counts as success, whatever its status.
    pub fn report(&self, outcome: &UploadResult, center: &mut NotificationCenter, i18n: &I18n) {
        match outcome {
            Ok(receipt) => {
                if !receipt.is_success() {
                    tracing::warn!(status = receipt.status, "upload answered with an error status");
                }
                center.notify(i18n.tr("notification-upload-complete"), Kind::Alert);
            }
            Err(err) => {
                tracing::error!(error = %err, "upload failed");
                center.notify(i18n.tr("notification-upload-failed"), Kind::Alert);
            }
        }
    }
}
