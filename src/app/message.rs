// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::{UploadError, UploadReceipt, Uploader};
use crate::config::Config;
use crate::ui::notifications::{self, NotificationCenter};
use crate::ui::upload::{SelectedFile, UploadMessage};
use iced::window;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the native file dialog.
    PickFile,
    /// A file was read from the dialog, a drop or the command line.
    /// `None` when the dialog was cancelled or the file was unreadable.
    FileSelected(Option<SelectedFile>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    Submit,
    UploadFinished(Result<UploadReceipt, UploadError>),
    Notification(notifications::NotificationMessage),
    Tick(Instant),
    WindowCloseRequested(window::Id),
}

impl From<UploadMessage> for Message {
    fn from(message: UploadMessage) -> Self {
        match message {
            UploadMessage::ChooseFile => Message::PickFile,
            UploadMessage::Submit => Message::Submit,
        }
    }
}

/// Runtime flags passed in from `main`.
pub struct Flags {
    /// Optional locale override from the command line.
    pub lang: Option<String>,
    /// Image to preselect at startup.
    pub file_path: Option<PathBuf>,
    pub config: Config,
    /// i18n key of a warning raised while loading the config.
    pub config_warning: Option<String>,
    /// Notification center with its surface already initialized.
    pub notifications: NotificationCenter,
    pub uploader: Arc<dyn Uploader>,
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flags")
            .field("lang", &self.lang)
            .field("file_path", &self.file_path)
            .field("config_warning", &self.config_warning)
            .finish_non_exhaustive()
    }
}
