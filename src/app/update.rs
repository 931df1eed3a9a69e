// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{NotificationCenter, NotificationMessage};
use crate::ui::upload::{
    SelectedFile, UploadPreviewController, UploadSubmitController, IMAGE_EXTENSIONS,
};
use crate::application::port::UploadResult;
use iced::{window, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Mutable application state the handlers operate on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a mut NotificationCenter,
    pub selection: &'a mut Option<SelectedFile>,
    pub preview: &'a mut UploadPreviewController,
    pub submitter: &'a UploadSubmitController,
}

/// Reads `path` into a selection, logging instead of failing.
pub async fn read_selection(path: PathBuf) -> Option<SelectedFile> {
    match SelectedFile::read(path.clone()).await {
        Ok(file) => Some(file),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not read selected file");
            None
        }
    }
}

/// Opens the native file dialog and reads the chosen file.
pub fn handle_pick_file() -> Task<Message> {
    Task::perform(
        async {
            let handle = rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await?;
            read_selection(handle.path().to_path_buf()).await
        },
        Message::FileSelected,
    )
}

pub fn handle_file_dropped(path: PathBuf) -> Task<Message> {
    tracing::debug!(path = %path.display(), "file dropped");
    Task::perform(read_selection(path), Message::FileSelected)
}

/// Replaces the selection and refreshes the preview.
///
/// An empty result (cancelled dialog, unreadable file) keeps the previous selection.
pub fn handle_file_selected(ctx: &mut UpdateContext<'_>, file: Option<SelectedFile>) -> Task<Message> {
    let Some(file) = file else {
        return Task::none();
    };
    tracing::info!(file = file.file_name(), size = file.bytes().len(), "file selected");
    ctx.preview
        .on_selection_changed(Some(&file), ctx.notifications, ctx.i18n);
    *ctx.selection = Some(file);
    Task::none()
}

pub fn handle_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx
        .submitter
        .submit(ctx.selection.as_ref(), ctx.notifications, ctx.i18n)
    {
        Ok(upload) => Task::perform(upload, Message::UploadFinished),
        Err(_) => Task::none(),
    }
}

pub fn handle_upload_finished(ctx: &mut UpdateContext<'_>, outcome: &UploadResult) -> Task<Message> {
    ctx.submitter.report(outcome, ctx.notifications, ctx.i18n);
    Task::none()
}

pub fn handle_notification(
    ctx: &mut UpdateContext<'_>,
    message: &NotificationMessage,
    now: Instant,
) -> Task<Message> {
    ctx.notifications.handle_message(message, now);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    Task::none()
}

/// Releases the preview before letting the window close.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    tracing::debug!("window close requested");
    ctx.preview.teardown();
    window::close(id)
}
