// SPDX-License-Identifier: MPL-2.0
//! Image preview of the selected file.
//!
//! At most one preview exists. A new selection swaps the image source of the
//! existing preview and releases the previous source so repeated selections
//! do not accumulate decoded images.

use super::selection::SelectedFile;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Kind, NotificationCenter};
use iced::widget::image;

/// Transient image reference derived from a selected file.
#[derive(Debug, Clone)]
pub struct PreviewSource {
    id: u64,
    file_name: String,
    handle: image::Handle,
}

impl PreviewSource {
    /// Sequence number of this source; each selection gets a new one.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    fn release(self) {
        tracing::debug!(source = self.id, file = %self.file_name, "preview source released");
    }
}

/// Keeps the preview in sync with the file selection.
#[derive(Debug, Default)]
pub struct UploadPreviewController {
    source: Option<PreviewSource>,
    next_id: u64,
    released: u64,
}

impl UploadPreviewController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reacts to a change of the file selection.
    ///
    /// An empty selection is ignored and returns `false`. Otherwise the
    /// preview shows `file` and an info toast confirms the selection.
    pub fn on_selection_changed(
        &mut self,
        file: Option<&SelectedFile>,
        center: &mut NotificationCenter,
        i18n: &I18n,
    ) -> bool {
        let Some(file) = file else {
            return false;
        };

        self.next_id += 1;
        let source = PreviewSource {
            id: self.next_id,
            file_name: file.file_name().to_string(),
            handle: image::Handle::from_bytes(file.bytes().to_vec()),
        };
        if let Some(previous) = self.source.replace(source) {
            previous.release();
            self.released += 1;
        }

        center.notify(i18n.tr("notification-file-selected"), Kind::Info);
        true
    }

    /// Returns the current preview source, if a file was selected.
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewSource> {
        self.source.as_ref()
    }

    /// Number of sources released so far.
    #[must_use]
    pub fn released_count(&self) -> u64 {
        self.released
    }

    /// Releases the preview source; used when the window closes.
    pub fn teardown(&mut self) {
        if let Some(source) = self.source.take() {
            source.release();
            self.released += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::notifications::Notification;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn empty_selection_is_a_no_op() {
        let mut controller = UploadPreviewController::new();
        let mut center = NotificationCenter::default();

        assert!(!controller.on_selection_changed(None, &mut center, &english()));
        assert!(controller.preview().is_none());
        assert!(center.is_empty());
    }

    #[test]
    fn selection_shows_preview_and_one_info_toast() {
        let mut controller = UploadPreviewController::new();
        let mut center = NotificationCenter::default();
        let file = SelectedFile::new("photo.png", vec![0; 8]);

        assert!(controller.on_selection_changed(Some(&file), &mut center, &english()));

        assert_eq!(controller.preview().map(PreviewSource::file_name), Some("photo.png"));
        let toasts: Vec<&Notification> = center.active().collect();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind(), Kind::Info);
        assert_eq!(toasts[0].message(), "File selected successfully!");
    }

    #[test]
    fn second_selection_replaces_source_and_releases_previous() {
        let mut controller = UploadPreviewController::new();
        let mut center = NotificationCenter::default();
        let i18n = english();

        controller.on_selection_changed(Some(&SelectedFile::new("a.png", vec![1])), &mut center, &i18n);
        let first_id = controller.preview().map(PreviewSource::id);
        controller.on_selection_changed(Some(&SelectedFile::new("b.png", vec![2])), &mut center, &i18n);

        let preview = controller.preview().expect("preview exists");
        assert_eq!(preview.file_name(), "b.png");
        assert_ne!(Some(preview.id()), first_id);
        assert_eq!(controller.released_count(), 1);
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn teardown_releases_current_source_once() {
        let mut controller = UploadPreviewController::new();
        let mut center = NotificationCenter::default();
        controller.on_selection_changed(Some(&SelectedFile::new("a.png", vec![1])), &mut center, &english());

        controller.teardown();
        controller.teardown();

        assert!(controller.preview().is_none());
        assert_eq!(controller.released_count(), 1);
    }
}
