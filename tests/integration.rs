// SPDX-License-Identifier: MPL-2.0
use accident_uploader::application::port::{
    UploadError, UploadFuture, UploadReceipt, UploadRequest, Uploader,
};
use accident_uploader::config::{self, Config, CONFIG_LOAD_WARNING_KEY};
use accident_uploader::i18n::fluent::I18n;
use accident_uploader::ui::notifications::{
    Anchor, Kind, NotificationCenter, Phase, Surface, DWELL, ENTER_TRANSITION, EXIT_TRANSITION,
};
use accident_uploader::ui::upload::{
    SelectedFile, UploadPreviewController, UploadSubmitController, UploadTarget,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

/// Uploader answering every request with `200 OK` and remembering what it got.
#[derive(Default)]
struct RecordingUploader {
    requests: Mutex<Vec<UploadRequest>>,
}

impl Uploader for RecordingUploader {
    fn upload(&self, request: UploadRequest) -> UploadFuture {
        self.requests.lock().expect("lock").push(request);
        Box::pin(async { Ok(UploadReceipt { status: 200, body_len: 0 }) })
    }
}

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("upload-submit-button"), "Envoyer");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);

    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("settings.toml"), "[upload\nendpoint = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
}

#[test]
fn test_notification_placement_from_config() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[notifications]\nanchor = \"bottom-left\"\nmargin = 8.0\n",
    )
    .expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut center = NotificationCenter::new(Surface::from_config(&config.notifications));
    center.initialize().expect("valid surface");
    let surface = center.surface().copied().expect("mounted");
    assert_eq!(surface.anchor(), Anchor::BottomLeft);
    assert_eq!(surface.margin(), 8.0);
}

#[test]
fn test_negative_margin_fails_initialization() {
    let mut center = NotificationCenter::new(Surface::new(Anchor::TopRight, -1.0));
    assert!(center.initialize().is_err());
    assert!(!center.is_initialized());
}

#[tokio::test]
async fn test_select_then_submit_flow() {
    let i18n = english();
    let uploader = Arc::new(RecordingUploader::default());
    let mut center = NotificationCenter::default();
    let mut preview = UploadPreviewController::new();
    let submitter = UploadSubmitController::new(
        uploader.clone(),
        UploadTarget::from_config(&Config::default().upload),
    );

    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("crash.jpg");
    std::fs::write(&path, b"jpeg bytes").expect("write");
    let file = SelectedFile::read(path).await.expect("read");

    assert!(preview.on_selection_changed(Some(&file), &mut center, &i18n));
    let outcome = submitter
        .submit(Some(&file), &mut center, &i18n)
        .expect("file selected")
        .await;
    submitter.report(&outcome, &mut center, &i18n);

    let toasts: Vec<(Kind, String)> = center
        .active()
        .map(|n| (n.kind(), n.message().to_string()))
        .collect();
    assert_eq!(
        toasts,
        vec![
            (Kind::Info, "File selected successfully!".to_string()),
            (
                Kind::Alert,
                "Accident detection complete! Check email/WhatsApp alerts.".to_string()
            ),
        ]
    );

    let requests = uploader.requests.lock().expect("lock");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].endpoint, "http://localhost:5000/");
    assert_eq!(requests[0].field_name, "uploadedImage");
    assert_eq!(requests[0].bytes, b"jpeg bytes");
}

#[test]
fn test_submit_without_selection_only_alerts() {
    let i18n = english();
    let uploader = Arc::new(RecordingUploader::default());
    let mut center = NotificationCenter::default();
    let submitter = UploadSubmitController::new(
        uploader.clone(),
        UploadTarget::from_config(&Config::default().upload),
    );

    let result = submitter.submit(None, &mut center, &i18n);

    assert!(matches!(result, Err(UploadError::MissingFile)));
    assert!(uploader.requests.lock().expect("lock").is_empty());
    assert_eq!(center.len(), 1);
}

#[test]
fn test_toasts_expire_independently() {
    let mut center = NotificationCenter::default();
    center.notify("same text", Kind::Info);
    let (first_id, first_created) = center
        .active()
        .next()
        .map(|n| (n.id(), n.created_at()))
        .expect("first");
    center.notify("same text", Kind::Info);
    assert_eq!(center.len(), 2);

    let second_created = center.active().nth(1).map(|n| n.created_at()).expect("second");
    center.tick(second_created + ENTER_TRANSITION);
    assert!(center.active().all(|n| n.phase() == Phase::Visible));

    let end_of_first = first_created + DWELL + EXIT_TRANSITION;
    center.tick(end_of_first);
    assert!(center.active().all(|n| n.id() != first_id));

    center.tick(second_created + DWELL + EXIT_TRANSITION + Duration::from_millis(1));
    assert!(center.is_empty());
}
