// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the single [`NotificationCenter`] and the upload
//! controllers, and hands them to the handlers in [`update`] by reference.
//! Every state change happens inside `App::update`.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::{ANIMATION_TICK, DWELL_TICK};

use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Kind, NotificationCenter};
use crate::ui::theming::ThemeMode;
use crate::ui::upload::{SelectedFile, UploadPreviewController, UploadSubmitController, UploadTarget};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    notifications: NotificationCenter,
    selection: Option<SelectedFile>,
    preview: UploadPreviewController,
    submitter: UploadSubmitController,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selection", &self.selection.as_ref().map(SelectedFile::file_name))
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
///
/// Close requests are routed through `App::update` so the preview can be
/// released before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires `Fn` for boot; flags are consumed on the single call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application state and the startup task.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            file_path,
            config,
            config_warning,
            notifications,
            uploader,
        } = flags;

        let i18n = I18n::new(lang, &config);
        let mut app = App {
            theme_mode: config.general.theme_mode,
            notifications,
            selection: None,
            preview: UploadPreviewController::new(),
            submitter: UploadSubmitController::new(
                uploader,
                UploadTarget::from_config(&config.upload),
            ),
            i18n,
        };

        if let Some(key) = config_warning {
            let text = app.i18n.tr(&key);
            app.notifications.notify(text, Kind::Alert);
        }

        tracing::info!(
            endpoint = %app.submitter.target().endpoint,
            locale = %app.i18n.current_locale(),
            "application started"
        );

        let task = match file_path {
            Some(path) => update::handle_file_dropped(path),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.selection {
            Some(file) => format!("{} - {app_name}", file.file_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(&self.notifications),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            notifications: &mut self.notifications,
            selection: &mut self.selection,
            preview: &mut self.preview,
            submitter: &self.submitter,
        };

        match message {
            Message::PickFile => update::handle_pick_file(),
            Message::FileSelected(file) => update::handle_file_selected(&mut ctx, file),
            Message::FileDropped(path) => update::handle_file_dropped(path),
            Message::Submit => update::handle_submit(&mut ctx),
            Message::UploadFinished(outcome) => update::handle_upload_finished(&mut ctx, &outcome),
            Message::Notification(message) => {
                update::handle_notification(&mut ctx, &message, Instant::now())
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            selection: self.selection.as_ref(),
            preview: &self.preview,
            notifications: &self.notifications,
        })
    }
}
