// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The upload form is the base layer; the toast layer is stacked on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{NotificationCenter, Toast};
use crate::ui::upload::{view as upload_view, SelectedFile, UploadPreviewController};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: Option<&'a SelectedFile>,
    pub preview: &'a UploadPreviewController,
    pub notifications: &'a NotificationCenter,
}

/// Renders the upload form with the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = upload_view::view(upload_view::ViewContext {
        i18n: ctx.i18n,
        selection: ctx.selection,
        preview: ctx.preview.preview(),
    })
    .map(Message::from);

    let base = Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toasts)
        .into()
}
