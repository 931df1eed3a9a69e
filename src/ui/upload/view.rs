// SPDX-License-Identifier: MPL-2.0
//! Upload form: heading, file chooser, preview and submit button.

use super::preview::PreviewSource;
use super::selection::SelectedFile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, image, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Messages emitted by the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ChooseFile,
    Submit,
}

/// Data the form is rendered from.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: Option<&'a SelectedFile>,
    pub preview: Option<&'a PreviewSource>,
}

/// Renders the upload form.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Text::new(ctx.i18n.tr("upload-heading")).size(typography::TITLE_MD);

    let choose = button(Text::new(ctx.i18n.tr("upload-choose-button")).size(typography::BODY))
        .on_press(Message::ChooseFile)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD]);

    let label = Text::new(selection_label(ctx.i18n, ctx.selection)).size(typography::BODY);
    let file_label = if ctx.selection.is_some() {
        label
    } else {
        label.style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::GRAY_400),
        })
    };

    let submit = button(Text::new(ctx.i18n.tr("upload-submit-button")).size(typography::BODY_LG))
        .on_press(Message::Submit)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::LG])
        .style(button::primary);

    let mut form = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(choose)
        .push(file_label);

    if let Some(source) = ctx.preview {
        let preview = image::Image::new(source.handle().clone())
            .content_fit(ContentFit::ScaleDown)
            .width(Length::Shrink);
        form = form.push(Container::new(preview).max_width(sizing::PREVIEW_MAX_WIDTH));
    }

    form = form.push(submit);

    Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Name of the selected file, or the placeholder when nothing is selected.
fn selection_label(i18n: &I18n, selection: Option<&SelectedFile>) -> String {
    match selection {
        Some(file) => file.file_name().to_string(),
        None => i18n.tr("upload-no-file"),
    }
}
