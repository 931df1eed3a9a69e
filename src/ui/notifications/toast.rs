// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications: colored cards
//! that slide and fade in from the anchored window edge, then slide and
//! fade back out. Animation progress is derived from the notification phase
//! and the center's latest tick, so rendering never reads the clock.

use super::center::{Message, NotificationCenter};
use super::notification::Notification;
use super::surface::{Anchor, Surface};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::widgets::slide::slide;
use iced::advanced::text::Renderer as TextRenderer;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, font, Color, Element, Font, Length, Theme};
use std::time::Instant;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at the given animation instant.
    ///
    /// The card always keeps its full width; while hidden it is shifted
    /// towards the anchored edge and clipped.
    pub fn view<'a, Renderer>(
        notification: &'a Notification,
        now: Instant,
        anchor: Anchor,
        dismiss_label: String,
    ) -> Element<'a, Message, Theme, Renderer>
    where
        Renderer: TextRenderer<Font = Font> + 'a,
    {
        let visibility = notification.visibility(now);
        let background = notification.kind().color();

        let message_widget = Text::new(notification.message())
            .size(typography::BODY_LG)
            .font(BOLD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(palette::WHITE, visibility)),
            });

        let dismiss_button = button(
            Text::new("\u{00d7}")
                .size(typography::BODY_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(palette::WHITE, visibility)),
                }),
        )
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

        let dismiss = tooltip::Tooltip::new(
            dismiss_button,
            Text::new(dismiss_label).size(typography::CAPTION),
            tooltip::Position::Bottom,
        )
        .gap(spacing::XXS)
        .padding(spacing::XXS)
        .style(container::rounded_box);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::MD, spacing::LG])
            .style(move |_theme: &Theme| toast_container_style(background, visibility));

        slide(card, slide_offset(visibility, anchor)).into()
    }

    /// Renders the toast layer with all active notifications.
    ///
    /// Toasts stack in insertion order from the anchored corner. Without a
    /// mounted surface nothing is drawn.
    pub fn view_overlay<'a>(center: &'a NotificationCenter, i18n: &I18n) -> Element<'a, Message> {
        let Some(surface) = center.surface().copied().filter(|_| center.has_notifications())
        else {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let now = center.now();
        let anchor = surface.anchor();
        let dismiss_label = i18n.tr("toast-dismiss");
        let toasts: Vec<Element<'a, Message>> = center
            .active()
            .map(|notification| Self::view(notification, now, anchor, dismiss_label.clone()))
            .collect();

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal_alignment(&surface));

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal_alignment(&surface))
            .align_y(vertical_alignment(&surface))
            .padding(surface.margin())
            .into()
    }
}

fn horizontal_alignment(surface: &Surface) -> alignment::Horizontal {
    if surface.anchor().is_right() {
        alignment::Horizontal::Right
    } else {
        alignment::Horizontal::Left
    }
}

fn vertical_alignment(surface: &Surface) -> alignment::Vertical {
    if surface.anchor().is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    }
}

/// Horizontal displacement for a given visibility, one full toast width
/// towards the anchored edge when hidden.
fn slide_offset(visibility: f32, anchor: Anchor) -> f32 {
    let distance = (1.0 - visibility.clamp(0.0, 1.0)) * sizing::TOAST_WIDTH;
    if anchor.is_right() {
        distance
    } else {
        -distance
    }
}

fn faded(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility.clamp(0.0, 1.0),
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(background: Color, visibility: f32) -> container::Style {
    let mut card_shadow = shadow::TOAST;
    card_shadow.color = faded(card_shadow.color, visibility);

    container::Style {
        background: Some(iced::Background::Color(faded(background, visibility))),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::LG.into(),
        },
        shadow: card_shadow,
        text_color: Some(faded(palette::WHITE, visibility)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        }))
    };

    let background = match status {
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::{Kind, ENTER_TRANSITION};
    use iced::advanced::layout;
    use iced::advanced::widget::Tree;
    use iced::{Rectangle, Size};

    /// Lays out one entering toast at `visibility`; returns the frame size and card bounds.
    fn lay_out_toast(visibility: f32, anchor: Anchor) -> (Size, Rectangle) {
        let created = Instant::now();
        let notification = Notification::new(Kind::Info, "Upload failed. Try again.", created);
        let now = created + ENTER_TRANSITION.mul_f32(visibility);

        let mut element: Element<'_, Message, Theme, ()> =
            Toast::view(&notification, now, anchor, "Dismiss".to_string());
        let mut tree = Tree::new(element.as_widget());
        let limits = layout::Limits::new(Size::ZERO, Size::new(800.0, 600.0));
        let node = element.as_widget_mut().layout(&mut tree, &(), &limits);

        (node.size(), node.children()[0].bounds())
    }

    #[test]
    fn card_slides_without_resizing() {
        let (hidden_frame, hidden) = lay_out_toast(0.0, Anchor::TopRight);
        let (half_frame, half) = lay_out_toast(0.5, Anchor::TopRight);
        let (shown_frame, shown) = lay_out_toast(1.0, Anchor::TopRight);

        for card in [hidden, half, shown] {
            assert_eq!(card.width, sizing::TOAST_WIDTH);
            assert_eq!(card.height, shown.height);
            assert_eq!(card.y, 0.0);
        }
        assert_eq!(hidden.x, sizing::TOAST_WIDTH);
        assert_eq!(half.x, sizing::TOAST_WIDTH / 2.0);
        assert_eq!(shown.x, 0.0);

        assert_eq!(hidden_frame, shown_frame);
        assert_eq!(half_frame, shown_frame);
        assert_eq!(shown_frame.width, sizing::TOAST_WIDTH);
    }

    #[test]
    fn overlay_renders_with_localized_dismiss_tooltip() {
        use crate::config::Config;
        use crate::ui::notifications::NotificationCenter;

        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        assert_eq!(i18n.tr("toast-dismiss"), "Fermer");

        let mut center = NotificationCenter::default();
        center.notify("Fichier sélectionné avec succès !", Kind::Info);
        let _overlay = Toast::view_overlay(&center, &i18n);
    }

    #[test]
    fn left_anchored_card_slides_from_the_left() {
        let (_, hidden) = lay_out_toast(0.0, Anchor::BottomLeft);
        let (_, shown) = lay_out_toast(1.0, Anchor::BottomLeft);

        assert_eq!(hidden.x, -sizing::TOAST_WIDTH);
        assert_eq!(hidden.width, sizing::TOAST_WIDTH);
        assert_eq!(shown.x, 0.0);
    }

    #[test]
    fn toast_container_style_uses_kind_color() {
        let style = toast_container_style(Kind::Alert.color(), 1.0);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(Kind::Alert.color()))
        );
    }

    #[test]
    fn hidden_toast_is_transparent_and_displaced() {
        let style = toast_container_style(Kind::Info.color(), 0.0);
        assert_eq!(style.text_color.map(|c| c.a), Some(0.0));
        assert_eq!(slide_offset(0.0, Anchor::TopRight), sizing::TOAST_WIDTH);
        assert_eq!(slide_offset(0.0, Anchor::BottomLeft), -sizing::TOAST_WIDTH);
        assert_eq!(slide_offset(1.0, Anchor::TopRight), 0.0);
    }

    #[test]
    fn overlay_alignment_follows_anchor() {
        let surface = Surface::new(Anchor::BottomLeft, 0.0);
        assert_eq!(horizontal_alignment(&surface), alignment::Horizontal::Left);
        assert_eq!(vertical_alignment(&surface), alignment::Vertical::Bottom);

        let surface = Surface::default();
        assert_eq!(horizontal_alignment(&surface), alignment::Horizontal::Right);
        assert_eq!(vertical_alignment(&surface), alignment::Vertical::Top);
    }

    #[test]
    fn dismiss_button_is_transparent_at_rest() {
        let style = dismiss_button_style(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
    }
}
