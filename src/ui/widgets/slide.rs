// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that shifts its content horizontally without resizing it.
//!
//! The wrapper keeps the size of its content and draws the content moved by
//! `offset`, clipped to its own bounds. The content is laid out with the
//! unshifted limits, so it keeps its width while it slides out of view.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size};

/// Content displaced horizontally inside a clipping frame of its own size.
pub struct Slide<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: f32,
}

impl<'a, Message, Theme, Renderer> Slide<'a, Message, Theme, Renderer> {
    /// Wraps `content`, shifted right by `offset` (left when negative).
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, offset: f32) -> Self {
        Self {
            content: content.into(),
            offset,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Slide<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits);
        let size = content.size();

        layout::Node::with_children(size, vec![content.move_to(Point::new(self.offset, 0.0))])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(visible) = bounds.intersection(viewport) else {
            return;
        };
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        renderer.with_layer(visible, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                visible_cursor(cursor, bounds),
                &visible,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content_layout,
            visible_cursor(cursor, bounds),
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();
        let Some(content_layout) = layout.children().next() else {
            return mouse::Interaction::default();
        };

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            content_layout,
            visible_cursor(cursor, bounds),
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Slide<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slide: Slide<'a, Message, Theme, Renderer>) -> Self {
        Self::new(slide)
    }
}

/// Helper function to create a sliding wrapper.
pub fn slide<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    offset: f32,
) -> Slide<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Slide::new(content, offset)
}

/// Hides the cursor from the content when it is outside the visible frame.
fn visible_cursor(cursor: mouse::Cursor, bounds: Rectangle) -> mouse::Cursor {
    if cursor.is_over(bounds) {
        cursor
    } else {
        mouse::Cursor::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::{Container, Space};
    use iced::Theme;

    fn lay_out(offset: f32) -> layout::Node {
        let card = Container::<(), Theme, ()>::new(Space::new().width(Length::Fill))
            .width(Length::Fixed(200.0))
            .height(Length::Fixed(40.0));
        let mut element: Element<'_, (), Theme, ()> = slide(card, offset).into();
        let mut tree = widget::Tree::new(element.as_widget());
        let limits = layout::Limits::new(Size::ZERO, Size::new(800.0, 600.0));
        element.as_widget_mut().layout(&mut tree, &(), &limits)
    }

    #[test]
    fn content_keeps_its_size_while_shifted() {
        for offset in [0.0, 50.0, 200.0, -120.0] {
            let node = lay_out(offset);
            let content = node.children()[0].bounds();

            assert_eq!(node.size(), Size::new(200.0, 40.0));
            assert_eq!(content.width, 200.0);
            assert_eq!(content.height, 40.0);
            assert_eq!(content.x, offset);
        }
    }

    #[test]
    fn cursor_outside_frame_is_hidden_from_content() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(100.0, 20.0));
        let inside = mouse::Cursor::Available(Point::new(10.0, 10.0));
        let outside = mouse::Cursor::Available(Point::new(150.0, 10.0));

        assert_eq!(visible_cursor(inside, bounds), inside);
        assert_eq!(visible_cursor(outside, bounds), mouse::Cursor::Unavailable);
    }
}
