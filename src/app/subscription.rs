// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use crate::ui::notifications::NotificationCenter;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick interval while a toast slides in or out.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick interval while toasts only wait for their dwell deadline.
pub const DWELL_TICK: Duration = Duration::from_millis(100);

/// Routes file drops and close requests to the application.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    })
}

/// Interval at which the notification center needs ticks, if any.
pub fn tick_interval(center: &NotificationCenter) -> Option<Duration> {
    if center.needs_animation_frames() {
        Some(ANIMATION_TICK)
    } else if center.has_notifications() {
        Some(DWELL_TICK)
    } else {
        None
    }
}

/// Drives toast lifecycles; idle when no toast is shown.
pub fn create_tick_subscription(center: &NotificationCenter) -> Subscription<Message> {
    match tick_interval(center) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Kind, DWELL, ENTER_TRANSITION};
    use std::time::Instant;

    #[test]
    fn idle_center_needs_no_ticks() {
        assert_eq!(tick_interval(&NotificationCenter::default()), None);
    }

    #[test]
    fn interval_follows_toast_phase() {
        let mut center = NotificationCenter::default();
        center.notify("hello", Kind::Info);
        assert_eq!(tick_interval(&center), Some(ANIMATION_TICK));

        let created = center.active().next().map(|n| n.created_at()).expect("toast");
        center.tick(created + ENTER_TRANSITION);
        assert_eq!(tick_interval(&center), Some(DWELL_TICK));

        center.tick(created + DWELL);
        assert_eq!(tick_interval(&center), Some(ANIMATION_TICK));
    }

    #[test]
    fn interval_stops_after_last_toast_is_removed() {
        let mut center = NotificationCenter::default();
        center.notify("bye", Kind::Alert);
        center.tick(Instant::now() + Duration::from_secs(10));
        assert_eq!(tick_interval(&center), None);
    }
}
