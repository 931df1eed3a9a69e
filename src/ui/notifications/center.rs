// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`NotificationCenter`] is the single sink every component reports to.
//! It is constructed once at startup and handed to the controllers by
//! `&mut` reference; all mutations happen on the application update loop,
//! so inserts and removals are never interleaved.

use super::notification::{Kind, Notification, NotificationId, Phase, Transition};
use super::surface::Surface;
use crate::error::Result;
use std::time::Instant;

/// Messages emitted by the toast view.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button of a toast was pressed.
    Dismiss(NotificationId),
}

/// Owns the toast surface and every active notification.
#[derive(Debug)]
pub struct NotificationCenter {
    requested_surface: Surface,
    surface: Option<Surface>,
    /// Active notifications in insertion order (newest last).
    active: Vec<Notification>,
    /// Instant of the latest tick, used by the view for animation progress.
    now: Instant,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Surface::default())
    }
}

impl NotificationCenter {
    /// Creates a center that will mount `surface` when initialized.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            requested_surface: surface,
            surface: None,
            active: Vec::new(),
            now: Instant::now(),
        }
    }

    /// Sets up the rendering surface. Calling it again is a no-op.
    ///
    /// Fails with [`Error::Initialization`](crate::error::Error::Initialization)
    /// when the requested surface cannot be laid out.
    pub fn initialize(&mut self) -> Result<()> {
        if self.surface.is_some() {
            return Ok(());
        }
        self.requested_surface.validate()?;
        self.surface = Some(self.requested_surface);
        tracing::debug!(anchor = ?self.requested_surface.anchor(), "toast surface mounted");
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.surface.is_some()
    }

    /// Returns the mounted surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Shows `message` as a new toast.
    ///
    /// Every call creates an independent notification; identical messages
    /// are neither merged nor deduplicated. Mounts the default surface when
    /// [`initialize`](Self::initialize) was never called or failed.
    pub fn notify(&mut self, message: impl Into<String>, kind: Kind) {
        if self.surface.is_none() && self.initialize().is_err() {
            tracing::warn!("requested toast surface is invalid, using the default one");
            self.surface = Some(Surface::default());
        }

        let notification = Notification::new(kind, message, Instant::now());
        match kind {
            Kind::Alert => {
                tracing::warn!(id = ?notification.id(), message = notification.message(), "alert shown");
            }
            Kind::Info => {
                tracing::debug!(id = ?notification.id(), message = notification.message(), "info shown");
            }
        }
        self.active.push(notification);
    }

    /// Advances every notification to `now` and discards the removed ones.
    ///
    /// Returns the transitions performed, in order.
    pub fn tick(&mut self, now: Instant) -> Vec<Transition> {
        self.now = self.now.max(now);

        let mut transitions = Vec::new();
        for notification in &mut self.active {
            transitions.extend(notification.advance(now));
        }
        self.discard_removed();

        for transition in &transitions {
            tracing::trace!(id = ?transition.id, from = ?transition.from, to = ?transition.to, "toast phase");
        }
        transitions
    }

    /// Starts the exit animation of a notification ahead of its dwell deadline.
    ///
    /// Returns `false` if the notification is unknown or already leaving.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.now = self.now.max(now);
        self.active
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| !n.begin_exit(now).is_empty())
    }

    /// Drops a notification immediately, skipping its exit animation.
    ///
    /// Returns `false` if it was already removed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.active.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.active.remove(pos);
        true
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    /// Returns the active notifications, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Whether any toast is mid-animation and needs frequent redraws.
    #[must_use]
    pub fn needs_animation_frames(&self) -> bool {
        self.active
            .iter()
            .any(|n| matches!(n.phase(), Phase::Entering | Phase::Exiting))
    }

    /// Instant of the latest tick.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    fn discard_removed(&mut self) {
        self.active.retain(|n| n.phase() != Phase::Removed);
    }
}
