// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is a pure state value: it knows its phase and the
//! instants at which it moves to the next one, but never reads the clock
//! after creation. The [`Center`](super::Center) drives it with explicit
//! `now` instants so lifecycles can be tested without a window.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Duration of the slide/fade-in animation.
pub const ENTER_TRANSITION: Duration = Duration::from_millis(500);

/// Time from creation until the exit animation starts.
pub const DWELL: Duration = Duration::from_millis(4000);

/// Duration of the slide/fade-out animation.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(500);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects the styling of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Neutral or success update.
    #[default]
    Info,
    /// Error or critical outcome notice.
    Alert,
}

impl Kind {
    /// Returns the background color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Info => palette::INFO_500,
            Kind::Alert => palette::ALERT_500,
        }
    }
}

/// Lifecycle stage of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Exiting,
    Removed,
}

/// A phase change performed by the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub id: NotificationId,
    pub from: Phase,
    pub to: Phase,
    /// Instant the new phase began.
    pub at: Instant,
}

/// A short-lived message shown as a toast.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    phase: Phase,
    created_at: Instant,
    phase_since: Instant,
}

impl Notification {
    /// Creates a notification in the `Entering` phase, stamped `created_at`.
    pub fn new(kind: Kind, message: impl Into<String>, created_at: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            phase: Phase::Entering,
            created_at,
            phase_since: created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns when the current phase began.
    #[must_use]
    pub fn phase_since(&self) -> Instant {
        self.phase_since
    }

    /// Returns the next phase and the instant it is due, or `None` once removed.
    ///
    /// The dwell deadline is measured from creation, not from the end of the
    /// enter animation.
    #[must_use]
    pub fn next_deadline(&self) -> Option<(Phase, Instant)> {
        match self.phase {
            Phase::Entering => Some((Phase::Visible, self.created_at + ENTER_TRANSITION)),
            Phase::Visible => Some((
                Phase::Exiting,
                (self.created_at + DWELL).max(self.phase_since),
            )),
            Phase::Exiting => Some((Phase::Removed, self.phase_since + EXIT_TRANSITION)),
            Phase::Removed => None,
        }
    }

    /// Performs every transition due at `now`, one phase at a time.
    pub fn advance(&mut self, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        while let Some((next, due)) = self.next_deadline() {
            if due > now {
                break;
            }
            transitions.push(self.enter_phase(next, due));
        }
        transitions
    }

    /// Starts the exit animation at `now`, passing through `Visible` first
    /// when still entering. Returns no transitions once exiting or removed.
    pub fn begin_exit(&mut self, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        if self.phase == Phase::Entering {
            transitions.push(self.enter_phase(Phase::Visible, now));
        }
        if self.phase == Phase::Visible {
            transitions.push(self.enter_phase(Phase::Exiting, now));
        }
        transitions
    }

    /// Progress of the current animation in `[0, 1]`.
    ///
    /// `Entering` ramps up, `Exiting` ramps down towards zero visibility,
    /// `Visible` is fully shown and `Removed` fully hidden.
    #[must_use]
    pub fn visibility(&self, now: Instant) -> f32 {
        let ratio = |span: Duration| {
            let elapsed = now.saturating_duration_since(self.phase_since);
            (elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
        };
        match self.phase {
            Phase::Entering => ratio(ENTER_TRANSITION),
            Phase::Visible => 1.0,
            Phase::Exiting => 1.0 - ratio(EXIT_TRANSITION),
            Phase::Removed => 0.0,
        }
    }

    fn enter_phase(&mut self, next: Phase, at: Instant) -> Transition {
        let transition = Transition {
            id: self.id,
            from: self.phase,
            to: next,
            at,
        };
        self.phase = next;
        self.phase_since = at;
        transition
    }
}
