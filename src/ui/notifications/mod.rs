// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! without blocking interaction. Each one slides in, stays for a fixed
//! dwell time measured from creation, slides out and is discarded.
//!
//! # Components
//!
//! - [`notification`] - `Notification` state value with its phase machine
//! - [`center`] - `NotificationCenter` owning the surface and active list
//! - [`surface`] - placement of the toast layer
//! - [`toast`] - rendering of the toast layer
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Kind, NotificationCenter};
//!
//! let mut center = NotificationCenter::default();
//! center.initialize()?;
//! center.notify("File selected successfully!", Kind::Info);
//!
//! // On every timer tick
//! center.tick(Instant::now());
//!
//! // In the view function
//! let toast_layer = Toast::view_overlay(&center).map(Message::Notification);
//! ```

mod center;
pub mod notification;
mod surface;
mod toast;

pub use center::{Message as NotificationMessage, NotificationCenter};
pub use notification::{
    Kind, Notification, NotificationId, Phase, Transition, DWELL, ENTER_TRANSITION, EXIT_TRANSITION,
};
pub use surface::{Anchor, Surface};
pub use toast::Toast;
