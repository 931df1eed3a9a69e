// SPDX-License-Identifier: MPL-2.0
//! Placement of the toast layer inside the window.

use crate::config::{NotificationsConfig, DEFAULT_TOAST_MARGIN};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Window corner the toast stack is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Anchor {
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Anchor::TopRight | Anchor::TopLeft)
    }

    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Anchor::TopRight | Anchor::BottomRight)
    }
}

/// The fixed-position layer toasts are rendered into.
///
/// It sits above all other content and only occupies the bounds of the
/// toasts themselves, so the rest of the window stays interactive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    anchor: Anchor,
    margin: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            anchor: Anchor::default(),
            margin: DEFAULT_TOAST_MARGIN,
        }
    }
}

impl Surface {
    #[must_use]
    pub fn new(anchor: Anchor, margin: f32) -> Self {
        Self { anchor, margin }
    }

    /// Builds the surface described by the `[notifications]` config section.
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self {
            anchor: config.anchor.unwrap_or_default(),
            margin: config.margin.unwrap_or(DEFAULT_TOAST_MARGIN),
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Checks that the surface can be laid out.
    pub fn validate(&self) -> Result<()> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::Initialization(format!(
                "toast margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_is_top_right() {
        let surface = Surface::default();
        assert_eq!(surface.anchor(), Anchor::TopRight);
        assert!(surface.anchor().is_top());
        assert!(surface.anchor().is_right());
        assert!(surface.validate().is_ok());
    }

    #[test]
    fn negative_or_nan_margin_is_rejected() {
        assert!(matches!(
            Surface::new(Anchor::TopLeft, -1.0).validate(),
            Err(Error::Initialization(_))
        ));
        assert!(Surface::new(Anchor::TopLeft, f32::NAN).validate().is_err());
    }

    #[test]
    fn from_config_uses_section_values() {
        let config = NotificationsConfig {
            anchor: Some(Anchor::BottomLeft),
            margin: Some(4.0),
        };
        let surface = Surface::from_config(&config);
        assert_eq!(surface, Surface::new(Anchor::BottomLeft, 4.0));
        assert!(!surface.anchor().is_top());
        assert!(!surface.anchor().is_right());
    }
}
