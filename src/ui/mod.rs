// SPDX-License-Identifier: MPL-2.0
//! User interface modules: the upload form, toasts and shared styling.

pub mod design_tokens;
pub mod notifications;
pub mod theming;
pub mod upload;
pub mod widgets;
