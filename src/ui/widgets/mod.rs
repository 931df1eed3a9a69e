// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod slide;
