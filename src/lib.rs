// SPDX-License-Identifier: MPL-2.0
//! `accident_uploader` is a desktop client that sends a photo of a road
//! accident to a detection server and reports progress with toasts.
//!
//! The crate is split into the Iced application shell ([`app`]), the upload
//! port ([`application`]) with its HTTP adapter ([`infrastructure`]), and the
//! UI building blocks ([`ui`]): the notification center, the upload
//! controllers and their views.

pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;
