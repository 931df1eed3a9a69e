// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! User-facing strings, including every toast message, are resolved through
//! Fluent bundles embedded in the binary. The locale is picked from the CLI,
//! then the config file, then the OS, falling back to `en-US`.

pub mod fluent;
