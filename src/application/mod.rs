// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Infrastructure implements application layer ports
//! - Presentation (the `ui` and `app` modules) depends on ports, never on adapters,
//!   except at startup where the concrete adapter is chosen

pub mod port;
