// SPDX-License-Identifier: MPL-2.0
//! Diagnostic logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "accident_uploader=info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber writing to stderr.
///
/// Calling it again is harmless; only the first subscriber is kept.
pub fn init_logging() {
    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter())
        .try_init();

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}
