// SPDX-License-Identifier: MPL-2.0
//! Logging initialization.
//!
//! - Filtering rules come from `RUST_LOG`, defaulting to `info`.
//! - Events are written to stderr so stdout stays free for gallery output.
//! - Library code only emits `tracing` events; installing a subscriber is left
//!   to the binary.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global `tracing` subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging() -> bool {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with_span_events(FmtSpan::NONE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
