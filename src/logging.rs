// SPDX-License-Identifier: PMPL-1.0-or-later

//! Subscriber setup for the command-line tool.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over `fallback`; `fallback` wins over [`DEFAULT_FILTER`].
/// Calling this twice is harmless: the second install is ignored.
pub fn init(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_FILTER)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
