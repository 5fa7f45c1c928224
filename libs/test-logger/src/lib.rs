//! Logger for tests.
//!
//! Provides an `rstest` fixture that installs a tracing subscriber once per test binary.

use rstest::fixture;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "shamir_sharing=debug,share_tool=debug";

/// Marker proving the subscriber has been installed.
pub struct Tracing;

/// Installs a subscriber writing to the test output, filtered by `RUST_LOG`.
#[fixture]
#[once]
pub fn tracing() -> Tracing {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer().with_test_writer();

    // A global subscriber may already be set.
    let _ = tracing_subscriber::registry().with(filter_layer).with(fmt_layer).try_init();

    Tracing
}
