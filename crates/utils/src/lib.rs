pub mod error;
pub mod settings;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Sets up the global `tracing` subscriber. The filter is read from `RUST_LOG`, defaulting to
/// `info`.
pub fn init_logging() {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();
}
