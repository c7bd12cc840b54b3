//! # Pattern Gallery
//!
//! Three small, independent examples of classic design patterns.
//!
//! ## Patterns Covered
//!
//! 1. **Builder** ([`path_builder`])
//!    - A path built from chained `up`/`down`/`left`/`right` calls
//!    - Frozen once `end` is reached
//!
//! 2. **Decorator** ([`saver`])
//!    - A session saver extended with cookie and file layers
//!    - Layers compose by ownership, not inheritance
//!
//! 3. **Strategy** ([`hasher`])
//!    - One hasher, MD5 / SHA-256 / Whirlpool strategies swapped at runtime
//!    - Hashing without a strategy is an error, not a crash
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin builder
//! cargo run --bin decorator
//! cargo run --bin strategy
//!
//! # All three, optionally driven by a TOML file
//! cargo run --bin patterns -- demo.toml
//! RUST_LOG=debug cargo run --bin patterns
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod hasher;
pub mod notify;
pub mod path_builder;
pub mod saver;

pub use config::DemoConfig;
pub use error::{Error, Result};
pub use hasher::{Algorithm, Encrypter, Hasher};
pub use notify::{Console, Notify, Recorder};
pub use path_builder::{PathBuilder, Step};
pub use saver::{InCookieSaver, InFileSaver, InSessionSaver, ItemsSaver, SaveRequest, SaverLayer};

/// Sends diagnostics to stderr, filtered by `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
