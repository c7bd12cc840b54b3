//! Runs all three patterns, optionally configured from a TOML file.
//!
//! Run with: cargo run --bin patterns -- [config.toml]

use pattern_gallery::{demo, Console, DemoConfig, Result};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    pattern_gallery::init_logging();

    let config = match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => DemoConfig::load(&path)?,
        None => DemoConfig::default(),
    };

    let out = Console::new(config.output.color);
    demo::run_all(&config, &out)
}
