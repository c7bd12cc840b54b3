//! The drivers behind the binaries, one per pattern.

use crate::config::{DemoConfig, HasherConfig, PathConfig, SaverConfig};
use crate::error::Result;
use crate::hasher::Hasher;
use crate::notify::Notify;
use crate::path_builder::PathBuilder;
use crate::saver::{layered, ItemsSaver};

/// Builds the configured path and prints its rendering.
pub fn run_builder(config: &PathConfig, out: &dyn Notify) -> String {
    let mut path = PathBuilder::new();
    path.extend(config.steps.iter().copied());
    let rendered = path.render();
    out.line(rendered.trim_end());
    rendered
}

pub fn run_decorator(config: &SaverConfig, out: &dyn Notify) {
    layered(&config.layers).save_items(&config.data, out);
}

/// Hashes the same input once per configured algorithm, switching the
/// strategy between calls. Returns the digests in order.
pub fn run_strategy(config: &HasherConfig, out: &dyn Notify) -> Result<Vec<String>> {
    let mut hasher = Hasher::new();
    config
        .algorithms
        .iter()
        .map(|&algorithm| {
            hasher.set_algorithm(algorithm);
            hasher.hash(&config.input, out)
        })
        .collect()
}

pub fn run_all(config: &DemoConfig, out: &dyn Notify) -> Result<()> {
    out.heading("Builder");
    run_builder(&config.path, out);

    out.heading("Decorator");
    run_decorator(&config.saver, out);

    out.heading("Strategy");
    run_strategy(&config.hasher, out)?;
    Ok(())
}
