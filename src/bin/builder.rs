//! Builder: a path assembled from chained steps.
//!
//! Run with: cargo run --bin builder

use pattern_gallery::PathBuilder;

fn main() {
    pattern_gallery::init_logging();

    // The trailing `left()` comes after `end()` and is dropped.
    let path = PathBuilder::new()
        .up()
        .up()
        .left()
        .up()
        .right()
        .end()
        .left();

    print!("{path}");
}
