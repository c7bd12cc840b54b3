//! Decorator: extending the session saver with cookie and file storage.
//!
//! Run with: cargo run --bin decorator

use pattern_gallery::{Console, InCookieSaver, InFileSaver, InSessionSaver, ItemsSaver, SaveRequest};

fn main() {
    pattern_gallery::init_logging();

    let saver = InSessionSaver;
    let in_cookie = InCookieSaver::new(saver);
    let in_file = InFileSaver::new(in_cookie);

    let data: SaveRequest = [("key", "value")].into_iter().collect();
    in_file.save_items(&data, &Console::default());
}
