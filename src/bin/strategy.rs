//! Strategy: switching hashing algorithms at runtime.
//!
//! Run with: cargo run --bin strategy

use pattern_gallery::hasher::{Md5Encrypter, Sha256Encrypter, WhirlpoolEncrypter};
use pattern_gallery::{Console, Hasher, Result};

fn main() -> Result<()> {
    pattern_gallery::init_logging();

    let out = Console::default();
    let mut hasher = Hasher::new();

    hasher.set_encrypter(Md5Encrypter);
    hasher.hash("123", &out)?;

    hasher.set_encrypter(Sha256Encrypter);
    hasher.hash("123", &out)?;

    hasher.set_encrypter(WhirlpoolEncrypter);
    hasher.hash("123", &out)?;

    Ok(())
}
