//! Strategy: one hasher, interchangeable digest algorithms.
//!
//! [`Hasher`] only knows the [`Encrypter`] interface. Which algorithm runs is
//! decided by whatever strategy was installed last, and can change between
//! calls.

use crate::error::{Error, Result};
use crate::notify::Notify;
use md5::Md5;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use whirlpool::Whirlpool;

pub trait Encrypter {
    /// Lower-case hex digest of `input`.
    fn encrypt(&self, input: &str) -> String;
}

fn hex_digest<D: Digest>(input: &str) -> String {
    hex::encode(D::digest(input.as_bytes()))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Encrypter;

impl Encrypter for Md5Encrypter {
    fn encrypt(&self, input: &str) -> String {
        hex_digest::<Md5>(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Encrypter;

impl Encrypter for Sha256Encrypter {
    fn encrypt(&self, input: &str) -> String {
        hex_digest::<Sha256>(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhirlpoolEncrypter;

impl Encrypter for WhirlpoolEncrypter {
    fn encrypt(&self, input: &str) -> String {
        hex_digest::<Whirlpool>(input)
    }
}

/// The algorithms a [`Hasher`] can be switched to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Md5,
    Sha256,
    Whirlpool,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha256, Algorithm::Whirlpool];

    pub fn encrypter(self) -> Box<dyn Encrypter> {
        match self {
            Algorithm::Md5 => Box::new(Md5Encrypter),
            Algorithm::Sha256 => Box::new(Sha256Encrypter),
            Algorithm::Whirlpool => Box::new(WhirlpoolEncrypter),
        }
    }

    /// Digest length in hex characters.
    pub fn hex_len(self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha256 => 64,
            Algorithm::Whirlpool => 128,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha256 => "sha256",
            Algorithm::Whirlpool => "whirlpool",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            "whirlpool" => Ok(Algorithm::Whirlpool),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Swapping strategies takes `&mut self`, so a swap can never overlap a
/// `hash` call on the same hasher.
#[derive(Default)]
pub struct Hasher {
    encrypter: Option<Box<dyn Encrypter>>,
}

impl Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encrypter(encrypter: impl Encrypter + 'static) -> Self {
        let mut hasher = Self::new();
        hasher.set_encrypter(encrypter);
        hasher
    }

    pub fn set_encrypter(&mut self, encrypter: impl Encrypter + 'static) {
        self.encrypter = Some(Box::new(encrypter));
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        tracing::debug!(%algorithm, "switching hash strategy");
        self.encrypter = Some(algorithm.encrypter());
    }

    pub fn has_encrypter(&self) -> bool {
        self.encrypter.is_some()
    }

    /// Hashes `input` with the current strategy, reporting progress to `out`.
    ///
    /// Fails with [`Error::NoStrategy`] before emitting anything when no
    /// strategy has been installed.
    pub fn hash(&self, input: &str, out: &dyn Notify) -> Result<String> {
        let encrypter = self.encrypter.as_ref().ok_or(Error::NoStrategy)?;
        out.line(&format!("Encrypting {input}..."));
        let digest = encrypter.encrypt(input);
        out.line(&digest);
        Ok(digest)
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("configured", &self.has_encrypter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Recorder;

    const MD5_123: &str = "202cb962ac59075b964b07152d234b70";
    const SHA256_123: &str = "a665a45920422f9d417e4867efdc4fb8a04a1f3fff1fa07e998e86f7f7a27ae3";

    #[test]
    fn known_digests() {
        assert_eq!(Md5Encrypter.encrypt("123"), MD5_123);
        assert_eq!(Sha256Encrypter.encrypt("123"), SHA256_123);
        assert_eq!(Md5Encrypter.encrypt(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            Sha256Encrypter.encrypt("hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn digest_lengths_match_algorithm() {
        for algorithm in Algorithm::ALL {
            let digest = algorithm.encrypter().encrypt("123");
            assert_eq!(digest.len(), algorithm.hex_len(), "{algorithm}");
            assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn unconfigured_hasher_fails_silently() {
        let out = Recorder::new();
        let hasher = Hasher::new();
        assert!(matches!(hasher.hash("123", &out), Err(Error::NoStrategy)));
        assert!(out.is_empty());
    }

    #[test]
    fn hash_reports_input_and_digest() {
        let out = Recorder::new();
        let hasher = Hasher::with_encrypter(Md5Encrypter);
        let digest = hasher.hash("123", &out).unwrap();
        assert_eq!(digest, MD5_123);
        assert_eq!(out.lines(), vec!["Encrypting 123...", MD5_123]);
    }

    #[test]
    fn hash_is_deterministic() {
        let out = Recorder::new();
        let hasher = Hasher::with_encrypter(WhirlpoolEncrypter);
        let first = hasher.hash("same input", &out).unwrap();
        let second = hasher.hash("same input", &out).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn swapping_only_affects_later_calls() {
        let out = Recorder::new();
        let mut hasher = Hasher::new();
        hasher.set_algorithm(Algorithm::Md5);
        let before = hasher.hash("123", &out).unwrap();

        hasher.set_encrypter(Sha256Encrypter);
        let after = hasher.hash("123", &out).unwrap();

        assert_eq!(before, MD5_123);
        assert_eq!(after, SHA256_123);
    }

    #[test]
    fn custom_strategies_plug_in() {
        struct Reverse;
        impl Encrypter for Reverse {
            fn encrypt(&self, input: &str) -> String {
                input.chars().rev().collect()
            }
        }

        let out = Recorder::new();
        let hasher = Hasher::with_encrypter(Reverse);
        assert_eq!(hasher.hash("abc", &out).unwrap(), "cba");
    }

    #[test]
    fn parses_algorithm_names() {
        assert_eq!("SHA256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
        assert_eq!("whirlpool".parse::<Algorithm>().unwrap(), Algorithm::Whirlpool);
        assert!(matches!(
            "crc32".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm(name)) if name == "crc32"
        ));
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }
}
