use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no hashing strategy configured; call set_encrypter first")]
    NoStrategy,

    #[error("unknown hash algorithm '{0}' (expected md5, sha256 or whirlpool)")]
    UnknownAlgorithm(String),

    #[error("unknown path step '{0}'")]
    UnknownStep(String),

    #[error("unknown saver layer '{0}' (expected cookie or file)")]
    UnknownLayer(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
