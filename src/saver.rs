//! Decorator: a session saver extended with cookie and file layers.
//!
//! Each decorator owns the saver it wraps, delegates to it first and then adds
//! its own notification, so output runs from the innermost saver outwards.

use crate::error::Error;
use crate::notify::Notify;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Key-value payload handed through the saver chain untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SaveRequest(BTreeMap<String, String>);

impl SaveRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SaveRequest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

pub trait ItemsSaver {
    fn save_items(&self, data: &SaveRequest, out: &dyn Notify);
}

impl<S: ItemsSaver + ?Sized> ItemsSaver for Box<S> {
    fn save_items(&self, data: &SaveRequest, out: &dyn Notify) {
        (**self).save_items(data, out);
    }
}

/// The original saver everything else builds on.
#[derive(Debug, Clone, Copy, Default)]
pub struct InSessionSaver;

impl ItemsSaver for InSessionSaver {
    fn save_items(&self, data: &SaveRequest, out: &dyn Notify) {
        tracing::debug!(keys = data.len(), "saving to session");
        out.line("Saving data in the Session");
    }
}

#[derive(Debug, Clone)]
pub struct InCookieSaver<S> {
    inner: S,
}

impl<S: ItemsSaver> InCookieSaver<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ItemsSaver> ItemsSaver for InCookieSaver<S> {
    fn save_items(&self, data: &SaveRequest, out: &dyn Notify) {
        self.inner.save_items(data, out);
        out.line("... Cookies");
    }
}

#[derive(Debug, Clone)]
pub struct InFileSaver<S> {
    inner: S,
}

impl<S: ItemsSaver> InFileSaver<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ItemsSaver> ItemsSaver for InFileSaver<S> {
    fn save_items(&self, data: &SaveRequest, out: &dyn Notify) {
        self.inner.save_items(data, out);
        out.line("... to File");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaverLayer {
    Cookie,
    File,
}

impl SaverLayer {
    fn wrap(self, inner: Box<dyn ItemsSaver>) -> Box<dyn ItemsSaver> {
        match self {
            SaverLayer::Cookie => Box::new(InCookieSaver::new(inner)),
            SaverLayer::File => Box::new(InFileSaver::new(inner)),
        }
    }
}

impl FromStr for SaverLayer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cookie" => Ok(SaverLayer::Cookie),
            "file" => Ok(SaverLayer::File),
            _ => Err(Error::UnknownLayer(s.to_string())),
        }
    }
}

/// Wraps a session saver in `layers`, first entry innermost.
pub fn layered(layers: &[SaverLayer]) -> Box<dyn ItemsSaver> {
    tracing::debug!(?layers, "building saver chain");
    let base: Box<dyn ItemsSaver> = Box::new(InSessionSaver);
    layers.iter().fold(base, |saver, layer| layer.wrap(saver))
}
