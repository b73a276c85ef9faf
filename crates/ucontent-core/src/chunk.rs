//! Kind-tagged buffers.
//!
//! A [`Chunk`] is a piece of already-produced content carrying a declared
//! [`ChunkKind`]. The kind decides how the chunk is emitted when it is interpolated
//! into a text slot:
//!
//! | kind   | emitted as                      |
//! |--------|---------------------------------|
//! | `Html` | body, verbatim                  |
//! | `Raw`  | body, verbatim                  |
//! | `Css`  | `min()` of the body, verbatim   |
//! | `Js`   | `min()` of the body, verbatim   |
//!
//! Rendering a template produces an `Html` chunk, which is how nested templates
//! pass through their parent without being escaped twice.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::UcontentError;

/// Declared content kind of a [`Chunk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// Markup produced by rendering a template.
    Html,
    /// Caller-vouched literal content, never transformed.
    Raw,
    /// A stylesheet that is minified before emission.
    Css,
    /// A script that is minified before emission.
    Js,
}

impl ChunkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Raw => "raw",
            Self::Css => "css",
            Self::Js => "js",
        }
    }
}

impl FromStr for ChunkKind {
    type Err = UcontentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "raw" => Ok(Self::Raw),
            "css" => Ok(Self::Css),
            "js" => Ok(Self::Js),
            other => Err(UcontentError::UnknownKind(other.to_string())),
        }
    }
}

/// Minification routine attached to a chunk.
///
/// Real CSS, JS and HTML minifiers live outside this crate; they plug in here.
pub trait Minifier: Send + Sync {
    fn minify(&self, kind: ChunkKind, source: &str) -> String;
}

/// Default minifier: strips leading and trailing whitespace only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl Minifier for Verbatim {
    fn minify(&self, _kind: ChunkKind, source: &str) -> String {
        source.trim().to_string()
    }
}

/// A kind-tagged buffer.
#[derive(Clone)]
pub struct Chunk {
    kind: ChunkKind,
    body: String,
    minifier: Arc<dyn Minifier>,
}

impl Chunk {
    pub fn new(kind: ChunkKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
            minifier: Arc::new(Verbatim),
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self::new(ChunkKind::Html, body)
    }

    pub fn raw(body: impl Into<String>) -> Self {
        Self::new(ChunkKind::Raw, body)
    }

    pub fn css(body: impl Into<String>) -> Self {
        Self::new(ChunkKind::Css, body)
    }

    pub fn js(body: impl Into<String>) -> Self {
        Self::new(ChunkKind::Js, body)
    }

    /// Replace the minification routine used by [`Chunk::min`].
    pub fn with_minifier(mut self, minifier: Arc<dyn Minifier>) -> Self {
        self.minifier = minifier;
        self
    }

    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    /// The verbatim body.
    pub fn as_str(&self) -> &str {
        &self.body
    }

    pub fn into_string(self) -> String {
        self.body
    }

    /// Minified form of the body. `Raw` chunks are returned unchanged.
    pub fn min(&self) -> String {
        match self.kind {
            ChunkKind::Raw => self.body.clone(),
            kind => self.minifier.minify(kind, &self.body),
        }
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk")
            .field("kind", &self.kind)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.body == other.body
    }
}
