//! External custom-element generation.
//!
//! The injector treats custom elements as an opaque collaborator: anything
//! implementing [`CustomElements`] can contribute head elements (placed
//! between the basic and social media sections) and report files it
//! produced. `Scaffold` is the built-in implementation generating
//! app-manifest artifacts; `NoCustomElements` opts out entirely.

mod scaffold;

pub use scaffold::Scaffold;

use crate::{config::Meta, head::HeadElement};
use std::path::PathBuf;

/// A file produced by a generator, as a descriptor only.
///
/// Generators never touch the filesystem; the CLI decides where and
/// whether to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Contributes additional head elements and supporting files.
///
/// Invoked exactly once per injection call.
pub trait CustomElements {
    fn generate(&self, meta: &Meta) -> (Vec<HeadElement>, Vec<GeneratedFile>);
}

/// Null generator: no custom elements, no files.
pub struct NoCustomElements;

impl CustomElements for NoCustomElements {
    fn generate(&self, _meta: &Meta) -> (Vec<HeadElement>, Vec<GeneratedFile>) {
        (Vec::new(), Vec::new())
    }
}
