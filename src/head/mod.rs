//! Head element model and section ordering.
//!
//! Provides pure data structures for `<head>` markup generation. Template
//! splicing is handled by `inject/`.

mod rules;

pub use rules::{RULES, Rule, compose, section_elements};

use std::fmt;

/// Output sections, in emission order.
///
/// Section order defines final output order and must never change:
/// general, basic, custom (external generator), social media, author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    General,
    Basic,
    Custom,
    SocialMedia,
    Author,
}

impl Section {
    pub const ORDER: [Self; 5] = [
        Self::General,
        Self::Basic,
        Self::Custom,
        Self::SocialMedia,
        Self::Author,
    ];
}

/// Markup tag kind of a head element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Meta,
    Link,
    Title,
}

impl Tag {
    fn as_str(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Link => "link",
            Self::Title => "title",
        }
    }
}

/// One semantic head element: tag kind plus ordered attributes.
///
/// Attributes keep insertion order so output is reproducible. Values are
/// copied verbatim from configuration - no HTML escaping is applied.
/// Rendering uses single-quoted attributes; the injector normalizes the
/// whole block to double quotes in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadElement {
    pub tag: Tag,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
}

impl HeadElement {
    pub fn meta() -> Self {
        Self {
            tag: Tag::Meta,
            attrs: Vec::new(),
            text: None,
        }
    }

    pub fn link() -> Self {
        Self {
            tag: Tag::Link,
            attrs: Vec::new(),
            text: None,
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self {
            tag: Tag::Title,
            attrs: Vec::new(),
            text: Some(text.into()),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }
}

impl fmt::Display for HeadElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.text {
            return write!(f, "<{tag}>{text}</{tag}>", tag = self.tag.as_str());
        }
        write!(f, "<{}", self.tag.as_str())?;
        for (name, value) in &self.attrs {
            write!(f, " {name}='{value}'")?;
        }
        write!(f, " />")
    }
}
