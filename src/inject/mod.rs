//! Head injection into raw template text.
//!
//! Transforms a template document in two steps: the bare `<html>` root
//! marker gains a `lang` attribute when the configuration carries a
//! `language` key, and the first `$head$` placeholder is replaced with the
//! composed head elements. Both markers are optional; a missing marker
//! degrades to a diagnostic, never an error, and the document is still
//! returned. This module performs no I/O - reading and writing the
//! template is the caller's job.

#[cfg(test)]
mod tests;

use crate::{
    config::Meta,
    generator::{CustomElements, GeneratedFile},
    head::{self, HeadElement},
};
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;

/// Bare root-tag marker replaced by the language-attributed form.
pub const ROOT_MARKER: &str = "<html>";

/// Sentinel token marking the head injection point.
pub const PLACEHOLDER: &str = "$head$";

/// Comment line heading every injected block.
const BLOCK_HEADER: &str = "<!-- Custom head elements -->";

/// Advisory side-channel output of an injection call.
///
/// Diagnostics are for the operator only; they are never part of the
/// returned document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The attributed root tag that replaced the bare marker
    LangAttribute(String),
    /// `language` configured but no bare `<html>` marker found
    MissingRootTag,
    /// No `$head$` placeholder found; document left unmodified
    MissingPlaceholder,
    /// Element literals actually inserted, in output order
    InsertedElements(Vec<String>),
    /// Files reported by the external generator
    NewFiles(Vec<PathBuf>),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LangAttribute(tag) => write!(f, "html: {tag}"),
            Self::MissingRootTag => write!(
                f,
                "missing {}, cannot add lang attribute",
                ROOT_MARKER.cyan()
            ),
            Self::MissingPlaceholder => write!(
                f,
                "missing {}, cannot add custom elements",
                PLACEHOLDER.cyan()
            ),
            Self::InsertedElements(elements) => {
                write!(f, "{}", BLOCK_HEADER.dimmed())?;
                for element in elements {
                    write!(f, "\n{element}")?;
                }
                Ok(())
            }
            Self::NewFiles(paths) => {
                write!(f, "new files:")?;
                for path in paths {
                    write!(f, "\n{}", path.display())?;
                }
                Ok(())
            }
        }
    }
}

/// Result of a single injection call.
pub struct InjectOutcome {
    /// The full transformed document, always produced
    pub document: String,
    /// Files reported by the external generator (caller writes them)
    pub files: Vec<GeneratedFile>,
    /// Advisory diagnostics, in the order the steps ran
    pub diagnostics: Vec<Diagnostic>,
}

/// Inject composed head elements into `document`.
///
/// The external generator is invoked exactly once; its elements land in
/// the custom section, between basic and social media.
pub fn inject_head(
    document: &str,
    meta: &Meta,
    generator: &dyn CustomElements,
) -> InjectOutcome {
    let mut diagnostics = Vec::new();
    let mut text = document.to_owned();

    // Root-tag step
    if let Some(language) = meta.get_str("language") {
        if text.contains(ROOT_MARKER) {
            let attributed = format!("<html lang=\"{language}\">");
            text = text.replace(ROOT_MARKER, &attributed);
            diagnostics.push(Diagnostic::LangAttribute(attributed));
        } else {
            diagnostics.push(Diagnostic::MissingRootTag);
        }
    }

    // Placeholder step
    let Some(offset) = text.find(PLACEHOLDER) else {
        diagnostics.push(Diagnostic::MissingPlaceholder);
        return InjectOutcome {
            document: text,
            files: Vec::new(),
            diagnostics,
        };
    };

    let (custom, files) = generator.generate(meta);
    let elements = head::compose(meta, custom);

    let indent = indentation_before(&text, offset);
    let block = normalize_quotes(&render_block(&elements, indent));
    text.replace_range(offset..offset + PLACEHOLDER.len(), &block);

    diagnostics.push(Diagnostic::InsertedElements(
        elements.iter().map(ToString::to_string).collect(),
    ));
    if !files.is_empty() {
        diagnostics.push(Diagnostic::NewFiles(
            files.iter().map(|file| file.path.clone()).collect(),
        ));
    }

    InjectOutcome {
        document: text,
        files,
        diagnostics,
    }
}

/// Indentation context: the text between the last line break before the
/// placeholder and the placeholder itself.
fn indentation_before(text: &str, offset: usize) -> &str {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    &text[line_start..offset]
}

/// Serialize elements into the replacement block.
///
/// Every element line is re-prefixed with the indentation context and
/// followed by a single newline; the final newline is trimmed so the
/// block does not push the placeholder's successor text onto a blank line.
fn render_block(elements: &[HeadElement], indent: &str) -> String {
    let mut block = String::from(BLOCK_HEADER);
    block.push('\n');
    for element in elements {
        block.push_str(indent);
        block.push_str(&element.to_string());
        block.push('\n');
    }
    block.pop();
    block
}

/// Normalize the composition quote style to the output quote style.
///
/// Elements are composed with single-quoted attributes; output uses double
/// quotes. Idempotent by construction. This is an output-compatibility
/// rule, not escaping: values must not contain a literal double quote.
pub fn normalize_quotes(markup: &str) -> String {
    markup.replace('\'', "\"")
}
