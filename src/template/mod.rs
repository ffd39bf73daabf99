//! Minimal template rendering layer with block extensions.
//!
//! Supports `{{ var }}` variable substitution and `{% name %}` ...
//! `{% endname %}` extension blocks. An extension follows a two-phase
//! contract: the parser consumes the token stream up to the matching end
//! marker into an opaque body node (remembering the source line), and at
//! render time the body is first fully rendered with the current variable
//! context, then handed to the extension's transform. Whitespace and
//! content outside a block are never affected by it.
//!
//! Nesting a block inside a block of the same name is rejected at parse
//! time rather than given ad-hoc semantics.

mod lexer;
mod oneline;
#[cfg(test)]
mod tests;

pub use oneline::Oneline;

use lexer::{Token, tokenize};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Variable context for one render pass.
pub type Context = FxHashMap<String, String>;

/// Template syntax errors, all carrying the source line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed variable tag on line {line}")]
    UnclosedVariable { line: usize },

    #[error("unclosed block tag on line {line}")]
    UnclosedBlockTag { line: usize },

    #[error("block '{name}' opened on line {line} is never closed")]
    UnclosedBlock { name: String, line: usize },

    #[error("unknown block '{name}' on line {line}")]
    UnknownBlock { name: String, line: usize },

    #[error("block '{name}' cannot be nested within itself (line {line})")]
    NestedBlock { name: String, line: usize },

    #[error("unexpected 'end{name}' on line {line}")]
    UnexpectedEnd { name: String, line: usize },
}

/// A block-level construct hosted by the engine.
pub trait BlockExtension {
    /// Tag name that triggers the extension.
    fn name(&self) -> &'static str;

    /// Transform the fully-rendered body of the block.
    ///
    /// `line` is the source line of the opening marker.
    fn transform(&self, rendered: &str, line: usize) -> String;
}

#[derive(Debug, PartialEq, Eq)]
enum Node {
    Text(String),
    Var(String),
    Block {
        name: String,
        body: Vec<Node>,
        line: usize,
    },
}

/// Template engine: registered extensions plus a render entry point.
#[derive(Default)]
pub struct Engine {
    extensions: Vec<Box<dyn BlockExtension>>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(mut self, extension: impl BlockExtension + 'static) -> Self {
        self.extensions.push(Box::new(extension));
        self
    }

    /// Render `source` against `context`. Absent variables render empty.
    pub fn render(&self, source: &str, context: &Context) -> Result<String, TemplateError> {
        let tokens = tokenize(source)?;
        let mut stream = tokens.into_iter().peekable();
        let nodes = self.parse_nodes(&mut stream, &mut Vec::new())?;
        Ok(self.render_nodes(&nodes, context))
    }

    fn is_registered(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| ext.name() == name)
    }

    /// Parse until the end marker matching the innermost entry of `open`,
    /// or until the stream is exhausted at top level.
    fn parse_nodes(
        &self,
        stream: &mut std::iter::Peekable<std::vec::IntoIter<Token>>,
        open: &mut Vec<(String, usize)>,
    ) -> Result<Vec<Node>, TemplateError> {
        let mut nodes = Vec::new();

        while let Some(token) = stream.peek() {
            match token {
                Token::BlockEnd { name, line } => {
                    let matches_open = open.last().is_some_and(|(n, _)| n == name);
                    if matches_open {
                        return Ok(nodes);
                    }
                    return Err(TemplateError::UnexpectedEnd {
                        name: name.clone(),
                        line: *line,
                    });
                }
                _ => match stream.next() {
                    Some(Token::Text(text)) => nodes.push(Node::Text(text)),
                    Some(Token::Var { name, .. }) => nodes.push(Node::Var(name)),
                    Some(Token::BlockStart { name, line }) => {
                        if !self.is_registered(&name) {
                            return Err(TemplateError::UnknownBlock { name, line });
                        }
                        if open.iter().any(|(n, _)| *n == name) {
                            return Err(TemplateError::NestedBlock { name, line });
                        }
                        open.push((name.clone(), line));
                        let body = self.parse_nodes(stream, open)?;
                        // Consume the end marker the recursive call stopped at
                        match stream.next() {
                            Some(Token::BlockEnd { .. }) => {}
                            _ => return Err(TemplateError::UnclosedBlock { name, line }),
                        }
                        open.pop();
                        nodes.push(Node::Block { name, body, line });
                    }
                    _ => unreachable!("peeked token disappeared"),
                },
            }
        }

        match open.last() {
            Some((name, line)) => Err(TemplateError::UnclosedBlock {
                name: name.clone(),
                line: *line,
            }),
            None => Ok(nodes),
        }
    }

    fn render_nodes(&self, nodes: &[Node], context: &Context) -> String {
        let mut output = String::new();
        for node in nodes {
            match node {
                Node::Text(text) => output.push_str(text),
                Node::Var(name) => {
                    if let Some(value) = context.get(name) {
                        output.push_str(value);
                    }
                }
                Node::Block { name, body, line } => {
                    let rendered = self.render_nodes(body, context);
                    let extension = self
                        .extensions
                        .iter()
                        .find(|ext| ext.name() == name)
                        .expect("parser only admits registered blocks");
                    output.push_str(&extension.transform(&rendered, *line));
                }
            }
        }
        output
    }
}
