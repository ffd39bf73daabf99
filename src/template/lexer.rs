//! Template tokenizer.
//!
//! Splits raw template source into text runs, `{{ var }}` variables and
//! `{% name %}` / `{% endname %}` block tags, tracking source lines for
//! diagnostics.

use super::TemplateError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Var { name: String, line: usize },
    BlockStart { name: String, line: usize },
    BlockEnd { name: String, line: usize },
}

const VAR_OPEN: &str = "{{";
const VAR_CLOSE: &str = "}}";
const TAG_OPEN: &str = "{%";
const TAG_CLOSE: &str = "%}";

pub fn tokenize(source: &str) -> Result<Vec<Token>, TemplateError> {
    let mut tokens = Vec::new();
    let mut rest = source;
    let mut line = 1;

    while !rest.is_empty() {
        let var = rest.find(VAR_OPEN);
        let tag = rest.find(TAG_OPEN);

        let Some(open) = min_offset(var, tag) else {
            tokens.push(Token::Text(rest.to_owned()));
            break;
        };

        if open > 0 {
            let text = &rest[..open];
            line += text.matches('\n').count();
            tokens.push(Token::Text(text.to_owned()));
        }
        rest = &rest[open..];

        if rest.starts_with(VAR_OPEN) {
            let Some(close) = rest.find(VAR_CLOSE) else {
                return Err(TemplateError::UnclosedVariable { line });
            };
            let name = rest[VAR_OPEN.len()..close].trim().to_owned();
            tokens.push(Token::Var { name, line });
            line += rest[..close].matches('\n').count();
            rest = &rest[close + VAR_CLOSE.len()..];
        } else {
            let Some(close) = rest.find(TAG_CLOSE) else {
                return Err(TemplateError::UnclosedBlockTag { line });
            };
            let tag = rest[TAG_OPEN.len()..close].trim().to_owned();
            tokens.push(match tag.strip_prefix("end") {
                Some(name) => Token::BlockEnd {
                    name: name.to_owned(),
                    line,
                },
                None => Token::BlockStart { name: tag, line },
            });
            line += rest[..close].matches('\n').count();
            rest = &rest[close + TAG_CLOSE.len()..];
        }
    }

    Ok(tokens)
}

fn min_offset(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (offset, None) | (None, offset) => offset,
    }
}
