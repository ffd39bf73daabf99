//! `{% oneline %}` block: collapse the rendered body onto one line.

use super::BlockExtension;

/// Removes every whitespace run - spaces, tabs, newlines - from the
/// rendered output of its block, reinserting no separators. Variables
/// inside the block are substituted before stripping; whitespace outside
/// the block markers is untouched.
pub struct Oneline;

impl BlockExtension for Oneline {
    fn name(&self) -> &'static str {
        "oneline"
    }

    fn transform(&self, rendered: &str, _line: usize) -> String {
        rendered.split_whitespace().collect()
    }
}
