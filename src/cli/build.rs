//! Build command: render the template, inject head elements, write output.

use crate::{
    config::SiteConfig,
    generator::{NoCustomElements, Scaffold},
    inject::{Diagnostic, inject_head},
    log,
    template::{Context, Engine, Oneline},
};
use anyhow::{Context as _, Result};
use std::fs;

pub fn run(config: &SiteConfig, no_scaffold: bool) -> Result<()> {
    let template_path = config.template_path();
    let raw = fs::read_to_string(&template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))?;

    // Template pass: oneline blocks plus [meta] scalars as variables
    let engine = Engine::new().with_extension(Oneline);
    let mut context = Context::default();
    for (key, value) in config.meta.scalar_entries() {
        context.insert(key.to_owned(), value);
    }
    crate::debug!("build"; "template context carries {} variables", context.len());
    let rendered = engine
        .render(&raw, &context)
        .with_context(|| format!("failed to render template {}", template_path.display()))?;

    let outcome = if no_scaffold {
        inject_head(&rendered, &config.meta, &NoCustomElements)
    } else {
        inject_head(&rendered, &config.meta, &Scaffold)
    };

    for diagnostic in &outcome.diagnostics {
        match diagnostic {
            Diagnostic::MissingRootTag | Diagnostic::MissingPlaceholder => {
                log!("warn"; "{diagnostic}");
            }
            _ => log!("head"; "{diagnostic}"),
        }
    }

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let file_name = template_path
        .file_name()
        .map_or_else(|| "index.html".into(), ToOwned::to_owned);
    let document_path = output_dir.join(file_name);
    fs::write(&document_path, &outcome.document)
        .with_context(|| format!("failed to write {}", document_path.display()))?;
    log!("build"; "wrote {}", document_path.display());

    for file in &outcome.files {
        let path = output_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log!("files"; "wrote {}", path.display());
    }

    Ok(())
}
