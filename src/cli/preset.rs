//! Preset command: write a starter `metahead.toml`.
//!
//! The generated file exercises every recognized key so a new project
//! starts from a complete example and deletes what it does not need.

use crate::{cli::Cli, log};
use anyhow::{Result, bail};
use std::{fs, path::Path};

const PRESET: &str = r##"# metahead configuration
# Every [meta] key is optional: deleting one simply omits the head
# elements derived from it.

[build]
template = "index.html"
output = "public"

[meta]
content-type = "text/html; charset=utf-8"
X-UA-Compatible = "ie=edge"
language = "en"
territory = "US"
protocol = "https://"
url = "example.com"
robots = "index, follow"
color = "#0000FF"

title = "Example"
description = "Example site"
subject = "Home Page"
keywords = "example, sample"
author = "Example Author"

# Hosting prefix for icons, previews and generated scaffold files
static_url = "/static/"
icon = "favicon.png"
preview = "preview.png"
preview_type = "image/png"

# Social media
type = "website"
"fb:app_id" = "123456"
"tw:site" = "@example"
"tw:creator:id" = "123456"

# App manifest
dir = "ltr"
start_url = "/"
orientation = "landscape"
scope = "/"
display = "browser"

[meta.viewport]
width = "device-width"
initial-scale = 1
"##;

pub fn write_preset(path: Option<&Path>, cli: &Cli) -> Result<()> {
    let destination = path.unwrap_or(&cli.config);
    if destination.exists() {
        bail!("'{}' already exists, refusing to overwrite", destination.display());
    }
    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(destination, PRESET)?;
    log!("preset"; "wrote {}", destination.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_preset_round_trips_through_config_loader() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metahead.toml");
        fs::write(&path, PRESET).unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.meta.get_str("title").as_deref(), Some("Example"));
        assert_eq!(config.meta.get_str("fb:app_id").as_deref(), Some("123456"));
        assert!(config.meta.get_table("viewport").is_some());
    }

    #[test]
    fn test_preset_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metahead.toml");
        fs::write(&path, "").unwrap();

        let cli = crate::cli::Cli {
            color: clap::ColorChoice::Auto,
            verbose: false,
            output: None,
            config: path.clone(),
            command: crate::cli::Commands::Preset { path: None },
        };
        assert!(write_preset(None, &cli).is_err());
    }
}
