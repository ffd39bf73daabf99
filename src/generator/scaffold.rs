//! App-manifest scaffolding generator.
//!
//! Produces the companion artifacts a head configuration implies:
//! `manifest.json` (web app manifest), `browserconfig.xml` (Microsoft tile
//! settings) and `robots.txt`, together with the head elements that
//! reference them. Every href is prefixed with `static_url` so the
//! artifacts can live on a CDN path.

use super::{CustomElements, GeneratedFile};
use crate::{config::Meta, head::HeadElement};
use serde_json::{Map, Value, json};

/// Keys copied verbatim from the configuration into `manifest.json`.
const MANIFEST_KEYS: &[&str] = &["dir", "start_url", "orientation", "scope", "display"];

/// Built-in generator for app-manifest scaffolding.
pub struct Scaffold;

impl CustomElements for Scaffold {
    fn generate(&self, meta: &Meta) -> (Vec<HeadElement>, Vec<GeneratedFile>) {
        let mut elements = Vec::new();
        let mut files = Vec::new();
        let static_url = meta.get_str("static_url").unwrap_or_default();

        if let Some(icon) = meta.get_str("icon") {
            elements.push(
                HeadElement::link()
                    .attr("rel", "shortcut icon")
                    .attr("href", format!("{static_url}{icon}")),
            );
        }

        elements.push(
            HeadElement::link()
                .attr("rel", "manifest")
                .attr("href", format!("{static_url}manifest.json")),
        );
        files.push(GeneratedFile::new("manifest.json", manifest(meta)));

        if meta.contains("color") || meta.contains("icon") {
            elements.push(
                HeadElement::meta()
                    .attr("name", "msapplication-config")
                    .attr("content", format!("{static_url}browserconfig.xml")),
            );
            files.push(GeneratedFile::new(
                "browserconfig.xml",
                browserconfig(meta, &static_url),
            ));
        }

        files.push(GeneratedFile::new("robots.txt", robots(meta)));

        (elements, files)
    }
}

/// Web app manifest, key order stable across runs.
fn manifest(meta: &Meta) -> String {
    let mut fields = Map::new();

    if let Some(title) = meta.get_str("title") {
        fields.insert("name".into(), Value::String(title.clone()));
        fields.insert("short_name".into(), Value::String(title));
    }
    if let Some(description) = meta.get_str("description") {
        fields.insert("description".into(), Value::String(description));
    }
    for key in MANIFEST_KEYS {
        if let Some(value) = meta.get_str(key) {
            fields.insert((*key).into(), Value::String(value));
        }
    }
    if let Some(color) = meta.get_str("color") {
        fields.insert("background_color".into(), Value::String(color.clone()));
        fields.insert("theme_color".into(), Value::String(color));
    }
    if let Some(icon) = meta.get_str("icon") {
        let src = format!("{}{icon}", meta.get_str("static_url").unwrap_or_default());
        fields.insert("icons".into(), json!([{ "src": src }]));
    }

    // Map cannot fail to serialize
    serde_json::to_string_pretty(&Value::Object(fields)).unwrap_or_default()
}

/// Microsoft browserconfig with tile color and logo.
fn browserconfig(meta: &Meta, static_url: &str) -> String {
    let mut tile = String::new();
    if let Some(icon) = meta.get_str("icon") {
        tile.push_str(&format!(
            "      <square150x150logo src=\"{static_url}{icon}\"/>\n"
        ));
    }
    if let Some(color) = meta.get_str("color") {
        tile.push_str(&format!("      <TileColor>{color}</TileColor>\n"));
    }
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<browserconfig>
  <msapplication>
    <tile>
{tile}    </tile>
  </msapplication>
</browserconfig>
"#
    )
}

/// robots.txt allowing everything, with a sitemap hint when a site url is
/// configured.
fn robots(meta: &Meta) -> String {
    let mut contents = String::from("User-agent: *\nAllow: /\n");
    if let Some(url) = meta.get_str("url") {
        let protocol = meta.get_str("protocol").unwrap_or_default();
        contents.push_str(&format!("\nSitemap: {protocol}{url}/sitemap.xml\n"));
    }
    contents
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(src: &str) -> Meta {
        Meta::new(src.parse().unwrap())
    }

    #[test]
    fn test_manifest_contains_configured_fields() {
        let m = meta(
            "title = 'Example'\n\
             description = 'A site'\n\
             color = '#0000FF'\n\
             static_url = '/static/'\n\
             icon = 'favicon.png'\n\
             display = 'browser'",
        );
        let (elements, files) = Scaffold.generate(&m);

        let manifest = files.iter().find(|f| f.path.ends_with("manifest.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&manifest.contents).unwrap();
        assert_eq!(parsed["name"], "Example");
        assert_eq!(parsed["short_name"], "Example");
        assert_eq!(parsed["background_color"], "#0000FF");
        assert_eq!(parsed["display"], "browser");
        assert_eq!(parsed["icons"][0]["src"], "/static/favicon.png");

        let listed: Vec<String> = elements.iter().map(ToString::to_string).collect();
        assert!(listed.contains(&"<link rel='manifest' href='/static/manifest.json' />".into()));
        assert!(
            listed.contains(&"<link rel='shortcut icon' href='/static/favicon.png' />".into())
        );
    }

    #[test]
    fn test_browserconfig_only_with_color_or_icon() {
        let (_, files) = Scaffold.generate(&meta("title = 'Example'"));
        assert!(!files.iter().any(|f| f.path.ends_with("browserconfig.xml")));

        let (elements, files) = Scaffold.generate(&meta("color = '#fff'"));
        let config = files.iter().find(|f| f.path.ends_with("browserconfig.xml")).unwrap();
        assert!(config.contents.contains("<TileColor>#fff</TileColor>"));
        assert!(
            elements
                .iter()
                .any(|e| e.to_string().contains("msapplication-config"))
        );
    }

    #[test]
    fn test_robots_sitemap_line_requires_url() {
        let (_, files) = Scaffold.generate(&meta(""));
        let robots = files.iter().find(|f| f.path.ends_with("robots.txt")).unwrap();
        assert!(!robots.contents.contains("Sitemap:"));

        let (_, files) = Scaffold.generate(&meta("protocol = 'https://'\nurl = 'example.com'"));
        let robots = files.iter().find(|f| f.path.ends_with("robots.txt")).unwrap();
        assert!(robots.contents.contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
