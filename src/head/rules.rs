//! Declarative rule table mapping configuration keys to head elements.
//!
//! Each rule is a pure function over the `[meta]` mapping, tagged with the
//! section its output belongs to. `compose()` walks the sections in fixed
//! order and runs the rules registered for each, so adding a rule never
//! touches control flow elsewhere. A missing key always means omission,
//! never an error or an empty-value element.

use super::{HeadElement, Section};
use crate::config::Meta;

/// One entry of the rule table: output section plus element builder.
pub struct Rule {
    pub section: Section,
    pub build: fn(&Meta) -> Vec<HeadElement>,
}

/// The full rule table, in emission order within each section.
pub const RULES: &[Rule] = &[
    // general
    Rule { section: Section::General, build: content_type },
    Rule { section: Section::General, build: ua_compatible },
    Rule { section: Section::General, build: viewport },
    Rule { section: Section::General, build: content_language },
    Rule { section: Section::General, build: theme_color },
    Rule { section: Section::General, build: robots },
    // basic
    Rule { section: Section::Basic, build: title },
    Rule { section: Section::Basic, build: description },
    Rule { section: Section::Basic, build: subject },
    Rule { section: Section::Basic, build: keywords },
    // social media: Open Graph / Facebook
    Rule { section: Section::SocialMedia, build: fb_app_id },
    Rule { section: Section::SocialMedia, build: og_locale },
    Rule { section: Section::SocialMedia, build: og_type },
    Rule { section: Section::SocialMedia, build: og_url },
    Rule { section: Section::SocialMedia, build: og_site_name },
    Rule { section: Section::SocialMedia, build: og_title },
    Rule { section: Section::SocialMedia, build: og_description },
    Rule { section: Section::SocialMedia, build: og_image },
    Rule { section: Section::SocialMedia, build: og_image_type },
    Rule { section: Section::SocialMedia, build: og_image_alt },
    // social media: Twitter
    Rule { section: Section::SocialMedia, build: twitter_card },
    Rule { section: Section::SocialMedia, build: twitter_site },
    Rule { section: Section::SocialMedia, build: twitter_title },
    Rule { section: Section::SocialMedia, build: twitter_description },
    Rule { section: Section::SocialMedia, build: twitter_creator_id },
    // author
    Rule { section: Section::Author, build: author },
];

/// Run every rule registered for `section`, concatenating their output.
pub fn section_elements(meta: &Meta, section: Section) -> Vec<HeadElement> {
    RULES
        .iter()
        .filter(|rule| rule.section == section)
        .flat_map(|rule| (rule.build)(meta))
        .collect()
}

/// Assemble all sections in fixed order, splicing externally generated
/// elements into the custom slot between basic and social media.
pub fn compose(meta: &Meta, custom: Vec<HeadElement>) -> Vec<HeadElement> {
    let mut custom = Some(custom);
    Section::ORDER
        .iter()
        .flat_map(|&section| match section {
            Section::Custom => custom.take().unwrap_or_default(),
            _ => section_elements(meta, section),
        })
        .collect()
}

// ============================================================================
// General
// ============================================================================

fn content_type(meta: &Meta) -> Vec<HeadElement> {
    http_equiv(meta, "content-type", "Content-Type")
}

fn ua_compatible(meta: &Meta) -> Vec<HeadElement> {
    http_equiv(meta, "X-UA-Compatible", "X-UA-Compatible")
}

/// `viewport` sub-mapping serialized as `key=value, key=value`.
fn viewport(meta: &Meta) -> Vec<HeadElement> {
    let Some(table) = meta.get_table("viewport") else {
        return Vec::new();
    };
    let content = table
        .iter()
        .filter_map(|(key, value)| Some(format!("{key}={}", crate::config::scalar(value)?)))
        .collect::<Vec<_>>()
        .join(", ");
    vec![named("viewport", content)]
}

fn content_language(meta: &Meta) -> Vec<HeadElement> {
    http_equiv(meta, "language", "Content-Language")
}

/// One `color` key fans out to both the standard and the Microsoft tile
/// vocabulary.
fn theme_color(meta: &Meta) -> Vec<HeadElement> {
    let Some(color) = meta.get_str("color") else {
        return Vec::new();
    };
    vec![
        named("theme-color", color.clone()),
        named("msapplication-TileColor", color),
    ]
}

fn robots(meta: &Meta) -> Vec<HeadElement> {
    direct(meta, "robots", "robots")
}

// ============================================================================
// Basic
// ============================================================================

fn title(meta: &Meta) -> Vec<HeadElement> {
    let Some(title) = meta.get_str("title") else {
        return Vec::new();
    };
    vec![
        HeadElement::title(title.clone()),
        named("application-name", title),
    ]
}

fn description(meta: &Meta) -> Vec<HeadElement> {
    direct(meta, "description", "description")
}

fn subject(meta: &Meta) -> Vec<HeadElement> {
    direct(meta, "subject", "subject")
}

fn keywords(meta: &Meta) -> Vec<HeadElement> {
    direct(meta, "keywords", "keywords")
}

// ============================================================================
// Social media
// ============================================================================

fn fb_app_id(meta: &Meta) -> Vec<HeadElement> {
    let Some(id) = meta.get_str("fb:app_id") else {
        return Vec::new();
    };
    // "porperty" matches the published output of every earlier release
    vec![HeadElement::meta().attr("porperty", "fb:app_id").attr("content", id)]
}

/// `og:locale` built from `language` plus `_territory` only when the
/// territory is present.
fn og_locale(meta: &Meta) -> Vec<HeadElement> {
    let Some(language) = meta.get_str("language") else {
        return Vec::new();
    };
    let locale = match meta.get_str("territory") {
        Some(territory) => format!("{language}_{territory}"),
        None => language,
    };
    vec![property("og:locale", locale)]
}

fn og_type(meta: &Meta) -> Vec<HeadElement> {
    meta.get_str("type")
        .map(|value| vec![property("og:type", value)])
        .unwrap_or_default()
}

/// `og:url` is `protocol` (optional, defaults to empty) plus `url`.
fn og_url(meta: &Meta) -> Vec<HeadElement> {
    let Some(url) = meta.get_str("url") else {
        return Vec::new();
    };
    let protocol = meta.get_str("protocol").unwrap_or_default();
    vec![property("og:url", format!("{protocol}{url}"))]
}

fn og_site_name(meta: &Meta) -> Vec<HeadElement> {
    meta.get_str("title")
        .map(|value| vec![property("og:site_name", value)])
        .unwrap_or_default()
}

fn og_title(meta: &Meta) -> Vec<HeadElement> {
    meta.get_str("title")
        .map(|value| vec![property("og:title", value)])
        .unwrap_or_default()
}

fn og_description(meta: &Meta) -> Vec<HeadElement> {
    meta.get_str("description")
        .map(|value| vec![property("og:description", value)])
        .unwrap_or_default()
}

/// Image fan-out: one image value (preview, falling back to icon) yields
/// the plain, secure-url and Twitter card variants, all sharing
/// `static_url` + image path.
fn og_image(meta: &Meta) -> Vec<HeadElement> {
    let Some(image) = meta.first_of(&["preview", "icon"]) else {
        return Vec::new();
    };
    let src = format!("{}{image}", meta.get_str("static_url").unwrap_or_default());
    vec![
        property("og:image", src.clone()),
        property("og:image:secure_url", src.clone()),
        named("twitter:image", src),
    ]
}

fn og_image_type(meta: &Meta) -> Vec<HeadElement> {
    meta.get_str("preview_type")
        .map(|value| vec![property("og:image:type", value)])
        .unwrap_or_default()
}

/// Alt text is `title - description` when both exist, otherwise whichever
/// one exists alone; omitted entirely when neither does.
fn og_image_alt(meta: &Meta) -> Vec<HeadElement> {
    let title = meta.get_str("title");
    let description = meta.get_str("description");
    let alt = match (title, description) {
        (Some(title), Some(description)) => format!("{title} - {description}"),
        (Some(title), None) => title,
        (None, Some(description)) => description,
        (None, None) => return Vec::new(),
    };
    vec![
        property("og:image:alt", alt.clone()),
        named("twitter:image:alt", alt),
    ]
}

/// The one unconditional element: every page gets a summary card.
fn twitter_card(_meta: &Meta) -> Vec<HeadElement> {
    vec![named("twitter:card", "summary")]
}

fn twitter_site(meta: &Meta) -> Vec<HeadElement> {
    meta.get_str("tw:site")
        .map(|value| vec![named("twitter:site", value)])
        .unwrap_or_default()
}

fn twitter_title(meta: &Meta) -> Vec<HeadElement> {
    meta.get_str("title")
        .map(|value| vec![named("twitter:title", value)])
        .unwrap_or_default()
}

fn twitter_description(meta: &Meta) -> Vec<HeadElement> {
    meta.get_str("description")
        .map(|value| vec![named("twitter:description", value)])
        .unwrap_or_default()
}

fn twitter_creator_id(meta: &Meta) -> Vec<HeadElement> {
    meta.get_str("tw:creator:id")
        .map(|value| vec![property("twitter:creator:id", value)])
        .unwrap_or_default()
}

// ============================================================================
// Author
// ============================================================================

fn author(meta: &Meta) -> Vec<HeadElement> {
    direct(meta, "author", "author")
}

// ============================================================================
// Builders
// ============================================================================

fn named(name: &'static str, content: impl Into<String>) -> HeadElement {
    HeadElement::meta().attr("name", name).attr("content", content)
}

fn property(name: &'static str, content: impl Into<String>) -> HeadElement {
    HeadElement::meta().attr("property", name).attr("content", content)
}

/// Direct mapping: key present means one `name=` element, value verbatim.
fn direct(meta: &Meta, key: &str, name: &'static str) -> Vec<HeadElement> {
    meta.get_str(key).map(|value| vec![named(name, value)]).unwrap_or_default()
}

/// Direct mapping onto an `http-equiv` element.
fn http_equiv(meta: &Meta, key: &str, name: &'static str) -> Vec<HeadElement> {
    meta.get_str(key)
        .map(|value| vec![HeadElement::meta().attr("http-equiv", name).attr("content", value)])
        .unwrap_or_default()
}
