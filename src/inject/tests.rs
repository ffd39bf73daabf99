use super::{Diagnostic, inject_head, normalize_quotes};
use crate::config::Meta;
use crate::generator::{CustomElements, GeneratedFile, NoCustomElements};
use crate::head::HeadElement;

fn meta(src: &str) -> Meta {
    Meta::new(src.parse().unwrap())
}

#[test]
fn test_round_trip_adds_lang_and_removes_placeholder() {
    let template = "<html>\n<head>\n    $head$\n</head>\n</html>\n";
    let outcome = inject_head(template, &meta("language = 'en'"), &NoCustomElements);

    assert!(outcome.document.contains("<html lang=\"en\">"));
    assert!(!outcome.document.contains("$head$"));
    assert!(outcome.document.contains("<!-- Custom head elements -->"));
}

#[test]
fn test_no_markers_returns_document_unchanged_with_two_diagnostics() {
    let template = "<body>nothing here</body>";
    let outcome = inject_head(template, &meta("language = 'en'"), &NoCustomElements);

    assert_eq!(outcome.document, template);
    assert_eq!(
        outcome.diagnostics,
        vec![Diagnostic::MissingRootTag, Diagnostic::MissingPlaceholder]
    );
    assert!(outcome.files.is_empty());
}

#[test]
fn test_root_tag_step_skipped_without_language_key() {
    let template = "<body>$head$</body>";
    let outcome = inject_head(template, &meta("title = 'Example'"), &NoCustomElements);

    assert!(!outcome.diagnostics.contains(&Diagnostic::MissingRootTag));
    assert!(!outcome.document.contains("$head$"));
}

#[test]
fn test_missing_placeholder_leaves_document_and_skips_generator() {
    struct Panicking;
    impl CustomElements for Panicking {
        fn generate(&self, _: &Meta) -> (Vec<HeadElement>, Vec<GeneratedFile>) {
            panic!("generator must not run without a placeholder")
        }
    }

    let template = "<html>\n<head></head>\n</html>";
    let outcome = inject_head(template, &meta("title = 'Example'"), &Panicking);
    assert_eq!(outcome.document, template);
    assert_eq!(outcome.diagnostics, vec![Diagnostic::MissingPlaceholder]);
}

#[test]
fn test_indentation_context_applied_to_every_element_line() {
    let template = "<head>\n    $head$\n</head>";
    let m = meta("title = 'Example'\nrobots = 'index'");
    let outcome = inject_head(template, &m, &NoCustomElements);

    for line in outcome
        .document
        .lines()
        .filter(|line| line.contains("<meta") || line.contains("<title"))
    {
        assert!(
            line.starts_with("    <"),
            "element line not indented by four spaces: {line:?}"
        );
    }
}

#[test]
fn test_block_does_not_introduce_blank_line_before_successor() {
    let template = "<head>\n    $head$\n</head>";
    let outcome = inject_head(template, &meta(""), &NoCustomElements);
    assert!(outcome.document.contains(" />\n</head>"));
    assert!(!outcome.document.contains("\n\n</head>"));
}

#[test]
fn test_only_first_placeholder_occurrence_is_replaced() {
    let template = "<head>\n$head$\n$head$\n</head>";
    let outcome = inject_head(template, &meta(""), &NoCustomElements);
    assert_eq!(outcome.document.matches("$head$").count(), 1);
}

#[test]
fn test_injected_markup_uses_double_quotes() {
    let template = "<head>\n$head$\n</head>";
    let outcome = inject_head(template, &meta("robots = 'index'"), &NoCustomElements);
    assert!(
        outcome
            .document
            .contains("<meta name=\"robots\" content=\"index\" />")
    );
    assert!(!outcome.document.contains('\''));
}

#[test]
fn test_quote_normalization_is_idempotent() {
    let once = normalize_quotes("<meta name='robots' content='index' />");
    let twice = normalize_quotes(&once);
    assert_eq!(once, twice);
    assert_eq!(once, "<meta name=\"robots\" content=\"index\" />");
}

#[test]
fn test_generator_elements_and_files_are_surfaced() {
    struct OneLink;
    impl CustomElements for OneLink {
        fn generate(&self, _: &Meta) -> (Vec<HeadElement>, Vec<GeneratedFile>) {
            (
                vec![
                    HeadElement::link()
                        .attr("rel", "manifest")
                        .attr("href", "/manifest.json"),
                ],
                vec![GeneratedFile::new("manifest.json", "{}")],
            )
        }
    }

    let outcome = inject_head("<head>$head$</head>", &meta(""), &OneLink);
    assert!(
        outcome
            .document
            .contains("<link rel=\"manifest\" href=\"/manifest.json\" />")
    );
    assert_eq!(outcome.files.len(), 1);
    assert!(
        outcome
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::NewFiles(paths) if paths.len() == 1))
    );
}

#[test]
fn test_custom_elements_sit_between_basic_and_social() {
    struct OneLink;
    impl CustomElements for OneLink {
        fn generate(&self, _: &Meta) -> (Vec<HeadElement>, Vec<GeneratedFile>) {
            (
                vec![HeadElement::link().attr("rel", "manifest").attr("href", "/m.json")],
                Vec::new(),
            )
        }
    }

    let m = meta("title = 'Example'");
    let outcome = inject_head("<head>$head$</head>", &m, &OneLink);
    let doc = &outcome.document;

    let basic = doc.find("application-name").unwrap();
    let custom = doc.find("rel=\"manifest\"").unwrap();
    let social = doc.find("og:site_name").unwrap();
    assert!(basic < custom && custom < social);
}
