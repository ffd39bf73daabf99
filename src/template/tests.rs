use super::{Context, Engine, Oneline, TemplateError};

fn engine() -> Engine {
    Engine::new().with_extension(Oneline)
}

fn render(source: &str) -> String {
    engine().render(source, &Context::default()).unwrap()
}

#[test]
fn test_plain_text_passes_through() {
    assert_eq!(render("<p>  hello  </p>"), "<p>  hello  </p>");
}

#[test]
fn test_variable_substitution() {
    let mut context = Context::default();
    context.insert("title".into(), "Example".into());
    let out = engine().render("<title>{{ title }}</title>", &context).unwrap();
    assert_eq!(out, "<title>Example</title>");
}

#[test]
fn test_absent_variable_renders_empty() {
    assert_eq!(render("a{{ missing }}b"), "ab");
}

#[test]
fn test_oneline_strips_all_whitespace() {
    let out = render("{% oneline %}  <a>\n  text  </a>  {% endoneline %}");
    assert_eq!(out, "<a>text</a>");
}

#[test]
fn test_oneline_leaves_outside_whitespace_alone() {
    let out = render("  before  {% oneline %} <b>\n x </b> {% endoneline %}  after  ");
    assert_eq!(out, "  before  <b>x</b>  after  ");
}

#[test]
fn test_variables_resolve_before_stripping() {
    let mut context = Context::default();
    context.insert("text".into(), "a b".into());
    let out = engine()
        .render("{% oneline %} <i> {{ text }} </i> {% endoneline %}", &context)
        .unwrap();
    // Whitespace inside the substituted value is stripped too: the
    // transform operates on the fully-rendered text of the region.
    assert_eq!(out, "<i>ab</i>");
}

#[test]
fn test_nested_oneline_is_rejected() {
    let err = engine()
        .render(
            "{% oneline %} a {% oneline %} b {% endoneline %} c {% endoneline %}",
            &Context::default(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        TemplateError::NestedBlock {
            name: "oneline".into(),
            line: 1
        }
    );
}

#[test]
fn test_unclosed_block_reports_opening_line() {
    let err = engine()
        .render("text\n{% oneline %} body", &Context::default())
        .unwrap_err();
    assert_eq!(
        err,
        TemplateError::UnclosedBlock {
            name: "oneline".into(),
            line: 2
        }
    );
}

#[test]
fn test_unknown_block_is_an_error() {
    let err = engine()
        .render("{% spaceless %}x{% endspaceless %}", &Context::default())
        .unwrap_err();
    assert_eq!(
        err,
        TemplateError::UnknownBlock {
            name: "spaceless".into(),
            line: 1
        }
    );
}

#[test]
fn test_stray_end_marker_is_an_error() {
    let err = engine()
        .render("x {% endoneline %}", &Context::default())
        .unwrap_err();
    assert_eq!(
        err,
        TemplateError::UnexpectedEnd {
            name: "oneline".into(),
            line: 1
        }
    );
}

#[test]
fn test_unclosed_variable_tag() {
    let err = engine().render("a {{ title", &Context::default()).unwrap_err();
    assert_eq!(err, TemplateError::UnclosedVariable { line: 1 });
}
