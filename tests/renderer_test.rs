use fngen::error::Error;
use fngen::renderer::{render_str, MiniJinjaRenderer, TemplateRenderer};
use serde_json::json;

#[test]
fn test_render_field() {
    let renderer = MiniJinjaRenderer::new();
    let result = renderer.render("Hello {{ Name }}", &json!({"Name": "World"})).unwrap();
    assert_eq!(result, "Hello World");
}

#[test]
fn test_render_nested_and_index_access() {
    let renderer = MiniJinjaRenderer::new();
    let context = json!({
        "function": {"name": "hello"},
        "runtimes": ["go", "node"]
    });

    let result = renderer
        .render("{{ function.name }} on {{ runtimes[0] }}", &context)
        .unwrap();
    assert_eq!(result, "hello on go");
}

#[test]
fn test_render_undefined_field_is_error() {
    let renderer = MiniJinjaRenderer::new();
    let result = renderer.render("Hello {{ Missing }}", &json!({}));
    assert!(matches!(result, Err(Error::TemplateRenderError(_))));
}

#[test]
fn test_render_syntax_error() {
    let renderer = MiniJinjaRenderer::new();
    let result = renderer.render("Hello {{ Name", &json!({"Name": "World"}));
    assert!(matches!(result, Err(Error::TemplateSyntaxError(_))));
}

#[test]
fn test_comment_function_and_filter() {
    let renderer = MiniJinjaRenderer::new();
    let context = json!({"text": "a\n\nb"});

    let by_call = renderer.render("{{ comment(text) }}", &context).unwrap();
    let by_filter = renderer.render("{{ text|comment }}", &context).unwrap();

    assert_eq!(by_call, "// a\n//\n// b");
    assert_eq!(by_filter, by_call);
}

#[test]
fn test_render_keeps_trailing_newline() {
    let result = render_str("package {{ pkg }}\n", &json!({"pkg": "main"})).unwrap();
    assert_eq!(result, "package main\n");
}

#[test]
fn test_render_conditionals() {
    let template = "{% if http %}import \"net/http\"{% else %}none{% endif %}";
    assert_eq!(render_str(template, &json!({"http": true})).unwrap(), "import \"net/http\"");
    assert_eq!(render_str(template, &json!({"http": false})).unwrap(), "none");
}

#[test]
fn test_render_if_on_missing_key() {
    let result = render_str("{% if description %}x{% endif %}ok", &json!({})).unwrap();
    assert_eq!(result, "ok");

    let template = "{% if description %}{{ description|comment }}\n{% endif %}x";
    let result = render_str(template, &json!({"description": "hi"})).unwrap();
    assert_eq!(result, "// hi\nx");
}
