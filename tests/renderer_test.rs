use gostrap::context::VariableContext;
use gostrap::error::Error;
use gostrap::renderer::{PlaceholderRenderer, Renderer};

fn context() -> VariableContext {
    let mut context = VariableContext::new("myapp");
    context.generated_at = "2024-05-01".to_string();
    context
}

fn render(template: &str, context: &VariableContext) -> Result<String, Error> {
    PlaceholderRenderer::new().render(template, context)
}

#[test]
fn test_field_substitution() {
    let ctx = context();

    assert_eq!(render("Hello {{ .ProjectName }}!", &ctx).unwrap(), "Hello myapp!");
    assert_eq!(
        render("module {{ .ModulePath }}", &ctx).unwrap(),
        "module github.com/user/myapp"
    );
    assert_eq!(render("{{ .GeneratedAt }}", &ctx).unwrap(), "2024-05-01");
}

#[test]
fn test_whitespace_in_tags_is_flexible() {
    let ctx = context();

    assert_eq!(render("{{.ProjectName}}", &ctx).unwrap(), "myapp");
    assert_eq!(render("{{   .ProjectName   }}", &ctx).unwrap(), "myapp");
}

#[test]
fn test_boolean_field_prints_as_literal() {
    let ctx = context();
    assert_eq!(render("redis={{ .RedisEnabled }}", &ctx).unwrap(), "redis=true");

    let mut ctx = context();
    ctx.redis_enabled = false;
    assert_eq!(render("redis={{ .RedisEnabled }}", &ctx).unwrap(), "redis=false");
}

#[test]
fn test_database_type_renders_lowercase() {
    let ctx = context();
    assert_eq!(render("driver: {{ .DatabaseType }}", &ctx).unwrap(), "driver: mysql");
}

#[test]
fn test_conditional_section_follows_flag() {
    let template = "a{{ if .RedisEnabled }}redis{{ end }}b";

    let ctx = context();
    assert_eq!(render(template, &ctx).unwrap(), "aredisb");

    let mut ctx = context();
    ctx.redis_enabled = false;
    assert_eq!(render(template, &ctx).unwrap(), "ab");
}

#[test]
fn test_conditional_else_branch() {
    let template = "{{ if .MetricsEnabled }}on{{ else }}off{{ end }}";

    let ctx = context();
    assert_eq!(render(template, &ctx).unwrap(), "on");

    let mut ctx = context();
    ctx.metrics_enabled = false;
    assert_eq!(render(template, &ctx).unwrap(), "off");
}

#[test]
fn test_nested_conditionals() {
    let template =
        "{{ if .RedisEnabled }}r{{ if .MetricsEnabled }}m{{ end }}{{ end }}tail";

    let ctx = context();
    assert_eq!(render(template, &ctx).unwrap(), "rmtail");

    let mut ctx = context();
    ctx.metrics_enabled = false;
    assert_eq!(render(template, &ctx).unwrap(), "rtail");

    let mut ctx = context();
    ctx.redis_enabled = false;
    assert_eq!(render(template, &ctx).unwrap(), "tail");
}

#[test]
fn test_unknown_field_fails_closed() {
    let ctx = context();

    match render("{{ .Nonexistent }}", &ctx) {
        Err(Error::Substitution { detail }) => assert!(detail.contains("Nonexistent")),
        other => panic!("expected Substitution error, got {:?}", other),
    }
}

#[test]
fn test_unknown_field_fails_even_in_suppressed_branch() {
    let mut ctx = context();
    ctx.redis_enabled = false;

    let template = "{{ if .RedisEnabled }}{{ .Misspelled }}{{ end }}";
    assert!(matches!(render(template, &ctx), Err(Error::Substitution { .. })));
}

#[test]
fn test_if_over_non_boolean_field_is_an_error() {
    let ctx = context();
    let result = render("{{ if .ProjectName }}x{{ end }}", &ctx);
    assert!(matches!(result, Err(Error::Substitution { .. })));
}

#[test]
fn test_malformed_tags() {
    let ctx = context();

    // Missing leading dot
    assert!(render("{{ ProjectName }}", &ctx).is_err());
    // Unterminated tag
    assert!(render("{{ .ProjectName", &ctx).is_err());
    // Stray end / else
    assert!(render("{{ end }}", &ctx).is_err());
    assert!(render("{{ else }}", &ctx).is_err());
    // Unclosed block
    assert!(render("{{ if .RedisEnabled }}never closed", &ctx).is_err());
    // Duplicate else
    assert!(render("{{ if .RedisEnabled }}a{{ else }}b{{ else }}c{{ end }}", &ctx).is_err());
}

#[test]
fn test_rendering_is_pure() {
    let ctx = context();
    let template = "{{ .ProjectName }} {{ if .RedisEnabled }}r{{ end }} {{ .GeneratedAt }}";

    let first = render(template, &ctx).unwrap();
    let second = render(template, &ctx).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_text_without_tags_passes_through() {
    let ctx = context();
    let body = "no tags here\njust text {}\n";
    assert_eq!(render(body, &ctx).unwrap(), body);
}
