//! End-to-end tests: configuration file to rendered template.

use urlgen::prelude::*;

const ROUTES_TOML: &str = r#"
log_level = "urlgen_routes=trace"

[routes]
hello = "/hello/:name"
profile = "https://example.com/users/:id?tab=posts#:top"
home = "/"
"#;

#[test]
fn test_settings_to_generated_urls() {
    let settings = settings_loader::from_toml_str(ROUTES_TOML).unwrap();
    setup_logging(&settings);

    let generator = Generator::from_settings(&settings).unwrap();
    assert_eq!(generator.names(), vec!["hello", "home", "profile"]);

    let mut params = Params::new();
    params.insert("id".into(), "42".into());
    let url = generator.url("profile", &params).unwrap();
    assert_eq!(url.to_string(), "https://example.com/users/42?tab=posts#:top");
    assert_eq!(
        url.to_url().unwrap().as_str(),
        "https://example.com/users/42?tab=posts#:top"
    );

    let home = generator.url("home", &Params::new()).unwrap();
    assert_eq!(home, *generator.route("home").unwrap());
}

#[test]
fn test_invalid_configured_route() {
    let settings = Settings::default().with_route("broken", "/a%zz");
    let err = Generator::from_settings(&settings).unwrap_err();
    assert!(matches!(
        err,
        UrlGenError::InvalidRoute { source: ParseError::InvalidEscape(_), .. }
    ));
    assert_eq!(
        err.to_string(),
        r#"invalid route "broken": invalid URL escape "%zz""#
    );
}

#[test]
fn test_helper_and_tera_agree() {
    let settings = settings_loader::from_toml_str(ROUTES_TOML).unwrap();
    let generator = std::sync::Arc::new(Generator::from_settings(&settings).unwrap());

    let helper = TemplateFunc::new(std::sync::Arc::clone(&generator));
    let direct = helper.helper("hello", &["name", "Jane & Jon"]).unwrap();

    let mut tera = tera::Tera::default();
    register(&mut tera, "url", generator);
    let rendered = tera
        .render_str(
            r#"{{ url(name="hello", params=["name", "Jane & Jon"]) }}"#,
            &tera::Context::new(),
        )
        .unwrap();

    assert_eq!(direct, "/hello/Jane+%26+Jon");
    assert_eq!(rendered, direct);
}
