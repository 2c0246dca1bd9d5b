mod common;

use common::temp_config;
use imagegen::config::{Config, ConfigError, DEFAULT_ENDPOINT};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.api.endpoint.is_none());
    assert!(config.api.api_key.is_none());
    assert!(config.api.client_id.starts_with("imagegen/"));
    assert_eq!(config.api.timeout_seconds, 120);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.api.max_download_bytes, 16 * 1024 * 1024);
    assert_eq!(config.layout.breakpoint_columns, 96);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("imagegen/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let (dir, _) = temp_config("");
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
endpoint = "http://localhost:8080/v1/images/generations"

[layout]
breakpoint_columns = 80
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.api.endpoint.as_deref(),
        Some("http://localhost:8080/v1/images/generations")
    );
    assert_eq!(config.layout.breakpoint_columns, 80);
    assert_eq!(config.api.timeout_seconds, 120);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nendpoint = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_breakpoint_is_rejected() {
    let (_dir, path) = temp_config("[layout]\nbreakpoint_columns = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_zero_download_cap_is_rejected() {
    let (_dir, path) = temp_config("[api]\nmax_download_bytes = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("max_download_bytes"));
}

#[test]
fn test_non_http_endpoint_is_rejected() {
    let (_dir, path) = temp_config("[api]\nendpoint = \"ftp://example.com\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("not an http(s) URL"));
}

#[test]
fn test_resolution_prefers_config_over_env() {
    let (_dir, path) = temp_config(
        "[api]\nendpoint = \"http://configured/v1\"\napi_key = \"sk-config\"\n",
    );
    let config = Config::load_from(&path).unwrap();

    let target = config.api.resolve_with(|name| match name {
        "OPENAI_API_IMAGE_URL" => Some("http://env/v1".to_string()),
        "OPENAI_API_KEY" => Some("sk-env".to_string()),
        _ => None,
    });
    assert_eq!(target.endpoint, "http://configured/v1");
    assert_eq!(target.credential.unwrap().expose(), "sk-config");
}

#[test]
fn test_resolution_falls_back_to_env_then_default() {
    let config = Config::default();

    let target = config.api.resolve_with(|name| match name {
        "OPENAI_API_KEY" => Some("sk-env".to_string()),
        _ => None,
    });
    assert_eq!(target.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(target.credential.unwrap().expose(), "sk-env");

    let target = config.api.resolve_with(|_| None);
    assert!(target.credential.is_none());
}
