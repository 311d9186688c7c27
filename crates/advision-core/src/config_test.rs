use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "ADVISION_ENV"));
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_path.to_str(), Some("./config/ads.yaml"));
    assert!(cfg.gemini_api_key.is_none());
    assert_eq!(
        cfg.gemini_base_url,
        "https://generativelanguage.googleapis.com/"
    );
    assert_eq!(cfg.gemini_model, "gemini-1.5-flash");
    assert_eq!(cfg.generation_timeout_secs, 60);
    assert!(cfg.image_api_key.is_none());
    assert_eq!(cfg.image_base_url, "https://api.openai.com/");
    assert_eq!(cfg.image_model, "dall-e-3");
    assert!(cfg.heuristic_seed.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("ADVISION_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADVISION_BIND_ADDR"),
        "expected InvalidEnvVar(ADVISION_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_gemini_key() {
    let mut map = HashMap::new();
    map.insert("GEMINI_APIKEY", "secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gemini_api_key.as_deref(), Some("secret-key"));
}

#[test]
fn build_app_config_treats_blank_gemini_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("GEMINI_APIKEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.gemini_api_key.is_none());
}

#[test]
fn debug_output_redacts_gemini_key() {
    let mut map = HashMap::new();
    map.insert("GEMINI_APIKEY", "secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-key"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn generation_timeout_override() {
    let mut map = HashMap::new();
    map.insert("ADVISION_GENERATION_TIMEOUT_SECS", "15");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.generation_timeout_secs, 15);
}

#[test]
fn generation_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("ADVISION_GENERATION_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADVISION_GENERATION_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ADVISION_GENERATION_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn heuristic_seed_override() {
    let mut map = HashMap::new();
    map.insert("ADVISION_HEURISTIC_SEED", "42");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.heuristic_seed, Some(42));
}

#[test]
fn heuristic_seed_invalid() {
    let mut map = HashMap::new();
    map.insert("ADVISION_HEURISTIC_SEED", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADVISION_HEURISTIC_SEED"),
        "expected InvalidEnvVar(ADVISION_HEURISTIC_SEED), got: {result:?}"
    );
}

#[test]
fn catalog_path_and_model_overrides() {
    let mut map = HashMap::new();
    map.insert("ADVISION_CATALOG_PATH", "/srv/ads.yaml");
    map.insert("ADVISION_GEMINI_MODEL", "gemini-2.0-flash");
    map.insert("ADVISION_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.catalog_path.to_str(), Some("/srv/ads.yaml"));
    assert_eq!(cfg.gemini_model, "gemini-2.0-flash");
    assert_eq!(cfg.env, Environment::Production);
}

#[test]
fn image_service_overrides() {
    let mut map = HashMap::new();
    map.insert("OPENAI_API_KEY", "image-secret");
    map.insert("ADVISION_IMAGE_BASE_URL", "http://127.0.0.1:9000");
    map.insert("ADVISION_IMAGE_MODEL", "dall-e-2");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.image_api_key.as_deref(), Some("image-secret"));
    assert_eq!(cfg.image_base_url, "http://127.0.0.1:9000");
    assert_eq!(cfg.image_model, "dall-e-2");
    assert!(!format!("{cfg:?}").contains("image-secret"));
}
