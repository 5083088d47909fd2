use std::fs;

use intent_router::error::{ConfigError, Error};
use intent_router::infrastructure::config::settings::Config;

mod support;

use support::config::{support_desk_toml, write_temp_config};

#[test]
fn config_loads_support_desk_file() {
    let path = write_temp_config(&support_desk_toml("http://127.0.0.1:9"));
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    let config = result.expect("config should load");
    assert_eq!(config.classifier.model, "claude-3-haiku-20240307");
    assert_eq!(config.classifier.timeout_secs, 5);
    assert_eq!(config.logging.level, "warn");

    let ids: Vec<_> = config
        .agents()
        .into_iter()
        .map(|a| a.id.as_str().to_string())
        .collect();
    assert_eq!(ids, ["tech-agent", "billing"]);
}

#[test]
fn config_reports_missing_file() {
    let result = Config::load("/nonexistent/intent-router/config.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn config_rejects_invalid_top_p() {
    let path = write_temp_config(
        r#"
[classifier.inference]
top_p = -0.1
"#,
    );
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue { field: "top_p", .. })) => {}
        Err(err) => panic!("Expected invalid top_p error, got {err}"),
        Ok(config) => panic!(
            "Expected invalid top_p to be rejected, got {}",
            config.classifier.inference.top_p
        ),
    }
}

#[test]
fn config_rejects_zero_timeout() {
    let path = write_temp_config(
        r#"
[classifier]
timeout_secs = 0
"#,
    );
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "timeout_secs",
            ..
        }))
    ));
}

#[test]
fn config_ignores_api_key_in_file() {
    let path = write_temp_config(
        r#"
api_key = "sk-from-file"
"#,
    );
    let result = Config::parse_toml_with_api_key(
        &fs::read_to_string(&path).expect("read temp config"),
        None,
    );
    let _ = fs::remove_file(&path);

    let config = result.expect("unknown keys are ignored");
    assert!(config.api_key.is_none());
}
