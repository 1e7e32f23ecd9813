//! Integration tests for the config-backed helpers.

use lambda_helpers::{
    CONTENT_TYPE_HEADER, ConfigError, HelperError, Helpers, JSON_CONTENT_TYPE, VERSION_HEADER,
};
use lambda_helpers_test_utils::{ConfigFixture, minimal_config, sample_config};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::collections::BTreeMap;

fn helpers(fixture: &ConfigFixture) -> Helpers {
    Helpers::new(fixture.file().clone())
}

/// The loaded config matches the file contents.
#[test]
fn load_config_returns_file_contents() {
    let fixture = ConfigFixture::with_json(&sample_config());
    let config = helpers(&fixture).load_config().expect("config");
    assert_eq!(Value::Object(config.into_map()), sample_config());
}

/// Missing and malformed files fail with distinct errors.
#[test]
fn load_config_distinguishes_missing_and_malformed() {
    let missing = ConfigFixture::empty();
    assert!(matches!(
        helpers(&missing).load_config().unwrap_err(),
        ConfigError::NotFound { .. }
    ));

    let malformed = ConfigFixture::with_raw("{\"version\": ");
    assert!(matches!(
        helpers(&malformed).load_config().unwrap_err(),
        ConfigError::ParseFailed { .. }
    ));
}

#[test]
fn get_setting_returns_present_value() {
    let fixture = ConfigFixture::with_json(&sample_config());
    let value = helpers(&fixture)
        .get_setting("common_settings", Value::Null)
        .expect("setting");
    assert_eq!(value["timeout_seconds"], json!(30));
}

/// Absent keys return the default unchanged, including null.
#[test]
fn get_setting_returns_default_when_absent() {
    let fixture = ConfigFixture::with_json(&sample_config());
    let helpers = helpers(&fixture);
    assert_eq!(
        helpers
            .get_setting("feature_flags", json!({ "beta": false }))
            .expect("setting"),
        json!({ "beta": false })
    );
    assert_eq!(
        helpers.get_setting("feature_flags", Value::Null).expect("setting"),
        Value::Null
    );
}

#[test]
fn get_setting_propagates_missing_file() {
    let fixture = ConfigFixture::empty();
    let err = helpers(&fixture)
        .get_setting("version", json!("0.0.0"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

/// Status and version header follow the caller and the config.
#[test]
fn format_response_stamps_version_and_status() {
    let fixture = ConfigFixture::with_json(&minimal_config("3.4.5", "INFO"));
    let helpers = helpers(&fixture);

    for status in [200, 404, 500, 799, 0, -1] {
        let envelope = helpers
            .format_response(status, &json!({ "status": status }))
            .expect("envelope");
        assert_eq!(envelope.status_code, status);
        assert_eq!(envelope.version(), Some("3.4.5"));
        let expected: BTreeMap<String, String> = BTreeMap::from([
            (CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string()),
            (VERSION_HEADER.to_string(), "3.4.5".to_string()),
        ]);
        assert_eq!(envelope.headers, expected);
    }
}

/// Decoding the envelope body yields the original value.
#[test]
fn format_response_body_round_trips() {
    let fixture = ConfigFixture::with_json(&sample_config());
    let helpers = helpers(&fixture);
    let bodies = [
        json!({ "message": "ok", "items": [1, 2, 3], "nested": { "flag": true } }),
        json!("plain string"),
        json!(null),
        json!([{ "name": "Zoë" }, 4.5]),
    ];
    for body in bodies {
        let envelope = helpers.format_response(200, &body).expect("envelope");
        let decoded: Value = envelope.decode_body().expect("decode");
        assert_eq!(decoded, body);
    }
}

#[test]
fn format_response_keeps_non_ascii_literal() {
    let fixture = ConfigFixture::with_json(&sample_config());
    let envelope = helpers(&fixture)
        .format_response(200, &json!({ "message": "設定を読み込みました ✓" }))
        .expect("envelope");
    assert!(envelope.body.contains("設定を読み込みました ✓"));
}

#[test]
fn format_response_requires_version() {
    let fixture = ConfigFixture::with_json(&json!({ "common_settings": { "log_level": "INFO" } }));
    let err = helpers(&fixture)
        .format_response(200, &json!({}))
        .unwrap_err();
    assert!(matches!(
        err,
        HelperError::Config(ConfigError::KeyMissing(ref key)) if key == "version"
    ));
}

#[test]
fn format_response_rejects_unencodable_body() {
    let fixture = ConfigFixture::with_json(&sample_config());
    let body: BTreeMap<(u8, u8), &str> = BTreeMap::from([((1, 2), "tuple keys")]);
    let err = helpers(&fixture).format_response(200, &body).unwrap_err();
    assert!(matches!(err, HelperError::EncodeFailed(_)));
}

/// The log line is the configured level plus the message.
#[test]
fn log_info_writes_one_labelled_line() {
    let fixture = ConfigFixture::with_json(&json!({ "common_settings": { "log_level": "INFO" } }));
    let mut out = Vec::new();
    helpers(&fixture)
        .log_info_to(&mut out, "hello")
        .expect("log");
    assert_eq!(String::from_utf8(out).expect("utf8"), "[INFO] hello\n");
}

#[test]
fn log_info_requires_log_level() {
    for config in [
        json!({ "version": "1.0.0" }),
        json!({ "version": "1.0.0", "common_settings": {} }),
    ] {
        let fixture = ConfigFixture::with_json(&config);
        let mut out = Vec::new();
        let err = helpers(&fixture)
            .log_info_to(&mut out, "hello")
            .unwrap_err();
        assert!(matches!(
            err,
            HelperError::Config(ConfigError::KeyMissing(ref key)) if key == "common_settings.log_level"
        ));
        assert!(out.is_empty());
    }
}

/// Config edits are visible to the next call without rebuilding the helpers.
#[test]
fn every_call_rereads_config() {
    let fixture = ConfigFixture::with_json(&minimal_config("1.0.0", "INFO"));
    let helpers = helpers(&fixture);
    let first = helpers.format_response(200, &json!({})).expect("first");
    assert_eq!(first.version(), Some("1.0.0"));

    fixture.write_json(&minimal_config("1.1.0", "DEBUG"));
    let second = helpers.format_response(200, &json!({})).expect("second");
    assert_eq!(second.version(), Some("1.1.0"));

    let mut out = Vec::new();
    helpers.log_info_to(&mut out, "reloaded").expect("log");
    assert_eq!(String::from_utf8(out).expect("utf8"), "[DEBUG] reloaded\n");
}

#[test]
fn helpers_at_path_reads_custom_file_name() {
    let fixture = ConfigFixture::empty();
    let path = fixture.dir().join("handler-config.json");
    std::fs::write(&path, r#"{ "version": "9.9.9" }"#).expect("write");
    let envelope = Helpers::at(&path)
        .format_response(204, &Value::Null)
        .expect("envelope");
    assert_eq!(envelope.version(), Some("9.9.9"));
}
