use serde_json::{Value, json};

/// Config shaped like a real deployment, including keys the helpers never read.
pub fn sample_config() -> Value {
    json!({
        "app_name": "subtree-app",
        "version": "1.0.0",
        "region": "us-east-1",
        "common_settings": {
            "timeout_seconds": 30,
            "memory_mb": 256,
            "log_level": "INFO"
        },
        "message": "Shared configuration for all handlers"
    })
}

/// Smallest config every helper accepts.
pub fn minimal_config(version: &str, log_level: &str) -> Value {
    json!({
        "version": version,
        "common_settings": { "log_level": log_level }
    })
}
