//! Reference request handler built on the shared helpers.
//!
//! Shows the intended call pattern: load config, log through `log_info`,
//! build a body, and return it through `format_response`. Failures become
//! a 500 envelope; the error path itself needs a config with both
//! `common_settings.log_level` and `version`.

use crate::{HelperError, Helpers, ResponseEnvelope};
use log::warn;
use serde_json::{Value, json};

/// Request id reported when the invoker does not supply one.
pub const LOCAL_REQUEST_ID: &str = "local";

const GREETING: &str = "Hello from the shared helpers reference handler!";
const MANAGEMENT_TYPE: &str = "git subtree";
const LANGUAGE: &str = "Rust";

/// Handle one invocation and produce its response envelope.
pub fn handle(
    helpers: &Helpers,
    event: &Value,
    request_id: Option<&str>,
) -> Result<ResponseEnvelope, HelperError> {
    match respond(helpers, event, request_id) {
        Ok(envelope) => Ok(envelope),
        Err(err) => {
            let message = err.to_string();
            warn!("handler failed: {message}");
            helpers.log_info(&format!("Error occurred: {message}"))?;
            helpers.format_response(
                500,
                &json!({
                    "error": message,
                    "message": "Internal server error"
                }),
            )
        }
    }
}

fn respond(
    helpers: &Helpers,
    event: &Value,
    request_id: Option<&str>,
) -> Result<ResponseEnvelope, HelperError> {
    let config = helpers.load_config()?;
    helpers.log_info("Reference handler started")?;

    let request_id = request_id.unwrap_or(LOCAL_REQUEST_ID);
    let field = |key: &str| config.get(key).cloned().unwrap_or(Value::Null);
    let body = json!({
        "message": GREETING,
        "management_type": MANAGEMENT_TYPE,
        "language": LANGUAGE,
        "config": {
            "app_name": field("app_name"),
            "version": field("version"),
            "region": field("region"),
        },
        "request_id": request_id,
        "event": event,
    });

    helpers.log_info(&format!("Processing completed successfully: {request_id}"))?;
    helpers.format_response(200, &body)
}
