//! Command-line access to the shared handler helpers.

use anyhow::Context;
use clap::{Parser, Subcommand};
use lambda_helpers::handler;
use lambda_helpers::version::get_version_info;
use lambda_helpers::{ConfigFile, Helpers};
use log::{debug, info};
use serde_json::Value;
use std::path::PathBuf;

/// Command-line options for the helpers tool.
#[derive(Parser)]
#[command(name = "lambda-helpers", version)]
struct Cli {
    /// Optional path to a config.json (defaults to the one beside this binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the loaded configuration
    Show,
    /// Print a top-level setting, or the default when it is absent
    Get {
        key: String,
        /// JSON value returned when the key is absent
        #[arg(long)]
        default: Option<String>,
    },
    /// Print the response envelope for a status code and JSON body
    Respond { status: i64, body: String },
    /// Print a log line labelled with the configured level
    Log { message: String },
    /// Run the reference handler with a local event
    Invoke {
        /// JSON event passed to the handler
        #[arg(long)]
        event: Option<String>,
        /// Request id reported in the response body
        #[arg(long)]
        request_id: Option<String>,
    },
    /// Print version information
    Version,
}

/// Entry point for the helpers CLI.
fn main() -> anyhow::Result<()> {
    lambda_helpers::init_logging();

    let cli = Cli::parse();
    let helpers = match cli.config.as_ref() {
        Some(path) => {
            info!("using config from path: {}", path.display());
            Helpers::new(ConfigFile::new(path))
        }
        None => Helpers::beside_executable().context("failed to locate config")?,
    };
    debug!("config path: {}", helpers.config_file().path().display());

    match cli.command {
        Command::Show => {
            let config = helpers.load_config().context("failed to load config")?;
            print_json(&config)?;
        }
        Command::Get { key, default } => {
            let default = match default {
                Some(raw) => parse_json_arg(&raw, "--default")?,
                None => Value::Null,
            };
            let value = helpers
                .get_setting(&key, default)
                .with_context(|| format!("failed to read setting {key}"))?;
            print_json(&value)?;
        }
        Command::Respond { status, body } => {
            let body = parse_json_arg(&body, "body")?;
            let envelope = helpers
                .format_response(status, &body)
                .context("failed to format response")?;
            print_json(&envelope)?;
        }
        Command::Log { message } => {
            helpers.log_info(&message).context("failed to log message")?;
        }
        Command::Invoke { event, request_id } => {
            let event = match event {
                Some(raw) => parse_json_arg(&raw, "--event")?,
                None => serde_json::json!({ "test": true, "source": "local" }),
            };
            info!("invoking reference handler (request_id_set={})", request_id.is_some());
            let envelope = handler::handle(&helpers, &event, request_id.as_deref())
                .context("handler failed")?;
            print_json(&envelope)?;
        }
        Command::Version => {
            print_json(&get_version_info())?;
        }
    }
    Ok(())
}

fn parse_json_arg(raw: &str, name: &str) -> anyhow::Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("{name} must be valid JSON"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
