//! Pipeline command handlers
//!
//! Handles the pipeline listing command: flag validation, the gate request,
//! decoding, and mapping the outcome to an exit status.

use clap::Subcommand;
use colored::*;
use gantry_client::{GateClient, GateRequester};
use gantry_core::domain::pipeline::PipelineConfig;
use gantry_core::{decode_pipeline_configs, encode_pipeline_configs};
use std::io::{self, Write};
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::error::{CommandError, EXIT_FAILURE, EXIT_SUCCESS};

/// Longest slice of an error response body echoed back to the user
const BODY_EXCERPT_LEN: usize = 512;

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// List the pipeline configs of an application
    List {
        /// Application whose pipelines to list
        #[arg(long)]
        application: Option<String>,
    },
}

/// Flags consumed by the list command
///
/// Both fields are optional at parse time so that a missing flag is reported
/// as a usage error by the command itself.
#[derive(Debug, Clone, Default)]
pub struct ListFlags {
    pub application: Option<String>,
    pub gate_endpoint: Option<String>,
}

impl ListFlags {
    /// Validate the flags, returning the application name and gate URL
    pub fn validate(&self) -> Result<(&str, Url), CommandError> {
        let application = self
            .application
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| CommandError::Usage("--application is required".to_string()))?;

        let endpoint = self
            .gate_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| CommandError::Usage("--gate-endpoint is required".to_string()))?;

        let url = Url::parse(endpoint).map_err(|e| {
            CommandError::Usage(format!("--gate-endpoint '{endpoint}' is not a valid URL: {e}"))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CommandError::Usage(format!(
                "--gate-endpoint '{endpoint}' must use http or https"
            )));
        }

        Ok((application, url))
    }
}

/// Handle pipeline commands
///
/// # Arguments
/// * `command` - The pipeline command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// The process exit status
pub async fn handle_pipeline_command(command: PipelineCommands, config: &Config) -> i32 {
    match command {
        PipelineCommands::List { application } => {
            let flags = ListFlags {
                application,
                gate_endpoint: config.gate_endpoint.clone(),
            };

            run_list(&flags, config, &mut io::stdout(), &mut io::stderr()).await
        }
    }
}

/// Run the list command with an HTTP client built from `config`
///
/// Flags are checked before the client is built, so a usage error is never
/// masked by a client setup failure.
async fn run_list(flags: &ListFlags, config: &Config, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    if let Err(e) = flags.validate() {
        return report(err, &e);
    }

    let client = match GateClient::from_config(&config.client_config()) {
        Ok(client) => client,
        Err(e) => return report(err, &CommandError::from(e)),
    };

    execute(flags, &client, out, err).await
}

/// Run the list command against a gate
///
/// On success the listing is written to `out` as a pretty JSON array and
/// `EXIT_SUCCESS` is returned. Any failure writes one diagnostic to `err` and
/// returns `EXIT_FAILURE`; nothing is written to `out` in that case.
pub async fn execute(
    flags: &ListFlags,
    requester: &dyn GateRequester,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    let rendered = match list_pipeline_configs(flags, requester).await {
        Ok(pipelines) => {
            info!(count = pipelines.len(), "listed pipeline configs");
            encode_pipeline_configs(&pipelines).map_err(CommandError::from)
        }
        Err(e) => Err(e),
    };

    match rendered.and_then(|listing| write_listing(out, &listing)) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report(err, &e),
    }
}

/// Validate, fetch and decode
async fn list_pipeline_configs(
    flags: &ListFlags,
    requester: &dyn GateRequester,
) -> Result<Vec<PipelineConfig>, CommandError> {
    let (application, endpoint) = flags.validate()?;
    debug!(application, endpoint = %endpoint, "listing pipeline configs");

    let response = requester.fetch(&endpoint, application).await?;

    if !response.is_success() {
        return Err(CommandError::Server {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        });
    }

    Ok(decode_pipeline_configs(&response.body)?)
}

fn write_listing(out: &mut dyn Write, listing: &str) -> Result<(), CommandError> {
    writeln!(out, "{listing}")?;
    out.flush()?;
    Ok(())
}

/// Print a diagnostic for a failed invocation
///
/// The first line names the error class. At most one indented detail line
/// follows it.
fn report(err: &mut dyn Write, error: &CommandError) -> i32 {
    info!(kind = error.kind(), error = %error, "pipeline list failed");

    let mut message = format!("{} {}\n", "✗".red().bold(), error);

    match error {
        CommandError::Usage(_) => {
            message.push_str(&format!(
                "  {}\n",
                "Usage: gantry pipeline list --application <APP> --gate-endpoint <URL>".dimmed()
            ));
        }
        CommandError::Transport(e) if e.is_timeout() => {
            message.push_str(&format!("  {}\n", "The request timed out.".dimmed()));
        }
        CommandError::Server { body, .. } if !body.trim().is_empty() => {
            let excerpt: String = body
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .chars()
                .take(BODY_EXCERPT_LEN)
                .collect();
            message.push_str(&format!("  Response: {}\n", excerpt.dimmed()));
        }
        _ => {}
    }

    // Nothing left to do if stderr itself is gone
    let _ = err.write_all(message.as_bytes());
    let _ = err.flush();

    EXIT_FAILURE
}
