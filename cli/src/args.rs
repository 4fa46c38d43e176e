//! Command-line arguments for `checkers`.

use anyhow::{anyhow, Result};
use checkers_core::{CheckCreateRequest, CheckRunId, CheckUpdateRequest, ClientConfig};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(name = "checkers")]
#[command(about = "Create and update check runs through a Checkers server")]
#[command(
    version,
    after_help = "Example:\n  make_payload.sh | checkers create -n MyCheck -o SomeOrg -r SomeRepo --sha 1234567"
)]
pub struct Cli {
    /// URL for the Checkers server
    #[arg(short = 'u', long, env = "CHECKERS_URL", global = true)]
    pub url: Option<String>,

    /// Client access key
    #[arg(
        short = 'k',
        long = "client-key",
        alias = "client_key",
        env = "CHECKERS_CLIENT_KEY",
        hide_env_values = true,
        global = true
    )]
    pub client_key: Option<String>,

    /// Client access secret
    #[arg(
        short = 's',
        long = "client-secret",
        alias = "client_secret",
        env = "CHECKERS_CLIENT_SECRET",
        hide_env_values = true,
        global = true
    )]
    pub client_secret: Option<String>,

    /// Request timeout in seconds, 0 disables it
    #[arg(long, env = "CHECKERS_TIMEOUT", default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Increase log verbosity (fallback for CHECKERS_VERBOSITY)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a Check on a given org/repo/sha. Pass payload via stdin.
    Create(CreateArgs),
    /// Update an existing Check. Pass payload via stdin.
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// The name of the Check
    #[arg(short = 'n', long)]
    pub name: String,

    /// The owner/org of the repository to create the Check on
    #[arg(short = 'o', long, visible_alias = "org")]
    pub owner: String,

    /// The repository to create the Check on
    #[arg(short = 'r', long, visible_alias = "repository")]
    pub repo: String,

    /// The SHA of the commit to create the Check for
    #[arg(long)]
    pub sha: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// The owner/org of the repository the Check belongs to
    #[arg(short = 'o', long, visible_alias = "org")]
    pub owner: String,

    /// The repository the Check belongs to
    #[arg(short = 'r', long, visible_alias = "repository")]
    pub repo: String,

    /// The identifier of the existing check run
    #[arg(short = 'i', long, visible_alias = "check-id")]
    pub id: u64,
}

impl Cli {
    /// Build the client configuration, failing with the same hints the
    /// original tool printed for each missing value.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let url = required(
            self.url.as_deref(),
            "Missing URL argument. Pass via -u or in env as CHECKERS_URL.",
        )?;
        let client_key = required(
            self.client_key.as_deref(),
            "Missing client_key argument. Pass via -k or in env as CHECKERS_CLIENT_KEY.",
        )?;
        let client_secret = required(
            self.client_secret.as_deref(),
            "Missing client_secret argument. Pass via -s or in env as CHECKERS_CLIENT_SECRET.",
        )?;
        Ok(ClientConfig::new(url, client_key, client_secret)?)
    }
}

impl CreateArgs {
    pub fn into_request(self, payload: Value) -> CheckCreateRequest {
        CheckCreateRequest {
            owner: self.owner,
            repo: self.repo,
            sha: self.sha,
            check_name: self.name,
            payload,
        }
    }
}

impl UpdateArgs {
    pub fn into_request(self, payload: Value) -> CheckUpdateRequest {
        CheckUpdateRequest {
            owner: self.owner,
            repo: self.repo,
            check_run_id: CheckRunId::Number(self.id),
            payload,
        }
    }
}

fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| anyhow!(message.to_string()))
}
