mod actions;
mod assign;
mod config;
mod dispatch;
mod error;
mod github;
#[cfg(test)]
mod testing;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::load_config;
use crate::dispatch::{Dispatcher, Outcome};
use crate::github::{Client, EventPayload, RepoContext};

#[derive(clap::Parser, Debug)]
#[command(version, about = "Assign issue users when a configured label is added or removed")]
struct Cli {
    #[arg(
        long,
        value_name = "TOKEN",
        env = "INPUT_GITHUB-TOKEN",
        hide_env_values = true,
        help = "Token used for GitHub API calls"
    )]
    github_token: Option<String>,
    #[arg(
        long,
        value_name = "PATH",
        env = "INPUT_CONFIGURATION-FILE",
        help = "Repository path of the label to users YAML mapping"
    )]
    configuration_file: Option<String>,
    #[arg(
        long,
        value_name = "OWNER/REPO",
        env = "GITHUB_REPOSITORY",
        help = "Repository the event belongs to"
    )]
    repository: Option<String>,
    #[arg(
        long,
        value_name = "FILE",
        env = "GITHUB_EVENT_PATH",
        help = "JSON file holding the webhook payload"
    )]
    event_path: Option<PathBuf>,
    #[arg(
        long,
        value_name = "URL",
        env = "GITHUB_API_URL",
        default_value = "https://api.github.com",
        help = "GitHub REST API base URL"
    )]
    api_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(outcome) => {
            tracing::info!(%outcome, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            actions::set_failed(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let Cli {
        github_token,
        configuration_file,
        repository,
        event_path,
        api_url,
    } = cli;

    let token = github::resolve_token(github_token.as_deref())?;
    let repo: RepoContext = repository
        .context("repository not set. Pass `--repository` or set `GITHUB_REPOSITORY`.")?
        .parse()?;
    let event_path = event_path
        .context("event payload not set. Pass `--event-path` or set `GITHUB_EVENT_PATH`.")?;

    let client = Client::new(&api_url, token, repo)?;
    let config = load_config(&client, configuration_file.as_deref().unwrap_or_default()).await?;
    let payload = EventPayload::from_file(&event_path)?;

    tracing::info!(
        repo = %client.repo(),
        action = ?payload.action,
        issue = ?payload.issue_number,
        label = ?payload.label_name,
        "dispatching event"
    );
    let outcome = Dispatcher::new(&client, config).run(&payload).await?;
    Ok(outcome)
}

fn init_tracing() {
    let default_level = if actions::runner_debug() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
