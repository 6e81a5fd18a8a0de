mod action_cmd;
mod runner_cmd;

use std::path::PathBuf;

use anyhow::Context;
use pagerduty_client::Client;
use pagerduty_client::config::Config;
use pagerduty_client::config::ConfigOverrides;
use pagerduty_client::config::find_pagerduty_home;
use serde::Serialize;

pub use action_cmd::ActionCli;
pub use runner_cmd::RunnerCli;

/// Manage PagerDuty automation actions and runners.
#[derive(Debug, clap::Parser)]
#[command(name = "pd", version)]
pub struct Cli {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Default, clap::Args)]
pub struct ConnectionArgs {
    /// API base URL. Overrides PAGERDUTY_BASE_URL and config.toml.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// REST API token. Overrides PAGERDUTY_TOKEN and config.toml.
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Email of the acting user, sent as the `From` header.
    #[arg(long, global = true, value_name = "EMAIL")]
    pub from: Option<String>,

    /// Directory holding config.toml. Defaults to $PAGERDUTY_HOME or ~/.pagerduty.
    #[arg(long, global = true, value_name = "DIR")]
    pub config_home: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Automation actions.
    Action(ActionCli),

    /// Automation action runners.
    Runner(RunnerCli),
}

impl ConnectionArgs {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let home = match &self.config_home {
            Some(home) => home.clone(),
            None => {
                find_pagerduty_home().context("failed to locate the PagerDuty home directory")?
            }
        };
        let flags = ConfigOverrides {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            from: self.from.clone(),
        };
        let config = Config::load(&home, flags.or(ConfigOverrides::from_env()))?;
        Ok(config)
    }
}

pub async fn run_main(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        connection,
        command,
    } = cli;

    let config = connection.load_config()?;
    if config.token.is_none() {
        tracing::warn!("no API token configured; requests will be unauthenticated");
    }
    let client = Client::from_config(&config)?;
    tracing::debug!("using base_url={}", client.base_url());

    match command {
        Command::Action(cmd) => cmd.run(&client).await,
        Command::Runner(cmd) => cmd.run(&client).await,
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
