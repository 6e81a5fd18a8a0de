use pagerduty_client::Client;
use pagerduty_client::models::AutomationActionsRunner;
use pagerduty_client::models::RunnerType;
use pagerduty_client::models::TeamReference;

use crate::action_cmd::AssociationArgs;
use crate::action_cmd::AssociationOp;
use crate::print_json;

/// Register and manage automation action runners.
#[derive(Debug, clap::Parser)]
pub struct RunnerCli {
    #[command(subcommand)]
    pub subcommand: RunnerSubcommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum RunnerSubcommand {
    /// Show a single runner.
    Get {
        /// Runner id.
        id: String,
    },

    /// Register a new runner.
    Create(CreateArgs),

    /// Update fields of an existing runner.
    Update(UpdateArgs),

    /// Delete a runner.
    Delete {
        /// Runner id.
        id: String,
    },

    /// Associate, inspect or dissociate a team.
    Team {
        #[command(subcommand)]
        op: AssociationOp,
    },
}

#[derive(Debug, clap::Parser)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    /// Usually `sidecar` or `runbook`.
    #[arg(long)]
    pub runner_type: RunnerType,

    #[arg(long)]
    pub description: Option<String>,

    /// Base URI of the Runbook Automation instance.
    #[arg(long, value_name = "URI")]
    pub runbook_base_uri: Option<String>,

    /// Runbook Automation API key. Never echoed back by the server.
    #[arg(long, env = "PAGERDUTY_RUNBOOK_API_KEY", hide_env_values = true)]
    pub runbook_api_key: Option<String>,

    /// Team to associate on creation. Repeatable.
    #[arg(long = "team", value_name = "TEAM_ID")]
    pub teams: Vec<String>,
}

#[derive(Debug, clap::Parser)]
pub struct UpdateArgs {
    /// Runner id.
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, value_name = "URI")]
    pub runbook_base_uri: Option<String>,

    #[arg(long, env = "PAGERDUTY_RUNBOOK_API_KEY", hide_env_values = true)]
    pub runbook_api_key: Option<String>,
}

impl CreateArgs {
    fn into_runner(self) -> AutomationActionsRunner {
        let mut runner = AutomationActionsRunner::new(self.name, self.runner_type);
        runner.description = self.description;
        runner.runbook_base_uri = self.runbook_base_uri;
        runner.runbook_api_key = self.runbook_api_key;
        runner.teams = self.teams.into_iter().map(TeamReference::new).collect();
        runner
    }
}

impl UpdateArgs {
    fn apply(self, mut current: AutomationActionsRunner) -> AutomationActionsRunner {
        if let Some(name) = self.name {
            current.name = name;
        }
        if let Some(description) = self.description {
            current.description = Some(description);
        }
        if let Some(uri) = self.runbook_base_uri {
            current.runbook_base_uri = Some(uri);
        }
        current.runbook_api_key = self.runbook_api_key;
        current.id = None;
        current.kind = None;
        current.status = None;
        current.privileges = None;
        current.creation_time = None;
        current.last_seen = None;
        current
    }
}

impl RunnerCli {
    pub async fn run(self, client: &Client) -> anyhow::Result<()> {
        let runners = client.automation_actions_runner();
        match self.subcommand {
            RunnerSubcommand::Get { id } => {
                let (runner, _) = runners.get(&id).await?;
                print_json(&runner)
            }
            RunnerSubcommand::Create(args) => {
                let (runner, _) = runners.create(&args.into_runner()).await?;
                tracing::info!("created runner {}", runner.id.as_deref().unwrap_or("<unknown>"));
                print_json(&runner)
            }
            RunnerSubcommand::Update(args) => {
                let id = args.id.clone();
                let (current, _) = runners.get(&id).await?;
                let (runner, _) = runners.update(&id, &args.apply(current)).await?;
                print_json(&runner)
            }
            RunnerSubcommand::Delete { id } => {
                runners.delete(&id).await?;
                Ok(())
            }
            RunnerSubcommand::Team { op } => match op {
                AssociationOp::Add(AssociationArgs {
                    owner_id,
                    target_id,
                }) => {
                    let (team, _) = runners.associate_to_team(&owner_id, &target_id).await?;
                    print_json(&team)
                }
                AssociationOp::Get(AssociationArgs {
                    owner_id,
                    target_id,
                }) => {
                    let (team, _) = runners.get_team_association(&owner_id, &target_id).await?;
                    print_json(&team)
                }
                AssociationOp::Remove(AssociationArgs {
                    owner_id,
                    target_id,
                }) => {
                    runners.dissociate_from_team(&owner_id, &target_id).await?;
                    Ok(())
                }
            },
        }
    }
}
