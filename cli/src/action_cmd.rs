use anyhow::bail;
use clap::ArgGroup;
use pagerduty_client::Client;
use pagerduty_client::models::ActionClassification;
use pagerduty_client::models::AutomationActionsAction;
use pagerduty_client::models::ServiceReference;
use pagerduty_client::models::TeamReference;

use crate::print_json;

/// Create, inspect and delete automation actions.
///
/// Subcommands:
/// - `get`: print an action as JSON
/// - `create`: create a script or process automation action
/// - `update`: change an action's name, description, classification or runner
/// - `delete`: delete an action
/// - `team`: manage the action's team associations
/// - `service`: manage the action's service associations
#[derive(Debug, clap::Parser)]
pub struct ActionCli {
    #[command(subcommand)]
    pub subcommand: ActionSubcommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum ActionSubcommand {
    /// Show a single action.
    Get(IdArgs),

    /// Create a new action.
    Create(CreateArgs),

    /// Update fields of an existing action.
    Update(UpdateArgs),

    /// Delete an action.
    Delete(IdArgs),

    /// Associate, inspect or dissociate a team.
    Team {
        #[command(subcommand)]
        op: AssociationOp,
    },

    /// Associate, inspect or dissociate a service.
    Service {
        #[command(subcommand)]
        op: AssociationOp,
    },
}

#[derive(Debug, clap::Parser)]
pub struct IdArgs {
    /// Action id.
    pub id: String,
}

#[derive(Debug, clap::Parser)]
#[command(group(ArgGroup::new("payload").required(true).args(["script", "job_id"])))]
pub struct CreateArgs {
    /// Display name of the action.
    #[arg(long)]
    pub name: String,

    /// Script body, for script actions.
    #[arg(long, conflicts_with = "job_id")]
    pub script: Option<String>,

    /// Interpreter used to run the script (e.g. `sh`).
    #[arg(long, requires = "script")]
    pub invocation_command: Option<String>,

    /// Process automation job id, for process automation actions.
    #[arg(long)]
    pub job_id: Option<String>,

    /// Arguments passed to the process automation job.
    #[arg(long, requires = "job_id")]
    pub job_arguments: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Usually `diagnostic` or `remediation`.
    #[arg(long)]
    pub classification: Option<ActionClassification>,

    /// Runner that executes the action.
    #[arg(long = "runner", value_name = "RUNNER_ID")]
    pub runner_id: Option<String>,

    /// Team to associate on creation. Repeatable.
    #[arg(long = "team", value_name = "TEAM_ID")]
    pub teams: Vec<String>,

    /// Service to associate on creation. Repeatable.
    #[arg(long = "service", value_name = "SERVICE_ID")]
    pub services: Vec<String>,
}

#[derive(Debug, clap::Parser)]
pub struct UpdateArgs {
    /// Action id.
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub classification: Option<ActionClassification>,

    #[arg(long = "runner", value_name = "RUNNER_ID")]
    pub runner_id: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
pub enum AssociationOp {
    /// Create the association.
    Add(AssociationArgs),

    /// Show the association.
    Get(AssociationArgs),

    /// Remove the association.
    Remove(AssociationArgs),
}

#[derive(Debug, clap::Parser)]
pub struct AssociationArgs {
    /// Id of the action (or runner).
    pub owner_id: String,

    /// Id of the team or service.
    pub target_id: String,
}

impl CreateArgs {
    fn into_action(self) -> anyhow::Result<AutomationActionsAction> {
        let mut action = match (self.script, self.job_id) {
            (Some(script), None) => {
                AutomationActionsAction::script(self.name, script, self.invocation_command)
            }
            (None, Some(job_id)) => {
                AutomationActionsAction::process_automation(self.name, job_id, self.job_arguments)
            }
            _ => bail!("exactly one of --script or --job-id is required"),
        };
        action.description = self.description;
        action.action_classification = self.classification;
        action.runner_id = self.runner_id;
        action.teams = self.teams.into_iter().map(TeamReference::new).collect();
        action.services = self.services.into_iter().map(ServiceReference::new).collect();
        Ok(action)
    }
}

impl UpdateArgs {
    /// Apply the requested changes to `current` and drop the fields the
    /// server owns, so the result can be sent back with PUT.
    fn apply(self, mut current: AutomationActionsAction) -> AutomationActionsAction {
        if let Some(name) = self.name {
            current.name = name;
        }
        if let Some(description) = self.description {
            current.description = Some(description);
        }
        if let Some(classification) = self.classification {
            current.action_classification = Some(classification);
        }
        if let Some(runner_id) = self.runner_id {
            current.runner_id = Some(runner_id);
            current.runner_type = None;
        }
        current.id = None;
        current.kind = None;
        current.privileges = None;
        current.creation_time = None;
        current.modify_time = None;
        current.last_run = None;
        current.last_run_by = None;
        current
    }
}

impl ActionCli {
    pub async fn run(self, client: &Client) -> anyhow::Result<()> {
        let actions = client.automation_actions_action();
        match self.subcommand {
            ActionSubcommand::Get(IdArgs { id }) => {
                let (action, _) = actions.get(&id).await?;
                print_json(&action)
            }
            ActionSubcommand::Create(args) => {
                let (action, _) = actions.create(&args.into_action()?).await?;
                tracing::info!("created action {}", action.id.as_deref().unwrap_or("<unknown>"));
                print_json(&action)
            }
            ActionSubcommand::Update(args) => {
                let id = args.id.clone();
                let (current, _) = actions.get(&id).await?;
                let (action, _) = actions.update(&id, &args.apply(current)).await?;
                print_json(&action)
            }
            ActionSubcommand::Delete(IdArgs { id }) => {
                actions.delete(&id).await?;
                Ok(())
            }
            ActionSubcommand::Team { op } => match op {
                AssociationOp::Add(a) => {
                    let (team, _) = actions.associate_to_team(&a.owner_id, &a.target_id).await?;
                    print_json(&team)
                }
                AssociationOp::Get(a) => {
                    let (team, _) = actions
                        .get_team_association(&a.owner_id, &a.target_id)
                        .await?;
                    print_json(&team)
                }
                AssociationOp::Remove(a) => {
                    actions
                        .dissociate_from_team(&a.owner_id, &a.target_id)
                        .await?;
                    Ok(())
                }
            },
            ActionSubcommand::Service { op } => match op {
                AssociationOp::Add(a) => {
                    let (service, _) = actions
                        .associate_to_service(&a.owner_id, &a.target_id)
                        .await?;
                    print_json(&service)
                }
                AssociationOp::Get(a) => {
                    let (service, _) = actions
                        .get_service_association(&a.owner_id, &a.target_id)
                        .await?;
                    print_json(&service)
                }
                AssociationOp::Remove(a) => {
                    actions
                        .dissociate_from_service(&a.owner_id, &a.target_id)
                        .await?;
                    Ok(())
                }
            },
        }
    }
}
