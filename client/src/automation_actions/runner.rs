use pagerduty_models::AutomationActionsRunner;
use pagerduty_models::TeamReference;

use super::RUNNERS_PATH;
use super::segment;
use crate::client::Client;
use crate::client::ResponseMeta;
use crate::error::Result;

/// Operations on `/automation_actions/runners`.
#[derive(Clone, Copy, Debug)]
pub struct AutomationActionsRunnerService<'a> {
    client: &'a Client,
}

impl<'a> AutomationActionsRunnerService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<(AutomationActionsRunner, ResponseMeta)> {
        let path = format!("{RUNNERS_PATH}/{}", segment("runner", id)?);
        self.client.get(&path).await
    }

    pub async fn create(
        &self,
        runner: &AutomationActionsRunner,
    ) -> Result<(AutomationActionsRunner, ResponseMeta)> {
        self.client.post(RUNNERS_PATH, runner).await
    }

    pub async fn update(
        &self,
        id: &str,
        runner: &AutomationActionsRunner,
    ) -> Result<(AutomationActionsRunner, ResponseMeta)> {
        let path = format!("{RUNNERS_PATH}/{}", segment("runner", id)?);
        self.client.put(&path, runner).await
    }

    pub async fn delete(&self, id: &str) -> Result<ResponseMeta> {
        let path = format!("{RUNNERS_PATH}/{}", segment("runner", id)?);
        self.client.delete(&path).await
    }

    pub async fn associate_to_team(
        &self,
        runner_id: &str,
        team_id: &str,
    ) -> Result<(TeamReference, ResponseMeta)> {
        let path = format!("{RUNNERS_PATH}/{}/teams", segment("runner", runner_id)?);
        segment("team", team_id)?;
        self.client.post(&path, &TeamReference::new(team_id)).await
    }

    pub async fn dissociate_from_team(&self, runner_id: &str, team_id: &str) -> Result<ResponseMeta> {
        let path = team_path(runner_id, team_id)?;
        self.client.delete(&path).await
    }

    pub async fn get_team_association(
        &self,
        runner_id: &str,
        team_id: &str,
    ) -> Result<(TeamReference, ResponseMeta)> {
        let path = team_path(runner_id, team_id)?;
        self.client.get(&path).await
    }
}

fn team_path(runner_id: &str, team_id: &str) -> Result<String> {
    Ok(format!(
        "{RUNNERS_PATH}/{}/teams/{}",
        segment("runner", runner_id)?,
        segment("team", team_id)?
    ))
}
