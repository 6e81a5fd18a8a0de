use pagerduty_models::AutomationActionsAction;
use pagerduty_models::ServiceReference;
use pagerduty_models::TeamReference;

use super::ACTIONS_PATH;
use super::segment;
use crate::client::Client;
use crate::client::ResponseMeta;
use crate::error::Result;

/// Operations on `/automation_actions/actions`.
///
/// Obtained from [`Client::automation_actions_action`]. Each call issues
/// exactly one request; nothing is retried or cached.
#[derive(Clone, Copy, Debug)]
pub struct AutomationActionsActionService<'a> {
    client: &'a Client,
}

impl<'a> AutomationActionsActionService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<(AutomationActionsAction, ResponseMeta)> {
        let path = format!("{ACTIONS_PATH}/{}", segment("action", id)?);
        self.client.get(&path).await
    }

    /// Create a new action. Not idempotent: every call creates a distinct
    /// resource. The returned action carries the server-assigned fields.
    pub async fn create(
        &self,
        action: &AutomationActionsAction,
    ) -> Result<(AutomationActionsAction, ResponseMeta)> {
        self.client.post(ACTIONS_PATH, action).await
    }

    pub async fn update(
        &self,
        id: &str,
        action: &AutomationActionsAction,
    ) -> Result<(AutomationActionsAction, ResponseMeta)> {
        let path = format!("{ACTIONS_PATH}/{}", segment("action", id)?);
        self.client.put(&path, action).await
    }

    pub async fn delete(&self, id: &str) -> Result<ResponseMeta> {
        let path = format!("{ACTIONS_PATH}/{}", segment("action", id)?);
        self.client.delete(&path).await
    }

    pub async fn associate_to_team(
        &self,
        action_id: &str,
        team_id: &str,
    ) -> Result<(TeamReference, ResponseMeta)> {
        let path = format!("{ACTIONS_PATH}/{}/teams", segment("action", action_id)?);
        segment("team", team_id)?;
        self.client.post(&path, &TeamReference::new(team_id)).await
    }

    pub async fn dissociate_from_team(&self, action_id: &str, team_id: &str) -> Result<ResponseMeta> {
        let path = team_path(action_id, team_id)?;
        self.client.delete(&path).await
    }

    pub async fn get_team_association(
        &self,
        action_id: &str,
        team_id: &str,
    ) -> Result<(TeamReference, ResponseMeta)> {
        let path = team_path(action_id, team_id)?;
        self.client.get(&path).await
    }

    pub async fn associate_to_service(
        &self,
        action_id: &str,
        service_id: &str,
    ) -> Result<(ServiceReference, ResponseMeta)> {
        let path = format!("{ACTIONS_PATH}/{}/services", segment("action", action_id)?);
        segment("service", service_id)?;
        self.client
            .post(&path, &ServiceReference::new(service_id))
            .await
    }

    pub async fn dissociate_from_service(
        &self,
        action_id: &str,
        service_id: &str,
    ) -> Result<ResponseMeta> {
        let path = service_path(action_id, service_id)?;
        self.client.delete(&path).await
    }

    pub async fn get_service_association(
        &self,
        action_id: &str,
        service_id: &str,
    ) -> Result<(ServiceReference, ResponseMeta)> {
        let path = service_path(action_id, service_id)?;
        self.client.get(&path).await
    }
}

fn team_path(action_id: &str, team_id: &str) -> Result<String> {
    Ok(format!(
        "{ACTIONS_PATH}/{}/teams/{}",
        segment("action", action_id)?,
        segment("team", team_id)?
    ))
}

fn service_path(action_id: &str, service_id: &str) -> Result<String> {
    Ok(format!(
        "{ACTIONS_PATH}/{}/services/{}",
        segment("action", action_id)?,
        segment("service", service_id)?
    ))
}
