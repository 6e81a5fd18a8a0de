use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumString;

use crate::ServiceReference;
use crate::TeamReference;
use crate::UserReference;
use crate::runner::RunnerType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionType {
    Script,
    ProcessAutomation,
}

/// Open set: values this crate does not know yet decode into `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionClassification {
    Diagnostic,
    Remediation,
    #[serde(untagged)]
    #[strum(default)]
    Other(String),
}

/// Type-specific payload of an action.
///
/// Script actions populate `script` and `invocation_command`; process
/// automation actions populate the `process_automation_*` fields. The server
/// rejects a mismatched shape, so nothing here checks it against the owning
/// action's [`ActionType`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationActionsActionDataReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_automation_job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_automation_job_arguments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_automation_node_filter: Option<String>,
}

impl AutomationActionsActionDataReference {
    pub fn script(script: impl Into<String>, invocation_command: Option<String>) -> Self {
        Self {
            script: Some(script.into()),
            invocation_command,
            ..Default::default()
        }
    }

    pub fn process_automation(job_id: impl Into<String>, job_arguments: Option<String>) -> Self {
        Self {
            process_automation_job_id: Some(job_id.into()),
            process_automation_job_arguments: job_arguments,
            ..Default::default()
        }
    }

    /// True when only the fields belonging to `action_type` are populated.
    pub fn matches(&self, action_type: ActionType) -> bool {
        let has_script = self.script.is_some() || self.invocation_command.is_some();
        let has_job = self.process_automation_job_id.is_some()
            || self.process_automation_job_arguments.is_some()
            || self.process_automation_node_filter.is_some();
        match action_type {
            ActionType::Script => !has_job,
            ActionType::ProcessAutomation => !has_script,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationActionsPrivileges {
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A remediation action as exchanged with `/automation_actions/actions`.
///
/// `id`, the timestamps, `last_run_by` and `kind` are assigned by the server
/// and should be left as `None` when creating an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationActionsAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub action_type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_classification: Option<ActionClassification>,
    #[serde(default)]
    pub action_data_reference: AutomationActionsActionDataReference,
    #[serde(rename = "runner", default, skip_serializing_if = "Option::is_none")]
    pub runner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner_type: Option<RunnerType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privileges: Option<AutomationActionsPrivileges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run_by: Option<UserReference>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl AutomationActionsAction {
    pub fn new(
        name: impl Into<String>,
        action_type: ActionType,
        action_data_reference: AutomationActionsActionDataReference,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            action_type,
            action_classification: None,
            action_data_reference,
            runner_id: None,
            runner_type: None,
            teams: Vec::new(),
            services: Vec::new(),
            privileges: None,
            creation_time: None,
            modify_time: None,
            last_run: None,
            last_run_by: None,
            kind: None,
        }
    }

    pub fn script(
        name: impl Into<String>,
        script: impl Into<String>,
        invocation_command: Option<String>,
    ) -> Self {
        Self::new(
            name,
            ActionType::Script,
            AutomationActionsActionDataReference::script(script, invocation_command),
        )
    }

    pub fn process_automation(
        name: impl Into<String>,
        job_id: impl Into<String>,
        job_arguments: Option<String>,
    ) -> Self {
        Self::new(
            name,
            ActionType::ProcessAutomation,
            AutomationActionsActionDataReference::process_automation(job_id, job_arguments),
        )
    }
}
