use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumString;

use crate::AutomationActionsPrivileges;
use crate::TeamReference;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunnerType {
    /// Agent installed in the customer's infrastructure.
    Sidecar,
    /// Hosted Runbook Automation instance.
    Runbook,
    /// A runner type added server-side after this crate was built.
    #[serde(untagged)]
    #[strum(default)]
    Other(String),
}

/// An execution environment registered under `/automation_actions/runners`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationActionsRunner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub runner_type: RunnerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runbook_base_uri: Option<String>,
    /// Write-only: the server never echoes the key back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runbook_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<TeamReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privileges: Option<AutomationActionsPrivileges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl AutomationActionsRunner {
    pub fn new(name: impl Into<String>, runner_type: RunnerType) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            runner_type,
            runbook_base_uri: None,
            runbook_api_key: None,
            status: None,
            teams: Vec::new(),
            privileges: None,
            creation_time: None,
            last_seen: None,
            kind: None,
        }
    }
}
