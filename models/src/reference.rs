use serde::Deserialize;
use serde::Serialize;

pub(crate) const TEAM_REFERENCE: &str = "team_reference";
pub(crate) const SERVICE_REFERENCE: &str = "service_reference";
pub(crate) const USER_REFERENCE: &str = "user_reference";

/// A `{type, id}` pointer to a team owned by the teams API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamReference {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl TeamReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: TEAM_REFERENCE.to_string(),
            id: id.into(),
        }
    }
}

/// A `{type, id}` pointer to a service owned by the services API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReference {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ServiceReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: SERVICE_REFERENCE.to_string(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReference {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl UserReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: USER_REFERENCE.to_string(),
            id: id.into(),
        }
    }
}
