//! The `{"<key>": <payload>}` wrapping used by every single-resource endpoint.

use pagerduty_models::AutomationActionsAction;
use pagerduty_models::AutomationActionsRunner;
use pagerduty_models::ServiceReference;
use pagerduty_models::TeamReference;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::de::Error as _;
use serde_json::Map;
use serde_json::Value;

/// A payload that travels wrapped under a fixed top-level key.
pub trait Enveloped: Serialize + DeserializeOwned {
    const ENVELOPE_KEY: &'static str;
}

impl Enveloped for AutomationActionsAction {
    const ENVELOPE_KEY: &'static str = "action";
}

impl Enveloped for AutomationActionsRunner {
    const ENVELOPE_KEY: &'static str = "runner";
}

impl Enveloped for TeamReference {
    const ENVELOPE_KEY: &'static str = "team";
}

impl Enveloped for ServiceReference {
    const ENVELOPE_KEY: &'static str = "service";
}

pub fn wrap<T: Enveloped>(value: &T) -> serde_json::Result<Value> {
    let mut map = Map::new();
    map.insert(T::ENVELOPE_KEY.to_string(), serde_json::to_value(value)?);
    Ok(Value::Object(map))
}

/// Decode `body` and pull the payload out from under `T::ENVELOPE_KEY`.
/// Sibling keys are ignored.
pub fn unwrap<T: Enveloped>(body: &str) -> serde_json::Result<T> {
    let mut value: Value = serde_json::from_str(body)?;
    let inner = value
        .get_mut(T::ENVELOPE_KEY)
        .map(Value::take)
        .ok_or_else(|| serde_json::Error::missing_field(T::ENVELOPE_KEY))?;
    serde_json::from_value(inner)
}
