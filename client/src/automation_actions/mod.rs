mod action;
mod runner;

pub use action::AutomationActionsActionService;
pub use runner::AutomationActionsRunnerService;

use crate::error::Error;
use crate::error::Result;

const ACTIONS_PATH: &str = "/automation_actions/actions";
const RUNNERS_PATH: &str = "/automation_actions/runners";

/// Validate and percent-encode one path segment.
fn segment(what: &str, id: &str) -> Result<String> {
    if id.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{what} id must not be empty")));
    }
    Ok(urlencoding::encode(id).into_owned())
}
