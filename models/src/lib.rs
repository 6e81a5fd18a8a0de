//! Wire types for the PagerDuty automation actions API.
//!
//! Every optional field is an `Option` that is skipped on serialization, so
//! a field the caller never set is absent from the payload rather than sent
//! as an empty string.

mod action;
mod reference;
mod runner;

pub use action::ActionClassification;
pub use action::ActionType;
pub use action::AutomationActionsAction;
pub use action::AutomationActionsActionDataReference;
pub use action::AutomationActionsPrivileges;
pub use reference::ServiceReference;
pub use reference::TeamReference;
pub use reference::UserReference;
pub use runner::AutomationActionsRunner;
pub use runner::RunnerType;
