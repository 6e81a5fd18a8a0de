//! Async client for the PagerDuty automation actions API.
//!
//! ```no_run
//! # async fn demo() -> pagerduty_client::Result<()> {
//! use pagerduty_client::Client;
//!
//! let client = Client::new("https://api.pagerduty.com")?.with_token("u+abcdef")?;
//! let (action, _meta) = client
//!     .automation_actions_action()
//!     .get("01DF4OBNYKW84FS9CCYVYS1MOS")
//!     .await?;
//! println!("{} ({})", action.name, action.action_type);
//! # Ok(())
//! # }
//! ```

mod automation_actions;
mod client;
pub mod config;
pub mod envelope;
mod error;

pub use automation_actions::AutomationActionsActionService;
pub use automation_actions::AutomationActionsRunnerService;
pub use client::AuthScheme;
pub use client::Client;
pub use client::DEFAULT_BASE_URL;
pub use client::ResponseMeta;
pub use error::ApiError;
pub use error::ApiErrorDetails;
pub use error::Error;
pub use error::Result;

pub use pagerduty_models as models;
pub use reqwest::StatusCode;
