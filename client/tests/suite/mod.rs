#![allow(clippy::expect_used, clippy::unwrap_used)]

use pagerduty_client::Client;
use wiremock::MockServer;

mod errors;
mod runners;

pub(crate) const ACTION_ID: &str = "01DF4OBNYKW84FS9CCYVYS1MOS";

pub(crate) fn client_for(server: &MockServer) -> Client {
    Client::new(server.uri())
        .unwrap()
        .with_token("test-token")
        .unwrap()
}

pub(crate) fn timestamp(raw: &str) -> chrono::DateTime<chrono::Utc> {
    raw.parse().unwrap()
}
