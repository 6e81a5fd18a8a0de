use pagerduty_client::StatusCode;
use pagerduty_client::models::AutomationActionsRunner;
use pagerduty_client::models::RunnerType;
use pagerduty_client::models::TeamReference;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_json;
use wiremock::matchers::method;
use wiremock::matchers::path;

use super::client_for;
use super::timestamp;

const RUNNER_ID: &str = "01DF4O9T1MDPYOUT7SUX9EXZ4R";

fn runner_body() -> serde_json::Value {
    json!({
        "runner": {
            "id": RUNNER_ID,
            "name": "Runner created by TF",
            "description": "Runner for the payments team",
            "runner_type": "runbook",
            "runbook_base_uri": "cat-cat",
            "status": "Configured",
            "creation_time": "2022-12-12T18:51:42.048162Z",
            "teams": [{"id": "PZ31N6S", "type": "team_reference"}],
            "privileges": {"permissions": ["read"]},
            "type": "runner"
        }
    })
}

#[tokio::test]
async fn create_runbook_runner_sends_api_key() -> anyhow::Result<()> {
    let mut input = AutomationActionsRunner::new("Runner created by TF", RunnerType::Runbook);
    input.description = Some("Runner for the payments team".to_string());
    input.runbook_base_uri = Some("cat-cat".to_string());
    input.runbook_api_key = Some("secret".to_string());
    input.teams = vec![TeamReference::new("PZ31N6S")];

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/automation_actions/runners"))
        .and(body_json(json!({
            "runner": {
                "name": "Runner created by TF",
                "description": "Runner for the payments team",
                "runner_type": "runbook",
                "runbook_base_uri": "cat-cat",
                "runbook_api_key": "secret",
                "teams": [{"id": "PZ31N6S", "type": "team_reference"}]
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(runner_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (created, meta) = client_for(&server)
        .automation_actions_runner()
        .create(&input)
        .await?;

    assert_eq!(meta.status, StatusCode::CREATED);
    assert_eq!(created.id.as_deref(), Some(RUNNER_ID));
    assert_eq!(created.runbook_api_key, None);
    assert_eq!(created.status.as_deref(), Some("Configured"));
    assert_eq!(
        created.creation_time,
        Some(timestamp("2022-12-12T18:51:42.048162Z"))
    );
    Ok(())
}

#[tokio::test]
async fn get_update_delete_runner() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let runner_path = format!("/automation_actions/runners/{RUNNER_ID}");
    Mock::given(method("GET"))
        .and(path(runner_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(runner_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(runner_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(runner_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(runner_path))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let runners = client.automation_actions_runner();

    let (runner, _) = runners.get(RUNNER_ID).await?;
    assert_eq!(runner.runner_type, RunnerType::Runbook);
    assert_eq!(runner.teams, vec![TeamReference::new("PZ31N6S")]);

    let (updated, _) = runners.update(RUNNER_ID, &runner).await?;
    assert_eq!(updated, runner);

    let meta = runners.delete(RUNNER_ID).await?;
    assert_eq!(meta.status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn runner_team_association() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let team = json!({"team": {"id": "PZ31N6S", "type": "team_reference"}});
    Mock::given(method("POST"))
        .and(path(format!("/automation_actions/runners/{RUNNER_ID}/teams")))
        .and(body_json(team.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(team.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/automation_actions/runners/{RUNNER_ID}/teams/PZ31N6S"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(team))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!(
            "/automation_actions/runners/{RUNNER_ID}/teams/PZ31N6S"
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let runners = client.automation_actions_runner();

    let (associated, _) = runners.associate_to_team(RUNNER_ID, "PZ31N6S").await?;
    assert_eq!(associated, TeamReference::new("PZ31N6S"));
    let (fetched, _) = runners.get_team_association(RUNNER_ID, "PZ31N6S").await?;
    assert_eq!(fetched, associated);
    runners.dissociate_from_team(RUNNER_ID, "PZ31N6S").await?;
    Ok(())
}
