use pagerduty_client::ApiErrorDetails;
use pagerduty_client::AuthScheme;
use pagerduty_client::Client;
use pagerduty_client::Error;
use pagerduty_client::StatusCode;
use pagerduty_client::config::Config;
use pagerduty_client::models::AutomationActionsAction;
use pretty_assertions::assert_eq;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::any;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;

use super::ACTION_ID;
use super::client_for;

#[tokio::test]
async fn api_error_carries_status_and_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/automation_actions/actions"))
        .respond_with(ResponseTemplate::new(400).set_body_raw(
            r#"{"error":{"message":"Invalid Input Provided","code":2001,"errors":["Name can't be blank"]}}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let action = AutomationActionsAction::script("", "uptime", None);
    let err = client_for(&server)
        .automation_actions_action()
        .create(&action)
        .await
        .unwrap_err();

    let api = match err {
        Error::Api(api) => api,
        other => panic!("expected an API error, got {other:?}"),
    };
    assert_eq!(api.status, StatusCode::BAD_REQUEST);
    assert_eq!(api.method, reqwest::Method::POST);
    assert_eq!(
        api.details,
        Some(ApiErrorDetails {
            code: Some(2001),
            message: Some("Invalid Input Provided".to_string()),
            errors: vec!["Name can't be blank".to_string()],
        })
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/automation_actions/actions/{ACTION_ID}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"action":{"name":42}}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .automation_actions_action()
        .get(ACTION_ID)
        .await
        .unwrap_err();

    match err {
        Error::Decode { url, body, .. } => {
            assert!(url.ends_with(ACTION_ID), "{url}");
            assert_eq!(body, r#"{"action":{"name":42}}"#);
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_envelope_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"runner":{}}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .automation_actions_action()
        .get(ACTION_ID)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "{err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new(format!("http://{addr}")).unwrap();
    let err = client
        .automation_actions_action()
        .get(ACTION_ID)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn empty_id_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let actions = client.automation_actions_action();

    assert!(matches!(
        actions.get("").await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        actions.delete(" ").await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        actions.associate_to_team(ACTION_ID, "").await,
        Err(Error::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn client_from_config_applies_headers() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/automation_actions/actions/{ACTION_ID}")))
        .and(header("authorization", "Bearer oauth-token"))
        .and(header("from", "ops@example.com"))
        .and(header("user-agent", "custom-agent/1.0"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        base_url: format!("{}/", server.uri()),
        token: Some("oauth-token".to_string()),
        auth_scheme: AuthScheme::Bearer,
        user_agent: Some("custom-agent/1.0".to_string()),
        from: Some("ops@example.com".to_string()),
        request_timeout: Some(std::time::Duration::from_secs(5)),
    };
    let client = Client::from_config(&config).unwrap();
    client
        .automation_actions_action()
        .delete(ACTION_ID)
        .await
        .unwrap();
}

#[tokio::test]
async fn invalid_token_in_config_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let config = Config {
        base_url: server.uri(),
        token: Some("abc\ndef".to_string()),
        ..Config::default()
    };
    let err = Client::from_config(&config).unwrap_err();

    assert!(matches!(err, Error::Config(_)), "{err:?}");
}
