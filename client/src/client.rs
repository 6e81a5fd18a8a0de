use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::FROM;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::AutomationActionsActionService;
use crate::AutomationActionsRunnerService;
use crate::config::Config;
use crate::envelope;
use crate::envelope::Enveloped;
use crate::error::ApiError;
use crate::error::Error;
use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://api.pagerduty.com";

const ACCEPT_V2: &str = "application/vnd.pagerduty+json;version=2";
const DEFAULT_USER_AGENT: &str = concat!("pagerduty-rs/", env!("CARGO_PKG_VERSION"));

/// How the API token is presented in the `Authorization` header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// REST API key: `Token token=<key>`.
    #[default]
    Token,
    /// OAuth access token: `Bearer <token>`.
    Bearer,
}

/// What came back with a response besides the decoded payload.
#[derive(Clone, Debug)]
pub struct ResponseMeta {
    pub url: String,
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

/// Shared transport for every resource service. Cheap to clone; clones
/// share one connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
    authorization: Option<HeaderValue>,
    user_agent: Option<HeaderValue>,
    from: Option<HeaderValue>,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(base_url, http))
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http,
            authorization: None,
            user_agent: None,
            from: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let mut client = Self::with_http_client(config.base_url.clone(), builder.build()?);
        if let Some(token) = &config.token {
            client = match config.auth_scheme {
                AuthScheme::Token => client.with_token(token)?,
                AuthScheme::Bearer => client.with_bearer_token(token)?,
            };
        }
        if let Some(ua) = &config.user_agent {
            client = client.with_user_agent(ua)?;
        }
        if let Some(from) = &config.from {
            client = client.with_from(from)?;
        }
        Ok(client)
    }

    /// REST API key, sent as `Authorization: Token token=<key>`.
    pub fn with_token(mut self, token: impl AsRef<str>) -> Result<Self> {
        let value = format!("Token token={}", token.as_ref());
        self.authorization = Some(sensitive_header("token", &value)?);
        Ok(self)
    }

    /// OAuth access token, sent as `Authorization: Bearer <token>`.
    pub fn with_bearer_token(mut self, token: impl AsRef<str>) -> Result<Self> {
        let value = format!("Bearer {}", token.as_ref());
        self.authorization = Some(sensitive_header("token", &value)?);
        Ok(self)
    }

    pub fn with_user_agent(mut self, ua: impl AsRef<str>) -> Result<Self> {
        self.user_agent = Some(header_value("user_agent", ua.as_ref())?);
        Ok(self)
    }

    /// Email of the acting user, sent as the `From` header.
    pub fn with_from(mut self, email: impl AsRef<str>) -> Result<Self> {
        self.from = Some(header_value("from", email.as_ref())?);
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn automation_actions_action(&self) -> AutomationActionsActionService<'_> {
        AutomationActionsActionService::new(self)
    }

    pub fn automation_actions_runner(&self) -> AutomationActionsRunnerService<'_> {
        AutomationActionsRunnerService::new(self)
    }

    fn headers(&self) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V2));
        if let Some(ua) = &self.user_agent {
            h.insert(USER_AGENT, ua.clone());
        } else {
            h.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        }
        if let Some(auth) = &self.authorization {
            h.insert(AUTHORIZATION, auth.clone());
        }
        if let Some(from) = &self.from {
            h.insert(FROM, from.clone());
        }
        h
    }

    pub(crate) async fn get<T: Enveloped>(&self, path: &str) -> Result<(T, ResponseMeta)> {
        self.send_enveloped(Method::GET, path, None).await
    }

    pub(crate) async fn post<B: Enveloped, T: Enveloped>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(T, ResponseMeta)> {
        let body = envelope::wrap(body).map_err(Error::Encode)?;
        self.send_enveloped(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<B: Enveloped, T: Enveloped>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(T, ResponseMeta)> {
        let body = envelope::wrap(body).map_err(Error::Encode)?;
        self.send_enveloped(Method::PUT, path, Some(body)).await
    }

    /// DELETE with no expected payload; any 2xx counts as success.
    pub(crate) async fn delete(&self, path: &str) -> Result<ResponseMeta> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn send_enveloped<T: Enveloped>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(T, ResponseMeta)> {
        let meta = self.execute(method, path, body).await?;
        match envelope::unwrap::<T>(&meta.body) {
            Ok(value) => Ok((value, meta)),
            Err(source) => Err(Error::Decode {
                url: meta.url,
                body: meta.body,
                source,
            }),
        }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ResponseMeta> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");

        let mut req = self.http.request(method.clone(), &url).headers(self.headers());
        if let Some(body) = &body {
            req = req
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .json(body);
        }
        let res = req.send().await?;
        let status = res.status();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let body = res.text().await?;
        trace!("{method} {url} -> {status}; content-type={content_type}");

        if !status.is_success() {
            let err = ApiError::new(method, url, status, body);
            warn!("{err}");
            return Err(Error::Api(err));
        }
        Ok(ResponseMeta {
            url,
            status,
            content_type,
            body,
        })
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Config(format!("{field} is not a valid HTTP header value")))
}

/// Like [`header_value`], but marked sensitive and kept out of the error text.
fn sensitive_header(field: &str, value: &str) -> Result<HeaderValue> {
    let mut hv = header_value(field, value)?;
    hv.set_sensitive(true);
    Ok(hv)
}
