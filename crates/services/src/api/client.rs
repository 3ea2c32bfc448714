use std::env;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::Endpoint;
use crate::error::ApiError;

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Immutable gateway configuration, fixed at construction.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `WELLCHECK_BASE_URL`; `None` when unset or blank.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("WELLCHECK_BASE_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        Some(Self { base_url })
    }
}

/// Which request pipeline a call goes through.
///
/// `Intercepted` carries the standard default header set; `Direct` is a bare
/// client with no defaults, for calls that must skip the cross-cutting
/// request handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Intercepted,
    Direct,
}

//
// ─── CLIENT ────────────────────────────────────────────────────────────────────
//

/// HTTP gateway to the survey backend.
///
/// Issues GET/POST calls against the configured base URL plus a named
/// [`Endpoint`], and normalizes error payloads for callers. No retries, no
/// timeouts, no caching.
#[derive(Clone)]
pub struct ApiClient {
    intercepted: Client,
    direct: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Builds both request pipelines from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let intercepted = Client::builder()
            .default_headers(standard_headers())
            .build()?;

        Ok(Self {
            intercepted,
            direct: Client::new(),
            config,
        })
    }

    fn http(&self, transport: Transport) -> &Client {
        match transport {
            Transport::Intercepted => &self.intercepted,
            Transport::Direct => &self.direct,
        }
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path()
        )
    }

    /// GET the endpoint and parse the JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Backend`/`MalformedErrorBody` for error statuses and
    /// `ApiError::Http` for transport or decode failures.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        transport: Transport,
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint);
        debug!(%endpoint, ?transport, "GET");

        let response = self.http(transport).get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// GET the endpoint with `param` appended to the path.
    ///
    /// # Errors
    ///
    /// Same failure classes as [`ApiClient::get`].
    pub async fn get_with_param<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        param: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{param}", self.endpoint_url(endpoint));
        debug!(%endpoint, param, "GET");

        let response = self.http(Transport::Intercepted).get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// POST a JSON body and return the full response envelope.
    ///
    /// The envelope carries the status and the raw text body; callers parse
    /// the text themselves.
    ///
    /// # Errors
    ///
    /// Same failure classes as [`ApiClient::get`].
    pub async fn post<B>(
        &self,
        endpoint: Endpoint,
        body: &B,
        transport: Transport,
    ) -> Result<ResponseEnvelope, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint);
        debug!(%endpoint, ?transport, "POST");

        let response = self.http(transport).post(url).json(body).send().await?;
        envelope(response).await
    }

    /// POST a JSON body to the endpoint with `param` appended to the path.
    ///
    /// # Errors
    ///
    /// Same failure classes as [`ApiClient::get`].
    pub async fn post_with_param<B>(
        &self,
        endpoint: Endpoint,
        param: &str,
        body: &B,
    ) -> Result<ResponseEnvelope, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{param}", self.endpoint_url(endpoint));
        debug!(%endpoint, param, "POST");

        let response = self
            .http(Transport::Intercepted)
            .post(url)
            .json(body)
            .send()
            .await?;
        envelope(response).await
    }
}

//
// ─── RESPONSE HANDLING ─────────────────────────────────────────────────────────
//

/// Status plus raw text body of a successful POST.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    pub status: StatusCode,
    pub body: String,
}

impl ResponseEnvelope {
    /// Parses the text body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json::Error` on malformed bodies.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

async fn envelope(response: Response) -> Result<ResponseEnvelope, ApiError> {
    let response = check_status(response).await?;
    let status = response.status();
    let body = response.text().await?;
    Ok(ResponseEnvelope { status, body })
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    warn!(%status, "backend returned an error status");
    let body = response.bytes().await?;
    Err(normalize_error(status, &body))
}

/// Decodes an error payload to text and parses it as JSON, so callers see the
/// backend's structured error value rather than raw bytes.
fn normalize_error(status: StatusCode, body: &[u8]) -> ApiError {
    let parsed = std::str::from_utf8(body)
        .ok()
        .and_then(|text| serde_json::from_str(text).ok());

    match parsed {
        Some(payload) => ApiError::Backend { status, payload },
        None => ApiError::MalformedErrorBody { status },
    }
}

fn standard_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    // Carried over from the browser-era client; servers ignore these.
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("http://localhost:4200"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, POST, PUT, DELETE"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        "Access-Control-Allow-Credentials",
        HeaderValue::from_static("true"),
    );
    headers
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(ApiConfig::new(base_url)).unwrap()
    }

    #[test]
    fn endpoint_url_joins_base_and_path() {
        let api = client("https://backend.example/api");
        assert_eq!(
            api.endpoint_url(Endpoint::TestData),
            "https://backend.example/api/getTestData"
        );
    }

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        let api = client("https://backend.example/api/");
        assert_eq!(
            api.endpoint_url(Endpoint::Login),
            "https://backend.example/api/login"
        );
    }

    #[test]
    fn error_payloads_are_surfaced_as_json() {
        let err = normalize_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"message":"answers missing"}"#,
        );

        match err {
            ApiError::Backend { status, payload } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(payload["message"], "answers missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_error_payloads_are_flagged() {
        let err = normalize_error(StatusCode::BAD_GATEWAY, b"<html>nope</html>");
        assert!(matches!(
            err,
            ApiError::MalformedErrorBody { status } if status == StatusCode::BAD_GATEWAY
        ));
    }

    #[test]
    fn envelope_json_parses_the_text_body() {
        let envelope = ResponseEnvelope {
            status: StatusCode::OK,
            body: r#"{"userId":3,"token":"t"}"#.into(),
        };
        let value: serde_json::Value = envelope.json().unwrap();
        assert_eq!(value["userId"], 3);
    }

    #[test]
    fn standard_headers_include_the_legacy_set() {
        let headers = standard_headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers["Access-Control-Allow-Credentials"], "true");
        assert_eq!(headers.len(), 5);
    }
}
