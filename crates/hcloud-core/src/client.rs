//! The authenticated HTTP transport.
//!
//! [`ApiClient`] performs one HTTP call per invocation: it builds the URL,
//! attaches the bearer token, classifies the response status and hands the
//! raw body back to the caller. It keeps no state across calls beyond the
//! configuration and the connection pool of the underlying HTTP client.

use crate::config::ClientConfig;
use crate::error::{ApiErrorBody, ApiErrorPayload, Error, Result};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("hcloud-rust/", env!("CARGO_PKG_VERSION"));

/// Builder for [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    token: SecretString,
    config: ClientConfig,
}

impl ApiClientBuilder {
    /// Create a builder holding the API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            config: ClientConfig::default(),
        }
    }

    /// Override the client configuration.
    #[must_use]
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<ApiClient> {
        let base_url = self.config.parse_api_url()?;

        let http = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(self.config.timeout())
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(ApiClient {
            http,
            base_url,
            token: self.token,
            per_page: self.config.per_page,
            max_pages: self.config.max_pages,
        })
    }
}

/// Asynchronous transport for the Hetzner Cloud API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: SecretString,
    per_page: u32,
    max_pages: u32,
}

impl ApiClient {
    /// Construct a client for the public API with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        ApiClientBuilder::new(token).build()
    }

    /// Construct a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        ApiClientBuilder::new(token).with_config(config).build()
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Results requested per page on listing endpoints.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Page budget for listing endpoints.
    #[must_use]
    pub const fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Issue a GET request and return the raw body.
    pub async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<String> {
        self.send::<()>(Method::GET, path, query, None).await
    }

    /// Issue a POST request with a JSON body and return the raw body.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    /// Issue a POST request without a body and return the raw body.
    pub async fn post_empty(&self, path: &str) -> Result<String> {
        self.send::<()>(Method::POST, path, &[], None).await
    }

    /// Issue a PUT request with a JSON body and return the raw body.
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    /// Issue a DELETE request and return the raw body.
    pub async fn delete(&self, path: &str) -> Result<String> {
        self.send::<()>(Method::DELETE, path, &[], None).await
    }

    /// GET a path and deserialize the response body.
    pub async fn get_json<T>(&self, path: &str, query: &[(&'static str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.get(path, query).await?;
        parse_body(path, &body)
    }

    /// POST a JSON body and deserialize the response body.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.post(path, body).await?;
        parse_body(path, &body)
    }

    /// POST without a body and deserialize the response body.
    pub async fn post_empty_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.post_empty(path).await?;
        parse_body(path, &body)
    }

    /// PUT a JSON body and deserialize the response body.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.put(path, body).await?;
        parse_body(path, &body)
    }

    /// DELETE a path and deserialize the response body.
    ///
    /// A no-content response deserializes as an empty object.
    pub async fn delete_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut body = self.delete(path).await?;
        if body.trim().is_empty() {
            body = "{}".to_string();
        }
        parse_body(path, &body)
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path)?;

        let mut request = self
            .http
            .request(method.clone(), url)
            .header("Accept", "application/json")
            .bearer_auth(self.token.expose_secret());

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(payload) = body {
            let raw = serde_json::to_string(payload)
                .map_err(|err| Error::Parse(format!("Failed to serialize request body: {err}")))?;
            request = request
                .header("Content-Type", "application/json")
                .body(raw);
        }

        debug!(%method, path, "sending API request");

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        classify_response(&method, status, text)
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined)
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid path `{path}`: {err}")))
    }
}

/// Map an HTTP response onto the success body or a classified failure.
///
/// Success is method-specific: GET and PUT expect 200, POST expects 201,
/// DELETE accepts 200 and 204. Any other status carries an error payload.
/// A "<resource> with ID <n> not found" message is rewritten to an empty
/// body instead of failing, so get-by-id on a missing resource reads as an
/// empty result.
fn classify_response(method: &Method, status: StatusCode, body: String) -> Result<String> {
    let success = if *method == Method::GET || *method == Method::PUT {
        status == StatusCode::OK
    } else if *method == Method::POST {
        status == StatusCode::CREATED
    } else if *method == Method::DELETE {
        status == StatusCode::OK || status == StatusCode::NO_CONTENT
    } else {
        status.is_success()
    };

    if success {
        return Ok(body);
    }

    let Ok(ApiErrorBody { error }) = serde_json::from_str::<ApiErrorBody>(&body) else {
        warn!(%status, "API returned non-JSON error body");
        return Err(Error::Api {
            code: status.as_u16().to_string(),
            message: body,
        });
    };

    let ApiErrorPayload { code, message } = error;

    if message.contains("with ID") && message.contains("not found") {
        debug!(code, message, "treating missing resource as empty result");
        return Ok("{}".to_string());
    }

    if message.contains("not found") {
        return Err(Error::ResourceNotFound { code, message });
    }

    warn!(%status, code, message, "API request failed");
    Err(Error::Api { code, message })
}

fn parse_body<T>(path: &str, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body)
        .map_err(|err| Error::Parse(format!("Failed to parse response for `{path}`: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> ApiClient {
        let config = ClientConfig::with_api_url(server.uri()).unwrap();
        ApiClient::with_config("test-token", config).unwrap()
    }

    #[tokio::test]
    async fn get_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/servers"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"servers":[]}"#))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let body = client.get("servers", &[]).await.unwrap();
        assert_eq!(body, r#"{"servers":[]}"#);
    }

    #[tokio::test]
    async fn get_appends_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/servers"))
            .and(query_param("name", "web-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let result = client
            .get("servers", &[("name", "web-1".to_string())])
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_id_is_rewritten_to_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/servers/123"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": "not_found", "message": "server with ID 123 not found"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let body = client.get("servers/123", &[]).await.unwrap();
        assert_eq!(body, "{}");
    }

    #[tokio::test]
    async fn plain_not_found_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/actions/7"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": "not_found", "message": "action not found"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let err = client.get("actions/7", &[]).await.unwrap_err();
        match err {
            Error::ResourceNotFound { code, .. } => assert_eq!(code, "not_found"),
            other => panic!("expected ResourceNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generic_error_carries_code_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/servers"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"code": "rate_limit_exceeded", "message": "too many requests"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let err = client.get("servers", &[]).await.unwrap_err();
        assert_eq!(
            err,
            Error::Api {
                code: "rate_limit_exceeded".to_string(),
                message: "too many requests".to_string()
            }
        );
    }

    #[tokio::test]
    async fn post_expects_created() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/networks"))
            .and(body_json(json!({"name": "net-1", "ip_range": "10.0.0.0/16"})))
            .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"network":{"id":1}}"#))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let body = client
            .post("networks", &json!({"name": "net-1", "ip_range": "10.0.0.0/16"}))
            .await
            .unwrap();
        assert!(body.contains("network"));
    }

    #[tokio::test]
    async fn post_with_ok_status_is_classified_as_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/networks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": {"code": "invalid_input", "message": "broken field"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let err = client.post("networks", &json!({})).await.unwrap_err();
        assert!(matches!(err, Error::Api { .. }));
    }

    #[tokio::test]
    async fn delete_accepts_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/networks/9"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        assert!(client.delete("networks/9").await.is_ok());
    }

    #[tokio::test]
    async fn non_json_error_body_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/servers"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let err = client.get("servers", &[]).await.unwrap_err();
        assert_eq!(
            err,
            Error::Api {
                code: "502".to_string(),
                message: "Bad Gateway".to_string()
            }
        );
    }

    #[tokio::test]
    async fn get_json_surfaces_parse_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/servers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let err = client
            .get_json::<serde_json::Value>("servers", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn build_url_joins_version_prefix() {
        let config = ClientConfig::with_api_url("https://api.example.com/v1").unwrap();
        let client = ApiClient::with_config("t", config).unwrap();
        let url = client.build_url("servers/1/actions/poweron").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/servers/1/actions/poweron"
        );
    }
}
