//! HTTP gateway to the reservations backend.
//!
//! Thin JSON client over the backend REST API. Each request/response pair is
//! independent; the gateway carries no per-session state and can be shared
//! across call chains behind an `Arc`.

use crate::config::Settings;
use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use url::Url;

// Everything a path segment cannot carry raw. Includes '/' and '%' so a
// caller-supplied id can never splice extra segments into a route.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Percent-encode a caller-supplied value for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Failure talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Transport-level failure: connection refused, DNS, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status} for {path}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Request path, for diagnostics.
        path: String,
    },

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The configured base URL could not be parsed.
    #[error("invalid backend URL: {0}")]
    Url(String),
}

/// JSON client for the backend REST API.
#[derive(Debug)]
pub struct ApiGateway {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl ApiGateway {
    /// Gateway against `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Self::from_settings(&Settings {
            backend_api_url: base_url.to_string(),
            ..Settings::default()
        })
    }

    /// Gateway configured from [`Settings`].
    pub fn from_settings(settings: &Settings) -> Result<Self, GatewayError> {
        let base_url = Url::parse(settings.backend_api_url.trim_end_matches('/'))
            .map_err(|e| GatewayError::Url(e.to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key: settings.api_key.clone(),
        })
    }

    /// Base URL this gateway targets.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn apply_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("X-API-Key", key),
            None => request,
        }
    }

    async fn send(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, GatewayError> {
        let response = self
            .apply_headers(request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("backend returned {} for {}", status.as_u16(), path);
            return Err(GatewayError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        // Some mutations answer 204 with an empty body.
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&body).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    /// `GET` a path with no query string.
    pub async fn get(&self, path: &str) -> Result<Value, GatewayError> {
        debug!("GET {}", path);
        self.send(path, self.client.get(self.endpoint(path))).await
    }

    /// `GET` a path with query parameters.
    pub async fn get_with(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, GatewayError> {
        debug!("GET {} ({} params)", path, query.len());
        self.send(path, self.client.get(self.endpoint(path)).query(query))
            .await
    }

    /// `POST` a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        debug!("POST {}", path);
        self.send(path, self.client.post(self.endpoint(path)).json(body))
            .await
    }

    /// `PATCH` a JSON body.
    pub async fn patch(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        debug!("PATCH {}", path);
        self.send(path, self.client.patch(self.endpoint(path)).json(body))
            .await
    }

    /// `DELETE` a path.
    pub async fn delete(&self, path: &str) -> Result<Value, GatewayError> {
        debug!("DELETE {}", path);
        self.send(path, self.client.delete(self.endpoint(path)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn gateway_for(server: &MockServer) -> ApiGateway {
        ApiGateway::new(&server.uri()).unwrap()
    }

    // ===== Request shape tests =====

    #[tokio::test]
    async fn test_get_returns_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/restaurants/r-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "r-1"})))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let value = gateway.get("/api/v1/restaurants/r-1").await.unwrap();
        assert_eq!(value["id"], "r-1");
    }

    #[tokio::test]
    async fn test_get_with_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/restaurants"))
            .and(query_param("name", "Pizza Palace"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let value = gateway
            .get_with(
                "/api/v1/restaurants",
                &[
                    ("name", "Pizza Palace".to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .await
            .unwrap();
        assert!(value.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/reservations"))
            .and(body_json(json!({"partySize": 4})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "res-1"})))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let value = gateway
            .post("/api/v1/reservations", &json!({"partySize": 4}))
            .await
            .unwrap();
        assert_eq!(value["id"], "res-1");
    }

    #[tokio::test]
    async fn test_patch_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/v1/reservations/res-1/cancel"))
            .and(body_json(json!({"reason": "no show"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "res-1", "status": "cancelled"})),
            )
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let value = gateway
            .patch("/api/v1/reservations/res-1/cancel", &json!({"reason": "no show"}))
            .await
            .unwrap();
        assert_eq!(value["status"], "cancelled");
    }

    #[tokio::test]
    async fn test_api_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users"))
            .and(header("X-API-Key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let settings = Settings {
            backend_api_url: server.uri(),
            api_key: Some("secret".to_string()),
            ..Settings::default()
        };
        let gateway = ApiGateway::from_settings(&settings).unwrap();
        gateway.get("/api/v1/users").await.unwrap();
    }

    // ===== Failure mode tests =====

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/restaurants/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let err = gateway.get("/api/v1/restaurants/missing").await.unwrap_err();
        match err {
            GatewayError::Status { status, path } => {
                assert_eq!(status, 404);
                assert_eq!(path, "/api/v1/restaurants/missing");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_body_decodes_to_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/reservations/res-1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let value = gateway.delete("/api/v1/reservations/res-1").await.unwrap();
        assert!(value.is_null());
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/restaurants"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let err = gateway.get("/api/v1/restaurants").await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiGateway::new("not a url").unwrap_err();
        assert!(matches!(err, GatewayError::Url(_)));
    }

    // ===== Path segment encoding =====

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("res-1"), "res-1");
        assert_eq!(encode_path_segment("res 1"), "res%201");
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("50%"), "50%25");
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let gateway = ApiGateway::new("http://localhost:3000/").unwrap();
        assert_eq!(
            gateway.endpoint("/api/v1/users"),
            "http://localhost:3000/api/v1/users"
        );
        assert_eq!(
            gateway.endpoint("api/v1/users"),
            "http://localhost:3000/api/v1/users"
        );
    }
}
