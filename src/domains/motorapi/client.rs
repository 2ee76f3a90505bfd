//! HTTP client for the MotorAPI.dk vehicle registry.
//!
//! Each lookup maps to exactly one outbound GET. Outcomes are normalized
//! into [`LookupResult`] values: a 404 becomes a resource-specific failure
//! message, any other HTTP error status or transport failure becomes a
//! failure carrying the underlying error text, and a 2xx body is parsed as
//! JSON and passed through verbatim. No error ever propagates out of this
//! client.

use std::time::Duration;

use reqwest::{StatusCode, header};
use tracing::{debug, warn};

use super::result::LookupResult;
use crate::core::config::MotorApiConfig;

/// Header carrying the API key on every request.
pub const AUTH_HEADER: &str = "X-AUTH-TOKEN";

/// Fixed per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for interacting with MotorAPI.dk.
#[derive(Clone)]
pub struct MotorApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MotorApiClient {
    /// Create a new client for the configured endpoint.
    pub fn new(config: &MotorApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get vehicle details by registration number or VIN.
    pub async fn vehicle(&self, reg_no_or_vin: &str) -> LookupResult {
        self.get(
            &format!("vehicles/{reg_no_or_vin}"),
            Some(format!("Vehicle not found: {reg_no_or_vin}")),
        )
        .await
    }

    /// Get environmental details for a vehicle.
    pub async fn environment(&self, reg_no_or_vin: &str) -> LookupResult {
        self.get(
            &format!("vehicles/{reg_no_or_vin}/environment"),
            Some(format!("Environmental data not found for: {reg_no_or_vin}")),
        )
        .await
    }

    /// Get equipment details for a vehicle.
    pub async fn equipment(&self, reg_no_or_vin: &str) -> LookupResult {
        self.get(
            &format!("vehicles/{reg_no_or_vin}/equipment"),
            Some(format!("Equipment data not found for: {reg_no_or_vin}")),
        )
        .await
    }

    /// Get API usage statistics.
    pub async fn usage(&self) -> LookupResult {
        self.get("usage", None).await
    }

    /// Perform one GET against the registry and normalize the outcome.
    ///
    /// `not_found` is the failure message for a 404; operations without a
    /// dedicated not-found message fall through to the generic status path.
    async fn get(&self, path: &str, not_found: Option<String>) -> LookupResult {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}", url);

        let response = match self
            .client
            .get(&url)
            .header(AUTH_HEADER, self.api_key.as_str())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return LookupResult::failure(e.to_string());
            }
        };

        if response.status() == StatusCode::NOT_FOUND {
            if let Some(message) = not_found {
                return LookupResult::failure(message);
            }
        }

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return LookupResult::failure(e.to_string());
            }
        };

        match response.json::<serde_json::Value>().await {
            Ok(payload) => LookupResult::Payload(payload),
            Err(e) => {
                warn!("Response from {} was not valid JSON: {}", url, e);
                LookupResult::failure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> MotorApiClient {
        MotorApiClient::new(&MotorApiConfig {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
        })
    }

    #[tokio::test]
    async fn test_vehicle_payload_passthrough() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vehicles/AB12345"))
            .and(header(AUTH_HEADER, "test-key"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "registration": "AB12345",
                "make": "Toyota"
            })))
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).vehicle("AB12345").await;
        assert_eq!(
            result,
            LookupResult::Payload(json!({"registration": "AB12345", "make": "Toyota"}))
        );
    }

    #[tokio::test]
    async fn test_vehicle_not_found_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vehicles/XX00000"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).vehicle("XX00000").await;
        assert_eq!(result, LookupResult::failure("Vehicle not found: XX00000"));
    }

    #[tokio::test]
    async fn test_environment_not_found_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vehicles/XX00000/environment"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).environment("XX00000").await;
        assert_eq!(
            result,
            LookupResult::failure("Environmental data not found for: XX00000")
        );
    }

    #[tokio::test]
    async fn test_equipment_not_found_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vehicles/XX00000/equipment"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).equipment("XX00000").await;
        assert_eq!(
            result,
            LookupResult::failure("Equipment data not found for: XX00000")
        );
    }

    #[tokio::test]
    async fn test_usage_has_no_not_found_branch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/usage"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).usage().await;
        match result {
            LookupResult::Failure(failure) => {
                assert!(failure.error.contains("404"));
                assert!(!failure.error.contains("not found for"));
            }
            LookupResult::Payload(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_usage_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/usage"))
            .and(header(AUTH_HEADER, "test-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"requests": 12, "limit": 100})),
            )
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).usage().await;
        assert_eq!(
            result,
            LookupResult::Payload(json!({"requests": 12, "limit": 100}))
        );
    }

    #[tokio::test]
    async fn test_server_error_becomes_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vehicles/AB12345"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).vehicle("AB12345").await;
        match result {
            LookupResult::Failure(failure) => assert!(failure.error.contains("500")),
            LookupResult::Payload(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vehicles/AB12345"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("not json at all", "application/json"),
            )
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).vehicle("AB12345").await;
        assert!(result.is_failure());
    }

    #[tokio::test]
    async fn test_unreachable_host_becomes_failure() {
        // Port 1 is never bound in the test environment
        let result = test_client("http://127.0.0.1:1").vehicle("AB12345").await;
        assert!(result.is_failure());
    }
}
