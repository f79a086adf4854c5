//! HTTP client for the legacy device registry.
//!
//! Wraps `reqwest::Client` with registry-specific URL construction, payload
//! translation, and status-code interpretation. The registry is the system of
//! record for devices; this client only ever creates or reads them.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use homelink_app::ports::DeviceRegistry;
use homelink_domain::error::{HomeLinkError, RegistryError};
use homelink_domain::id::ServiceId;
use homelink_domain::sensor::{SensorDetail, SensorDraft};

use crate::config::RegistryConfig;

/// The registry ignores the caller-declared unit; every device it provisions
/// reports Celsius.
const REGISTRY_UNIT: &str = "°C";

/// Creation payload in the registry's schema.
#[derive(Serialize)]
struct RegistryDeviceRequest<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    sensor_type: String,
    location: &'a str,
    unit: &'a str,
}

/// The registry's answer to a successful device creation.
#[derive(Deserialize)]
struct RegistryDeviceResponse {
    id: i64,
}

/// Failure to construct the client from configuration.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The configured base URL is not a valid URL.
    #[error("invalid registry base URL")]
    BaseUrl(#[from] url::ParseError),
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Http(#[from] reqwest::Error),
}

impl RegistryConfig {
    /// Build an [`HttpDeviceRegistry`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the base URL does not parse or the HTTP
    /// client cannot be constructed.
    pub fn build(&self) -> Result<HttpDeviceRegistry, BuildError> {
        let base_url = Url::parse(&self.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;
        Ok(HttpDeviceRegistry::with_client(http, base_url))
    }
}

/// Registry-backed implementation of the [`DeviceRegistry`] port.
pub struct HttpDeviceRegistry {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpDeviceRegistry {
    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// The timeout policy of `http` is taken as-is; [`RegistryConfig::build`]
    /// is the constructor that applies the configured per-call timeout.
    #[must_use]
    pub fn with_client(http: reqwest::Client, mut base_url: Url) -> Self {
        // Url::join treats the last path segment as a file unless the path
        // ends with a slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        Self { http, base_url }
    }

    fn sensors_url(&self) -> String {
        format!("{}api/v1/sensors", self.base_url)
    }

    fn sensor_url(&self, service_id: ServiceId) -> String {
        format!("{}api/v1/sensors/{service_id}", self.base_url)
    }
}

/// Translate a client-declared sensor type into the registry's vocabulary.
///
/// The registry expects lower-case types and knows every temperature-ish
/// declaration (e.g. `"TEMPERATURE_SENSOR"`) as plain `"temperature"`. Other
/// types pass through lower-cased, unnormalized.
fn registry_sensor_type(declared: &str) -> String {
    let lowered = declared.to_lowercase();
    if lowered.contains("temperature") {
        "temperature".to_string()
    } else {
        lowered
    }
}

impl DeviceRegistry for HttpDeviceRegistry {
    async fn register(&self, draft: &SensorDraft) -> Result<ServiceId, HomeLinkError> {
        let body = RegistryDeviceRequest {
            name: &draft.name,
            sensor_type: registry_sensor_type(&draft.sensor_type),
            location: &draft.location,
            unit: REGISTRY_UNIT,
        };

        let response = self
            .http
            .post(self.sensors_url())
            .json(&body)
            .send()
            .await
            .map_err(|err| RegistryError::Unavailable(Box::new(err)))?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(RegistryError::Rejected {
                status: status.as_u16(),
            }
            .into());
        }

        let created: RegistryDeviceResponse = response
            .json()
            .await
            .map_err(|err| RegistryError::Decode(Box::new(err)))?;

        tracing::debug!(service_id = created.id, "registered device in registry");
        Ok(ServiceId::from_i64(created.id))
    }

    async fn fetch(&self, service_id: ServiceId) -> Result<SensorDetail, HomeLinkError> {
        let response = self
            .http
            .get(self.sensor_url(service_id))
            .send()
            .await
            .map_err(|err| RegistryError::Unavailable(Box::new(err)))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return Err(RegistryError::NotFound { service_id }.into());
            }
            status => {
                return Err(RegistryError::Rejected {
                    status: status.as_u16(),
                }
                .into());
            }
        }

        let detail = response
            .json()
            .await
            .map_err(|err| RegistryError::Decode(Box::new(err)))?;

        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, HttpDeviceRegistry) {
        let server = MockServer::start().await;
        let registry = RegistryConfig {
            base_url: server.uri(),
            timeout_secs: 10,
        }
        .build()
        .unwrap();
        (server, registry)
    }

    fn draft() -> SensorDraft {
        SensorDraft::new("Kitchen Temp", "TEMPERATURE_SENSOR", "Kitchen")
    }

    #[test]
    fn should_normalize_temperature_types_to_canonical_form() {
        assert_eq!(registry_sensor_type("TEMPERATURE_SENSOR"), "temperature");
        assert_eq!(registry_sensor_type("Indoor-Temperature"), "temperature");
        assert_eq!(registry_sensor_type("temperature"), "temperature");
    }

    #[test]
    fn should_only_lowercase_other_types() {
        assert_eq!(registry_sensor_type("MOTION_SENSOR"), "motion_sensor");
        assert_eq!(registry_sensor_type("Humidity"), "humidity");
    }

    #[tokio::test]
    async fn should_translate_payload_and_decode_assigned_id() {
        let (server, registry) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/sensors"))
            .and(body_json(json!({
                "name": "Kitchen Temp",
                "type": "temperature",
                "location": "Kitchen",
                "unit": "°C"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 42 })))
            .mount(&server)
            .await;

        let service_id = registry.register(&draft()).await.unwrap();
        assert_eq!(service_id, ServiceId::from_i64(42));
    }

    #[tokio::test]
    async fn should_accept_registration_on_plain_200() {
        let (server, registry) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/sensors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 7 })))
            .mount(&server)
            .await;

        let service_id = registry.register(&draft()).await.unwrap();
        assert_eq!(service_id, ServiceId::from_i64(7));
    }

    #[tokio::test]
    async fn should_report_rejected_when_registration_returns_error_status() {
        let (server, registry) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/sensors"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = registry.register(&draft()).await;
        assert!(matches!(
            result,
            Err(HomeLinkError::Registry(RegistryError::Rejected {
                status: 500
            }))
        ));
    }

    #[tokio::test]
    async fn should_report_decode_error_when_creation_body_is_malformed() {
        let (server, registry) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/sensors"))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = registry.register(&draft()).await;
        assert!(matches!(
            result,
            Err(HomeLinkError::Registry(RegistryError::Decode(_)))
        ));
    }

    #[tokio::test]
    async fn should_report_unavailable_when_registry_is_unreachable() {
        // Port 1 is never listening.
        let registry = RegistryConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        }
        .build()
        .unwrap();

        let result = registry.register(&draft()).await;
        assert!(matches!(
            result,
            Err(HomeLinkError::Registry(RegistryError::Unavailable(_)))
        ));
    }

    #[tokio::test]
    async fn should_report_unavailable_when_call_exceeds_timeout() {
        let server = MockServer::start().await;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let registry = HttpDeviceRegistry::with_client(http, Url::parse(&server.uri()).unwrap());

        Mock::given(method("GET"))
            .and(path("/api/v1/sensors/5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(500))
                    .set_body_json(json!({})),
            )
            .mount(&server)
            .await;

        let result = registry.fetch(ServiceId::from_i64(5)).await;
        assert!(matches!(
            result,
            Err(HomeLinkError::Registry(RegistryError::Unavailable(_)))
        ));
    }

    #[tokio::test]
    async fn should_decode_sensor_detail_on_fetch() {
        let (server, registry) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/sensors/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 42,
                "name": "Kitchen Temp",
                "type": "temperature",
                "location": "Kitchen",
                "value": 21.5,
                "unit": "°C",
                "status": "active",
                "last_updated": "2024-06-15T10:30:00Z"
            })))
            .mount(&server)
            .await;

        let detail = registry.fetch(ServiceId::from_i64(42)).await.unwrap();
        assert_eq!(detail.id, ServiceId::from_i64(42));
        assert_eq!(detail.name, "Kitchen Temp");
        assert_eq!(detail.unit, "°C");
        assert_eq!(detail.status, "active");
    }

    #[tokio::test]
    async fn should_report_not_found_when_registry_does_not_know_the_device() {
        let (server, registry) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/sensors/9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = registry.fetch(ServiceId::from_i64(9)).await;
        assert!(matches!(
            result,
            Err(HomeLinkError::Registry(RegistryError::NotFound { service_id }))
                if service_id == ServiceId::from_i64(9)
        ));
    }

    #[tokio::test]
    async fn should_report_rejected_on_other_fetch_statuses() {
        let (server, registry) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/sensors/9"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = registry.fetch(ServiceId::from_i64(9)).await;
        assert!(matches!(
            result,
            Err(HomeLinkError::Registry(RegistryError::Rejected {
                status: 503
            }))
        ));
    }

    #[tokio::test]
    async fn should_report_decode_error_when_detail_body_is_malformed() {
        let (server, registry) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/sensors/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "nope" })))
            .mount(&server)
            .await;

        let result = registry.fetch(ServiceId::from_i64(9)).await;
        assert!(matches!(
            result,
            Err(HomeLinkError::Registry(RegistryError::Decode(_)))
        ));
    }
}
