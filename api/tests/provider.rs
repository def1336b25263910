//! Integration tests for the rate provider against a local mock service.

use api::config::ApiCredential;
use api::config::RateServiceConfig;
use api::convert;
use api::currency::Currency;
use api::error::RateError;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

fn config_for(server: &MockServer) -> RateServiceConfig {
    RateServiceConfig::new(ApiCredential::Key("test-key".to_string()))
        .with_base_url(server.uri())
}

#[tokio::test]
async fn success_envelope_builds_a_catalog_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v6/test-key/latest/USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "conversion_rates": {
                "USD": 1.0,
                "EUR": 0.90,
                "JPY": 147.3,
                // Not in the catalog; must be dropped, not an error.
                "XAU": 0.00049,
            }
        })))
        .mount(&server)
        .await;

    let table = api::latest_rates(&config_for(&server), Currency::USD)
        .await
        .unwrap();

    assert_eq!(table.base(), Currency::USD);
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(Currency::EUR), Some(0.90));
    assert_eq!(table.get(Currency::JPY), Some(147.3));
    assert_eq!(table.get(Currency::SN), None);
}

#[tokio::test]
async fn fetched_rates_drive_both_recompute_directions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v6/test-key/latest/USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "conversion_rates": { "EUR": 0.90 }
        })))
        .mount(&server)
        .await;

    let table = api::latest_rates(&config_for(&server), Currency::USD)
        .await
        .unwrap();
    let rate = table.get(Currency::EUR).unwrap();

    // The user types 10 USD; the paired field shows 9.00 EUR.
    assert_eq!(convert::forward("10", rate), Some("9.00".to_string()));
    // The user instead types 9.00 EUR; the paired field shows 10.00 USD.
    assert_eq!(convert::reverse("9.00", rate), Some("10.00".to_string()));
}

#[tokio::test]
async fn non_success_envelope_is_a_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v6/test-key/latest/GBP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "error",
            "error-type": "invalid-key"
        })))
        .mount(&server)
        .await;

    let err = api::latest_rates(&config_for(&server), Currency::GBP)
        .await
        .unwrap_err();

    assert!(matches!(err, RateError::Service { ref result } if result == "error"));
    assert_eq!(err.to_string(), "Failed to fetch rates");
}

#[tokio::test]
async fn malformed_body_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v6/test-key/latest/USD"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = api::latest_rates(&config_for(&server), Currency::USD)
        .await
        .unwrap_err();

    assert!(matches!(err, RateError::Transport(_)));
    assert_eq!(err.to_string(), "Error fetching exchange rates");
}

#[tokio::test]
async fn absent_credential_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config =
        RateServiceConfig::new(ApiCredential::Absent).with_base_url(server.uri());
    let err = api::latest_rates(&config, Currency::USD).await.unwrap_err();

    assert!(matches!(err, RateError::MissingApiKey));
    assert_eq!(err.to_string(), "API key not configured");
    // Dropping the server verifies the zero-request expectation.
}
