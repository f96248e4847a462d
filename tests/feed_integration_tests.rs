use std::time::Duration;

use ridex::core::loader::{LOAD_FAILED_MESSAGE, VehicleListLoader, VehicleListState};
use ridex::core::vehicle::VehicleId;
use ridex::feed::{FetchError, HttpVehicleFeed, VehicleFeed};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const VEHICLES_BODY: &str = r#"[
    {"id": 1, "name": "Tesla Model 3", "vehicleNumber": "KA-01-EV-0001",
     "description": "Electric sedan", "image": "https://img.example/tesla.jpg"},
    {"id": 2, "name": "Toyota Supra", "vehicleNumber": "MH-12-AB-2002",
     "description": "Sports coupe", "image": "https://img.example/supra.jpg"}
]"#;

/// Starts a mock server answering GET /vehicles with `template`.
async fn serve(template: ResponseTemplate) -> (MockServer, HttpVehicleFeed) {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vehicles"))
        .respond_with(template)
        .mount(&mock_server)
        .await;

    let feed = HttpVehicleFeed::new(format!("{}/vehicles", mock_server.uri()), None);
    (mock_server, feed)
}

// ============================================================================
// HttpVehicleFeed
// ============================================================================

#[tokio::test]
async fn test_fetch_decodes_vehicle_array() {
    let (_server, feed) = serve(ResponseTemplate::new(200).set_body_string(VEHICLES_BODY)).await;

    let vehicles = feed.fetch_vehicles().await.expect("fetch should succeed");

    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0].id, Some(VehicleId::Number(1)));
    assert_eq!(vehicles[0].name, "Tesla Model 3");
    assert_eq!(vehicles[1].vehicle_number, "MH-12-AB-2002");
    assert_eq!(vehicles[1].image, "https://img.example/supra.jpg");
}

#[tokio::test]
async fn test_fetch_sends_plain_get_without_query() {
    let (server, feed) = serve(ResponseTemplate::new(200).set_body_string("[]")).await;

    let vehicles = feed.fetch_vehicles().await.unwrap();
    assert!(vehicles.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "GET");
    assert_eq!(requests[0].url.path(), "/vehicles");
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_fetch_server_error_is_status_failure() {
    let (_server, feed) = serve(ResponseTemplate::new(500).set_body_string("oops")).await;

    let err = feed.fetch_vehicles().await.unwrap_err();
    assert_eq!(err, FetchError::Status { status: 500 });
}

#[tokio::test]
async fn test_fetch_not_found_is_status_failure() {
    let (_server, feed) = serve(ResponseTemplate::new(404)).await;

    let err = feed.fetch_vehicles().await.unwrap_err();
    assert_eq!(err, FetchError::Status { status: 404 });
}

#[tokio::test]
async fn test_fetch_malformed_body_is_parse_failure() {
    let (_server, feed) = serve(ResponseTemplate::new(200).set_body_string("{not json")).await;

    let err = feed.fetch_vehicles().await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_object_body_is_parse_failure() {
    let (_server, feed) =
        serve(ResponseTemplate::new(200).set_body_string(r#"{"vehicles": []}"#)).await;

    let err = feed.fetch_vehicles().await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_passes_incomplete_records_through() {
    let body = r#"[{"id": "abc", "name": "Mystery", "vehicleNumber": 42, "description": null}]"#;
    let (_server, feed) = serve(ResponseTemplate::new(200).set_body_string(body)).await;

    let vehicles = feed.fetch_vehicles().await.unwrap();

    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].id, Some(VehicleId::Text("abc".to_string())));
    assert_eq!(vehicles[0].vehicle_number, "42");
    assert_eq!(vehicles[0].description, "");
    assert_eq!(vehicles[0].image, "");
}

#[tokio::test]
async fn test_fetch_unreachable_host_is_network_failure() {
    let feed = HttpVehicleFeed::new("http://127.0.0.1:9/vehicles".to_string(), None);

    let err = feed.fetch_vehicles().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_times_out_when_configured() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vehicles"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let feed = HttpVehicleFeed::new(
        format!("{}/vehicles", mock_server.uri()),
        Some(Duration::from_millis(200)),
    );

    let err = feed.fetch_vehicles().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}

// ============================================================================
// VehicleListLoader over HTTP
// ============================================================================

#[tokio::test]
async fn test_loader_loads_over_http() {
    let (_server, feed) = serve(ResponseTemplate::new(200).set_body_string(VEHICLES_BODY)).await;
    let mut loader = VehicleListLoader::new();

    let state = loader.load(&feed).await;

    assert!(matches!(state, VehicleListState::Loaded(v) if v.len() == 2));
    assert_eq!(loader.vehicles()[0].name, "Tesla Model 3");
}

#[tokio::test]
async fn test_loader_failure_clears_list() {
    let (_ok_server, ok_feed) =
        serve(ResponseTemplate::new(200).set_body_string(VEHICLES_BODY)).await;
    let (_bad_server, bad_feed) = serve(ResponseTemplate::new(500)).await;
    let mut loader = VehicleListLoader::new();

    loader.load(&ok_feed).await;
    assert_eq!(loader.vehicles().len(), 2);

    let state = loader.load(&bad_feed).await;
    assert_eq!(
        state,
        &VehicleListState::Failed(LOAD_FAILED_MESSAGE.to_string())
    );
    assert!(loader.vehicles().is_empty());
}

#[tokio::test]
async fn test_refresh_resets_clicks_and_refetches() {
    let (server, feed) = serve(ResponseTemplate::new(200).set_body_string(VEHICLES_BODY)).await;
    let mut loader = VehicleListLoader::new();

    loader.load(&feed).await;
    let vehicle = loader.vehicles()[0].clone();
    loader.confirm_rental(&vehicle);
    loader.confirm_rental(&vehicle);
    assert_eq!(loader.clicks(), 2);

    loader.refresh(&feed).await;

    assert_eq!(loader.clicks(), 0);
    assert_eq!(loader.vehicles().len(), 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
