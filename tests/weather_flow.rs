//! End-to-end fetch flow tests against a mock weather API

use skycast::{
    Condition, DevicePosition, GeolocationProvider, SkycastConfig, UnitSystem, WeatherApp,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARIS_BODY: &str = r#"{
    "cod": 200,
    "name": "Paris",
    "weather": [{"main": "Rain", "description": "light rain"}],
    "main": {"temp": 15, "humidity": 80},
    "wind": {"speed": 3}
}"#;

const NOT_FOUND_BODY: &str = r#"{"cod": "404", "message": "city not found"}"#;

fn current_body(name: &str, label: &str) -> String {
    format!(
        r#"{{
            "cod": 200,
            "name": "{name}",
            "weather": [{{"main": "{label}", "description": "test conditions"}}],
            "main": {{"temp": 20, "humidity": 50}},
            "wind": {{"speed": 5}}
        }}"#
    )
}

fn forecast_body(count: usize) -> String {
    let slots: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"dt_txt": "2024-03-{:02} {:02}:00:00", "main": {{"temp": {}}}, "weather": [{{"main": "Clear", "description": "clear sky"}}]}}"#,
                1 + (i * 3) / 24,
                (i * 3) % 24,
                i
            )
        })
        .collect();
    format!(
        r#"{{"cod": "200", "message": 0, "cnt": {}, "list": [{}]}}"#,
        count,
        slots.join(",")
    )
}

async fn app_for(server: &MockServer) -> WeatherApp {
    let mut config = SkycastConfig::default();
    config.weather.api_key = "test_api_key_123".to_string();
    config.weather.base_url = server.uri();
    WeatherApp::new(config).expect("failed to build app")
}

struct FixedProvider {
    latitude: f64,
    longitude: f64,
}

impl GeolocationProvider for FixedProvider {
    fn current_position(&self) -> Result<DevicePosition, String> {
        Ok(DevicePosition {
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

#[tokio::test]
async fn search_fills_current_and_sampled_forecast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PARIS_BODY, "application/json"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Paris"))
        .and(query_param("cnt", "24"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(forecast_body(24), "application/json"),
        )
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.search("Paris").await;
    app.settled().await;

    let state = app.snapshot().await;
    assert!(state.error.is_none());

    let current = state.current.expect("current conditions missing");
    assert_eq!(current.place, "Paris");
    assert_eq!(current.description, "light rain");
    assert_eq!(current.temperature, 15.0);
    assert_eq!(current.humidity, 80);
    assert_eq!(current.wind_speed, 3.0);
    assert_eq!(current.condition, Condition::Rain);
    assert_eq!(current.condition.theme(), "rainy-bg");

    let forecast = state.forecast.expect("forecast missing");
    assert_eq!(forecast.len(), 3);
    assert_eq!(forecast.entries[0].temperature, 0.0);
    assert_eq!(forecast.entries[1].temperature, 8.0);
    assert_eq!(forecast.entries[2].temperature, 16.0);
}

#[tokio::test]
async fn unknown_place_reports_api_message_and_clears_current() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PARIS_BODY, "application/json"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(forecast_body(24), "application/json"),
        )
        .mount(&server)
        .await;

    // The API reports the failure inside the body of an HTTP 404
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Xyzzyplace"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(NOT_FOUND_BODY, "application/json"))
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.search("Paris").await;
    app.settled().await;

    app.search("Xyzzyplace").await;
    app.settled().await;

    let state = app.snapshot().await;
    assert_eq!(state.error.as_deref(), Some("city not found"));
    assert!(state.current.is_none());
    // The failed search never starts a forecast fetch; the old forecast stays
    assert!(state.forecast.is_some());
}

#[tokio::test]
async fn forecast_transport_failure_leaves_previous_forecast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PARIS_BODY, "application/json"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Paris"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(forecast_body(24), "application/json"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Berlin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(current_body("Berlin", "Clouds"), "application/json"),
        )
        .mount(&server)
        .await;

    // Berlin's forecast endpoint falls over entirely
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Berlin"))
        .respond_with(ResponseTemplate::new(500).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.search("Paris").await;
    app.settled().await;

    app.search("Berlin").await;
    app.settled().await;

    let state = app.snapshot().await;
    // Current conditions moved on to Berlin
    assert_eq!(state.current.as_ref().unwrap().place, "Berlin");
    assert!(state.error.is_none());
    // The forecast still shows Paris data: not cleared, not errored
    let forecast = state.forecast.expect("previous forecast dropped");
    assert_eq!(forecast.len(), 3);
    assert_eq!(forecast.entries[0].temperature, 0.0);
}

#[tokio::test]
async fn coordinate_search_keys_both_requests_by_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "48.8566"))
        .and(query_param("lon", "2.3522"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PARIS_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    // The forecast request reuses the coordinate form, not the place name
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lat", "48.8566"))
        .and(query_param("lon", "2.3522"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(forecast_body(24), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = FixedProvider {
        latitude: 48.8566,
        longitude: 2.3522,
    };

    let mut app = app_for(&server).await;
    app.locate(Some(&provider)).await;
    app.settled().await;

    let state = app.snapshot().await;
    assert_eq!(state.current.as_ref().unwrap().place, "Paris");
    assert!(state.forecast.is_some());
}

#[tokio::test]
async fn unit_toggle_refetches_recorded_query_with_new_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PARIS_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "imperial"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(current_body("Paris", "Rain"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(forecast_body(24), "application/json"),
        )
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.search("Paris").await;
    app.settled().await;

    app.toggle_units().await;
    app.settled().await;

    let state = app.snapshot().await;
    assert_eq!(state.units, UnitSystem::Imperial);
    assert_eq!(state.current.as_ref().unwrap().temperature, 20.0);
}

#[tokio::test]
async fn empty_search_reports_input_error_without_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PARIS_BODY, "application/json"))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.search("   ").await;
    app.settled().await;

    let state = app.snapshot().await;
    assert_eq!(state.error.as_deref(), Some("Please enter a location"));
    assert!(state.current.is_none());
}

#[tokio::test]
async fn absent_geolocation_capability_fails_without_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PARIS_BODY, "application/json"))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.locate(None).await;

    let state = app.snapshot().await;
    assert_eq!(
        state.error.as_deref(),
        Some("Geolocation is not supported on this system")
    );
}
