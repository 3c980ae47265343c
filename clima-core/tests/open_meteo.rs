//! Open-Meteo client behavior against a mock HTTP server.

use clima_core::{
    Condition, LookupError, WeatherProvider, WeatherRequest, provider::open_meteo::OpenMeteoProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoding_body() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "id": 3687925,
                "name": "Cali",
                "latitude": 3.43722,
                "longitude": -76.5225,
                "country": "Colombia",
                "country_code": "CO",
                "admin1": "Valle del Cauca"
            },
            {
                "id": 4330236,
                "name": "Cali",
                "latitude": 40.5,
                "longitude": -80.1,
                "country": "Estados Unidos",
                "country_code": "US",
                "admin1": "Pennsylvania"
            }
        ],
        "generationtime_ms": 0.7
    })
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 3.4375,
        "longitude": -76.5,
        "timezone": "America/Bogota",
        "current": {
            "time": "2024-01-01T13:00",
            "interval": 900,
            "temperature_2m": 29.0,
            "relative_humidity_2m": 55.0,
            "wind_speed_10m": 2.1,
            "weather_code": 80,
            "visibility": 24140.0
        },
        "hourly": {
            "time": ["2024-01-01T13:00", "2024-01-01T14:00", "2024-01-01T15:00"],
            "temperature_2m": [29.0, 29.5, 28.7]
        }
    })
}

async fn provider(server: &MockServer) -> OpenMeteoProvider {
    OpenMeteoProvider::new(
        format!("{}/v1/forecast", server.uri()),
        format!("{}/v1/search", server.uri()),
    )
    .expect("provider")
}

#[tokio::test]
async fn get_weather_builds_full_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Cali"))
        .and(query_param("language", "es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "3.43722"))
        .and(query_param("wind_speed_unit", "ms"))
        .and(query_param("hourly", "temperature_2m"))
        .and(query_param("forecast_hours", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let request = WeatherRequest { city: "Cali".into(), country: Some("co".into()), hours: 3 };
    let report = provider(&server).await.get_weather(&request).await.expect("report");

    assert_eq!(report.city, "Cali");
    assert_eq!(report.country, "Colombia");
    assert_eq!(report.condition, Condition::RainShowers);
    assert_eq!(report.description, "Chubascos de lluvia ligeros");
    assert_eq!(report.temperature_c, 29.0);
    assert!(report.feels_like_c.is_finite());
    assert_eq!(report.visibility_km, Some(24.14));
    assert_eq!(report.hourly.len(), 3);
    assert!(report.hourly.iter().all(|h| h.category == Condition::RainShowers));
    assert_eq!(report.hourly[1].time_label, "lun 14:00");
}

#[tokio::test]
async fn resolve_city_filters_by_country() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_body()))
        .mount(&server)
        .await;

    let location = provider(&server)
        .await
        .resolve_city("Cali", Some("US"))
        .await
        .expect("location");

    assert_eq!(location.admin1.as_deref(), Some("Pennsylvania"));
}

#[tokio::test]
async fn unknown_city_is_a_lookup_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "generationtime_ms": 0.2 })),
        )
        .mount(&server)
        .await;

    let err = provider(&server).await.resolve_city("Atlantis", None).await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<LookupError>(),
        Some(&LookupError::CityNotFound { city: "Atlantis".into() })
    );
}

#[tokio::test]
async fn zero_hours_skips_hourly_block() {
    let server = MockServer::start().await;

    let mut body = forecast_body();
    if let Some(obj) = body.as_object_mut() {
        obj.remove("hourly");
    }

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let location = clima_core::Location {
        name: "Cali".into(),
        latitude: 3.43722,
        longitude: -76.5225,
        country: None,
        country_code: None,
        admin1: None,
    };

    let provider = provider(&server).await;
    let response = provider.fetch_forecast(&location, 0).await.expect("forecast");
    assert!(response.hourly.is_none());

    let requests = server.received_requests().await.expect("recording enabled");
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("hourly"));
    assert!(!query.contains("forecast_hours"));
}

#[tokio::test]
async fn server_errors_carry_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = provider(&server).await.resolve_city("Cali", None).await.unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("503"));
    assert!(msg.contains("maintenance"));
}
