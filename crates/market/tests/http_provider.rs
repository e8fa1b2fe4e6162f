//! HTTP provider behavior against a mock market API.

use saarthi_market::{
    HttpProvider, MarketDataProvider, MarketIntelligence, RegionalDataProvider,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn signals_body() -> serde_json::Value {
    json!({
        "job_openings": 5000,
        "trending_score": 0.8,
        "growth_rate": 9.0,
        "future_demand": 1.8,
        "shortage_level": "high",
        "average_salary": {
            "entry_level": 480000.0,
            "mid_level": 800000.0,
            "senior_level": 1440000.0
        },
        "geographic_hotspots": ["pune", "bangalore"],
        "trending_keywords": ["python", "remote"]
    })
}

#[tokio::test]
async fn fetches_and_parses_signals() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/skills/python"))
        .and(query_param("location", "maharashtra"))
        .respond_with(ResponseTemplate::new(200).set_body_json(signals_body()))
        .mount(&server)
        .await;

    let provider = HttpProvider::with_base_url(server.uri());
    let signals = provider
        .fetch_signals("python", Some("maharashtra"))
        .await
        .unwrap();

    assert_eq!(signals.job_openings, 5000);
    assert_eq!(signals.geographic_hotspots, vec!["pune", "bangalore"]);
}

#[tokio::test]
async fn server_error_is_a_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/skills/python"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = HttpProvider::with_base_url(server.uri());
    let err = provider.fetch_signals("python", None).await.unwrap_err();
    assert!(err.to_string().contains("provider request failed"));
}

#[tokio::test]
async fn missing_signal_fields_use_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/skills/cobol"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_openings": 120,
            "trending_score": 0.2,
            "growth_rate": 3.0,
            "future_demand": 1.1
        })))
        .mount(&server)
        .await;

    let provider = HttpProvider::with_base_url(server.uri());
    let signals = provider.fetch_signals("cobol", None).await.unwrap();

    assert_eq!(
        signals.shortage_level,
        saarthi_market::ShortageLevel::Medium
    );
    assert!(signals.average_salary.is_empty());
    assert!(signals.geographic_hotspots.is_empty());
}

#[tokio::test]
async fn regional_outlook_roundtrip_and_miss() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/regional/maharashtra"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "employment_rate": 45.2,
            "growth_rate": 4.2
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/regional/atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = HttpProvider::with_base_url(server.uri());

    let outlook = provider.outlook("maharashtra").await.unwrap().unwrap();
    assert!((outlook.employment_rate - 45.2).abs() < 1e-9);
    assert!(provider.outlook("atlantis").await.unwrap().is_none());
}

#[tokio::test]
async fn intelligence_over_http_caches_and_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/skills/python"))
        .respond_with(ResponseTemplate::new(200).set_body_json(signals_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/market/skills/fortran"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let intel = Arc::new(MarketIntelligence::new(Arc::new(
        HttpProvider::with_base_url(server.uri()),
    )));

    let first = intel.insight("python", None).await;
    let second = intel.insight("python", None).await;
    assert_eq!(first.fetched_at, second.fetched_at);
    assert_eq!(first.supply_score, 40.0);

    let degraded = intel.insight("fortran", None).await;
    assert_eq!(degraded.source_confidence, 0.3);
}
