//! REST API handler behavior tests
//!
//! Each test starts a node on an ephemeral port and calls it over HTTP.

use geodist_core::Coordinates;
use geodist_node::client::ClientError;
use serde_json::{json, Value};

use super::spawn_node;

fn quilpue() -> Coordinates {
    Coordinates::new(-33.0351516, -70.5955963)
}

fn valparaiso() -> Coordinates {
    Coordinates::new(-33.0348327, -71.5980458)
}

// ============ Health & Info ============

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let node = spawn_node().await;
    assert!(node.client().health().await.unwrap());

    let body = reqwest::get(format!("{}/health", node.base_url))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_node_info_counts_requests() {
    let node = spawn_node().await;
    let client = node.client();
    client.geodesic_distance(quilpue(), valparaiso(), "km").await.unwrap();
    client.geodesic_distance(quilpue(), valparaiso(), "mi").await.unwrap();

    let info: Value = reqwest::get(format!("{}/api/info", node.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(info["name"], "geodist-node");
    assert_eq!(info["earth_radius_km"], 6371.0);
    assert_eq!(info["request_count"], 2);
    assert!(info["uptime_seconds"].is_number());
    assert!(info["started_at"].is_number());
}

#[tokio::test]
async fn test_units_endpoint() {
    let node = spawn_node().await;
    let units = node.client().units().await.unwrap();

    let labels: Vec<&str> = units.iter().map(|u| u.unit.as_str()).collect();
    assert_eq!(labels, vec!["km", "mi", "nm"]);
}

// ============ geodesic_distance ============

#[tokio::test]
async fn test_valid_positions_km_distance() {
    let node = spawn_node().await;
    let result = node
        .client()
        .geodesic_distance(
            Coordinates::new(-33.045, -71.619),
            Coordinates::new(-33.046, -71.629),
            "km",
        )
        .await
        .unwrap();

    assert!(result.distance > 0.0);
    assert_eq!(result.unit, "km");
}

#[tokio::test]
async fn test_default_unit_should_match_km() {
    let node = spawn_node().await;
    let client = node.client();

    let default = client.geodesic_distance(quilpue(), valparaiso(), "").await.unwrap();
    let km = client.geodesic_distance(quilpue(), valparaiso(), "km").await.unwrap();

    assert!((default.distance - km.distance).abs() < 1.0);
    assert_eq!(default.unit, "km");
}

#[tokio::test]
async fn test_missing_unit_field_means_km() {
    let node = spawn_node().await;
    let response: Value = reqwest::Client::new()
        .post(format!("{}/api/geodesic_distance", node.base_url))
        .json(&json!({
            "source": { "latitude": -33.0351516, "longitude": -70.5955963 },
            "destination": { "latitude": -33.0348327, "longitude": -71.5980458 }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response["unit"], "km");
    assert!(response["distance"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_unit_nautical_miles_conversion() {
    let node = spawn_node().await;
    let client = node.client();
    let source = Coordinates::new(-33.035, -70.596);
    let destination = Coordinates::new(-33.034, -71.598);

    let km = client.geodesic_distance(source, destination, "km").await.unwrap();
    let nm = client.geodesic_distance(source, destination, "nm").await.unwrap();

    assert!((nm.distance - km.distance / 1.852).abs() < 0.5);
    assert_eq!(nm.unit, "nm");
}

#[tokio::test]
async fn test_identical_positions_are_zero() {
    let node = spawn_node().await;
    let client = node.client();

    for unit in ["", "km", "mi", "nm"] {
        let result = client.geodesic_distance(valparaiso(), valparaiso(), unit).await.unwrap();
        assert_eq!(result.distance, 0.0);
    }
}

#[tokio::test]
async fn test_invalid_position_returns_invalid_response() {
    let node = spawn_node().await;
    let result = node
        .client()
        .geodesic_distance(
            Coordinates::new(-95.0, -182.0),
            Coordinates::new(-33.035, -71.598),
            "km",
        )
        .await
        .unwrap();

    assert_eq!(result.unit, "invalid");
    assert_eq!(result.distance, -1.0);
}

#[tokio::test]
async fn test_invalid_unit_is_bad_request() {
    let node = spawn_node().await;
    let err = node
        .client()
        .geodesic_distance(quilpue(), valparaiso(), "m")
        .await
        .unwrap_err();

    match err {
        ClientError::Rejected { status, code, message } => {
            assert_eq!(status, 400);
            assert_eq!(code, "UNSUPPORTED_UNIT");
            assert!(message.contains("'m'"));
            assert!(!message.contains("response_map"));
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_node_survives_unsupported_unit() {
    let node = spawn_node().await;
    let client = node.client();

    assert!(client.geodesic_distance(quilpue(), valparaiso(), "m").await.is_err());
    let after = client.geodesic_distance(quilpue(), valparaiso(), "km").await.unwrap();
    assert_eq!(after.unit, "km");
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let node = spawn_node().await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/geodesic_distance", node.base_url))
        .header("content-type", "application/json")
        .body("{\"source\": 1}")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_concurrent_requests() {
    let node = spawn_node().await;
    let client = node.client();

    let mut handles = Vec::new();
    for i in 0..16 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let destination = Coordinates::new(-33.0, -70.0 - i as f64 * 0.1);
            client.geodesic_distance(quilpue(), destination, "km").await
        }));
    }

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.unit, "km");
        assert!(result.distance >= 0.0);
    }
}
