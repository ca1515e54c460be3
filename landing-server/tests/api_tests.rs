//! Integration tests for landing-server routes

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::DateTime;
use landing_core::Environment;
use landing_server::{create_router, AppState, ServerConfig};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    app_with(ServerConfig::default())
}

fn app_with(config: ServerConfig) -> axum::Router {
    let state = Arc::new(config.app_state());
    create_router(&config, state)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, body.to_vec())
}

async fn get_json(app: axum::Router, uri: &str) -> Value {
    let (status, _, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let json = get_json(test_app(), "/api/health").await;

    assert_eq!(json["status"], "healthy");
    assert_eq!(json["environment"], "development");
    assert_eq!(json["version"], "0.1.0");
    assert!(json["uptime"].as_f64().unwrap() >= 0.0);
    assert!(DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_health_uses_configured_values() {
    let config = ServerConfig {
        environment: Environment::Production,
        version: "1.4.2".to_string(),
        ..ServerConfig::default()
    };
    let json = get_json(app_with(config), "/api/health").await;

    assert_eq!(json["environment"], "production");
    assert_eq!(json["version"], "1.4.2");
}

#[tokio::test]
async fn test_health_timestamps_increase() {
    let app = test_app();

    let mut previous = None;
    for _ in 0..20 {
        let json = get_json(app.clone(), "/api/health").await;
        let current = DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).unwrap();
        if let Some(previous) = previous {
            assert!(current > previous, "{current} not after {previous}");
        }
        previous = Some(current);
    }
}

#[tokio::test]
async fn test_home_page() {
    let (status, content_type, body) = get(test_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));

    let html = String::from_utf8(body).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Welcome to Our Amazing Platform"));
    assert!(html.contains(">Get Started Today</button>"));
    for index in 0..6 {
        assert!(html.contains(&format!("data-testid=\"feature-card-{index}\"")));
    }
    for class in ["hero-section", "features-section", "feature-card", "cta-button", "footer"] {
        assert!(html.contains(&format!("class=\"{class}\"")), "missing {class}");
    }
}

#[tokio::test]
async fn test_home_page_wires_cta_click() {
    let (_, _, body) = get(test_app(), "/").await;
    let html = String::from_utf8(body).unwrap();

    let button = html.find("data-testid=\"cta-button\"").unwrap();
    let script = html.find("<script>").unwrap();
    assert!(script > button);
    assert!(html.contains("data-confirm-label=\"Thanks for clicking!\""));
    assert!(html.contains("data-revert-ms=\"2000\""));

    let js = &html[script..];
    assert!(js.contains("addEventListener('click'"));
    assert!(js.contains("clearTimeout(pending)"));
    assert!(js.contains("Number(button.dataset.revertMs)"));
}

#[tokio::test]
async fn test_home_page_section_order() {
    let (_, _, body) = get(test_app(), "/").await;
    let html = String::from_utf8(body).unwrap();

    let hero = html.find("class=\"hero-section\"").unwrap();
    let features = html.find("class=\"features-section\"").unwrap();
    let footer = html.find("class=\"footer\"").unwrap();
    assert!(hero < features && features < footer);
}

#[tokio::test]
async fn test_custom_indicator_labels() {
    let config = ServerConfig::default();
    let indicator = landing_core::IndicatorConfig {
        labels: landing_core::IndicatorLabels {
            default: "Join the beta".to_string(),
            confirmation: "See you soon!".to_string(),
        },
        delay: std::time::Duration::from_millis(1500),
    };
    let state = Arc::new(AppState::default().with_indicator(indicator));
    let app = create_router(&config, state);

    let (_, _, body) = get(app, "/").await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains(">Join the beta</button>"));
    assert!(html.contains("data-confirm-label=\"See you soon!\""));
    assert!(html.contains("data-revert-ms=\"1500\""));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let config = ServerConfig {
        static_dir: "/nonexistent/static".to_string(),
        ..ServerConfig::default()
    };
    let (status, _, _) = get(app_with(config), "/missing.css").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
