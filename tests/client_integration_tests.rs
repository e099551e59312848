use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use k8s_client_kit::config::ApiConfig;
use k8s_client_kit::errors::{ApiError, BodyError};
use k8s_client_kit::kube::ApiClient;

// Helper to start a fake API server on an ephemeral port
async fn spawn_test_server() -> String {
    let app = Router::new()
        .route("/version", get(|| async { Json(json!({"major": "1", "minor": "30"})) }))
        .route(
            "/api/v1/namespaces/default/pods/missing",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "kind": "Status",
                        "apiVersion": "v1",
                        "status": "Failure",
                        "message": "pods \"missing\" not found",
                        "reason": "NotFound",
                        "code": 404
                    })),
                )
            }),
        )
        .route(
            "/bad-request",
            get(|| async { (StatusCode::BAD_REQUEST, Json(json!({"message": "bad request"}))) }),
        )
        .route(
            "/gateway",
            get(|| async { (StatusCode::BAD_GATEWAY, "<html>502 Bad Gateway</html>") }),
        )
        .route("/not-json", get(|| async { "plain text" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn create_test_client() -> ApiClient {
    let base_url = spawn_test_server().await;
    let config = ApiConfig {
        base_url,
        ..ApiConfig::default()
    };
    ApiClient::new(&config).expect("Failed to create client")
}

#[tokio::test]
async fn test_successful_request() {
    let client = create_test_client().await;

    let body: Value = client.get_json("/version").await.unwrap();
    assert_eq!(body["major"], "1");
}

#[tokio::test]
async fn test_status_body_becomes_message() {
    let client = create_test_client().await;

    let err = client
        .get_json::<Value>("/api/v1/namespaces/default/pods/missing")
        .await
        .unwrap_err();

    assert_eq!(err.api_message(), Some("pods \"missing\" not found"));
    assert_eq!(err.to_string(), "pods \"missing\" not found");
}

#[tokio::test]
async fn test_bad_request_message() {
    let client = create_test_client().await;

    let err = client.get_json::<Value>("bad-request").await.unwrap_err();
    assert_eq!(err.to_string(), "bad request");
}

#[tokio::test]
async fn test_unparseable_error_body_propagates() {
    let client = create_test_client().await;

    let err = client.get_json::<Value>("/gateway").await.unwrap_err();
    assert!(matches!(err, ApiError::Body(BodyError::Decode(_))));
}

#[tokio::test]
async fn test_truncated_error_body_is_a_read_failure() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Promise a longer body than is sent, then hang up
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(
                b"HTTP/1.1 500 Internal Server Error\r\n\
                  Content-Type: application/json\r\n\
                  Content-Length: 100\r\n\r\n\
                  {\"mess",
            )
            .await
            .unwrap();
    });

    let config = ApiConfig {
        base_url: format!("http://{}", addr),
        ..ApiConfig::default()
    };
    let client = ApiClient::new(&config).unwrap();

    let err = client.get_json::<Value>("/version").await.unwrap_err();

    assert!(matches!(err, ApiError::Body(BodyError::Read(_))));
    assert_eq!(err.to_string(), "failed to read error response body");
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_transport_failure_passes_through() {
    // Bind then drop a listener so the port is closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig {
        base_url: format!("http://{}", addr),
        ..ApiConfig::default()
    };
    let client = ApiClient::new(&config).unwrap();

    let err = client.get_json::<Value>("/version").await.unwrap_err();
    let original = err.into_other().expect("transport error is passed through");
    assert!(original.is_connect());
}

#[tokio::test]
async fn test_success_body_decode_failure_is_not_normalized() {
    let client = create_test_client().await;

    let err = client.get_json::<Value>("/not-json").await.unwrap_err();
    let original = err.into_other().expect("decode error is passed through");
    assert!(original.is_decode());
}
