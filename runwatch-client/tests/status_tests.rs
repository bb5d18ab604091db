//! Status client tests against an in-process server

use axum::{Router, http::StatusCode, routing::get};
use runwatch_client::{ClientError, StatusClient};
use runwatch_server::api::create_router;
use runwatch_server::service::AppState;

/// Serves `app` on an ephemeral loopback port and returns its base URL
async fn spawn(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    Ok(format!("http://{}", addr))
}

async fn spawn_status_server(initial_run: i64) -> anyhow::Result<String> {
    spawn(create_router(AppState::new(initial_run))).await
}

#[tokio::test]
async fn test_fetch_status_for_latest_run() -> anyhow::Result<()> {
    let client = StatusClient::new(spawn_status_server(0).await?);

    let status = client.fetch_status("42").await?;

    assert!(!status.shutdown);
    assert_eq!(status.total_calls, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_superseded_run_is_told_to_shut_down() -> anyhow::Result<()> {
    let client = StatusClient::new(spawn_status_server(0).await?);

    assert!(!client.fetch_status("42").await?.shutdown);
    assert!(!client.fetch_status("43").await?.shutdown);
    assert!(client.fetch_status("42").await?.shutdown);
    Ok(())
}

#[tokio::test]
async fn test_health_check() -> anyhow::Result<()> {
    let client = StatusClient::new(spawn_status_server(5).await?);

    client.health_check().await?;
    Ok(())
}

#[tokio::test]
async fn test_non_json_body_is_a_parse_error() -> anyhow::Result<()> {
    let app = Router::new().route("/", get(|| async { "not json" }));
    let client = StatusClient::new(spawn(app).await?);

    let err = client.fetch_status("42").await.unwrap_err();

    assert!(matches!(err, ClientError::ParseError(_)), "{:?}", err);
    Ok(())
}

#[tokio::test]
async fn test_missing_shutdown_field_is_a_parse_error() -> anyhow::Result<()> {
    let app = Router::new().route("/", get(|| async { r#"{"totalCalls": 1}"# }));
    let client = StatusClient::new(spawn(app).await?);

    let err = client.fetch_status("42").await.unwrap_err();

    assert!(matches!(err, ClientError::ParseError(_)), "{:?}", err);
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_an_api_error() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, r#"{"shutdown": true}"#) }),
    );
    let client = StatusClient::new(spawn(app).await?);

    let err = client.fetch_status("42").await.unwrap_err();

    assert!(err.is_server_error(), "{:?}", err);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_a_request_error() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = StatusClient::new(format!("http://{}", addr));
    let err = client.fetch_status("42").await.unwrap_err();

    assert!(matches!(err, ClientError::RequestFailed(_)), "{:?}", err);
    Ok(())
}

#[tokio::test]
async fn test_run_is_sent_as_query_parameter() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/",
        get(|axum::extract::RawQuery(query): axum::extract::RawQuery| async move {
            let shutdown = query.as_deref() == Some("run=42");
            format!(r#"{{"shutdown": {}}}"#, shutdown)
        }),
    );
    let client = StatusClient::new(spawn(app).await?);

    assert!(client.fetch_status("42").await?.shutdown);
    Ok(())
}
