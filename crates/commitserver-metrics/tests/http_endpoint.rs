#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use commitserver_core::{CommitResponseType, GitRequestType};
use commitserver_metrics::{app_state::AppState, config, router, MetricsServer};

async fn get_body(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn metrics_route_serves_exposition_text() {
    let state = AppState::new(config::ExporterConfig::default()).unwrap();
    state.metrics().inc_commit_request("repo-1", CommitResponseType::Success);
    let app = router::build_router(state);

    let (status, content_type, body) = get_body(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; version=0.0.4"));
    assert!(body.contains(
        r#"argocd_commitserver_commit_request_total{repo="repo-1",response_type="success"} 1"#
    ));
    // Scrape runs on a current-thread test runtime.
    assert!(body.lines().any(|l| l == "tokio_runtime_workers 1"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let state = AppState::new(config::ExporterConfig::default()).unwrap();
    let (status, _, body) = get_body(router::build_router(state), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn metrics_path_comes_from_config() {
    let cfg = config::load_from_str(
        r#"
version: 1
server:
  metrics_path: "/internal/metrics"
"#,
    )
    .unwrap();
    let state = AppState::new(cfg).unwrap();

    let (status, _, _) = get_body(router::build_router(state.clone()), "/internal/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = get_body(router::build_router(state), "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn handler_mounts_on_host_router() {
    let metrics = MetricsServer::new().unwrap();
    let app = Router::new().route("/scrape", metrics.handler());

    metrics.inc_git_request("host", GitRequestType::LsRemote);
    let (status, _, body) = get_body(app.clone(), "/scrape").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"request_type="ls-remote""#));

    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/scrape")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn scrapes_run_alongside_updates() {
    let metrics = MetricsServer::new().unwrap();
    let app = Router::new().route("/metrics", metrics.handler());

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let metrics = metrics.clone();
        tasks.push(tokio::spawn(async move {
            for _ in 0..250 {
                metrics.inc_git_request("busy", GitRequestType::Fetch);
            }
        }));
    }
    for _ in 0..5 {
        let (status, _, _) = get_body(app.clone(), "/metrics").await;
        assert_eq!(status, StatusCode::OK);
    }
    for t in tasks {
        t.await.unwrap();
    }

    let (_, _, body) = get_body(app, "/metrics").await;
    assert!(body.contains(
        r#"argocd_commitserver_git_request_total{repo="busy",request_type="fetch"} 1000"#
    ));
}
