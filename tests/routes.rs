//! End-to-end coverage of the route table against a running server.

use std::net::SocketAddr;
use std::time::Duration;

use dashboard_server::config::ServerConfig;
use dashboard_server::http::HttpServer;
use dashboard_server::lifecycle::Shutdown;
use dashboard_server::routing::ROUTES;

/// Boot the server on an ephemeral port and return its address plus the
/// shutdown handle keeping it alive.
async fn start_server() -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(ServerConfig::default());

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_every_registered_path_serves_html() {
    let (addr, _shutdown) = start_server().await;
    let client = client();

    for route in ROUTES {
        let res = client
            .get(format!("http://{}{}", addr, route.path))
            .send()
            .await
            .unwrap_or_else(|e| panic!("request to {} failed: {e}", route.path));

        assert_eq!(res.status(), 200, "unexpected status for {}", route.path);

        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(
            content_type.starts_with("text/html"),
            "unexpected content type for {}: {content_type}",
            route.path
        );

        let body = res.text().await.unwrap();
        assert!(!body.is_empty(), "empty body for {}", route.path);
        assert!(body.contains("<html"), "no HTML document for {}", route.path);
    }
}

#[tokio::test]
async fn test_unregistered_path_is_404() {
    let (addr, _shutdown) = start_server().await;

    let res = client()
        .get(format!("http://{addr}/nonexistent"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn test_near_miss_paths_are_404() {
    let (addr, _shutdown) = start_server().await;
    let client = client();

    // Exact match only: trailing slashes and prefixes do not resolve.
    for path in ["/sales-drilldown/", "/sales", "/tutorials/bar-column-charts"] {
        let res = client
            .get(format!("http://{addr}{path}"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 404, "expected 404 for {path}");
    }
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let (addr, _shutdown) = start_server().await;
    let client = client();
    let url = format!("http://{addr}/financial-overview");

    let first = client.get(&url).send().await.unwrap().text().await.unwrap();
    let second = client.get(&url).send().await.unwrap().text().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_root_serves_dashboard_markup() {
    let (addr, _shutdown) = start_server().await;

    let body = client()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Analytics Dashboard"));
    assert!(body.contains("kpi-row"));
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (addr, _shutdown) = start_server().await;

    let res = client()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .unwrap();

    let id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header missing");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_post_to_registered_path_is_rejected() {
    let (addr, _shutdown) = start_server().await;

    // Routes are GET-only; other methods get the framework's 405.
    let res = client()
        .post(format!("http://{addr}/sales-drilldown"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 405);
}
