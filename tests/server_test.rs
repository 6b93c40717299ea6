//! End-to-end tests against a live server bound to an ephemeral port.

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use ytembed::EmbedServer;

struct TestServer {
    base: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let server = EmbedServer::from_listener(listener);
        let base = server.url().expect("url");
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            server
                .serve_with_shutdown(async {
                    let _ = rx.await;
                })
                .await
                .expect("serve");
        });
        Self {
            base,
            shutdown: Some(tx),
            handle,
        }
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.expect("server task");
    }
}

#[tokio::test]
async fn page_without_id_has_no_player() {
    let server = TestServer::start().await;
    let resp = reqwest::get(&server.base).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Enter YouTube Video ID:"));
    assert!(body.contains("Video Link ID"));
    assert!(!body.contains("<iframe"));
    server.stop().await;
}

#[tokio::test]
async fn page_with_id_embeds_player() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let body = client
        .get(&server.base)
        .query(&[("linkid", "dQw4w9WgXcQ")])
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    assert!(body.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0""#));
    assert!(body.contains(r#"width="700" height="400""#));
    assert!(body.contains(r#"value="dQw4w9WgXcQ""#));
    server.stop().await;
}

#[tokio::test]
async fn page_with_empty_id_has_no_player() {
    let server = TestServer::start().await;
    let body = reqwest::get(format!("{}?linkid=", server.base))
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    assert!(!body.contains("<iframe"));
    server.stop().await;
}

#[tokio::test]
async fn embed_route_fragment_and_no_content() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let empty = client
        .get(format!("{}embed", server.base))
        .send()
        .await
        .expect("request");
    assert_eq!(empty.status(), reqwest::StatusCode::NO_CONTENT);

    let ready = client
        .get(format!("{}embed", server.base))
        .query(&[("linkid", "abc123")])
        .send()
        .await
        .expect("request");
    assert_eq!(ready.status(), reqwest::StatusCode::OK);
    let content_type = ready
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    let fragment = ready.text().await.expect("body");
    assert_eq!(
        fragment,
        r#"<iframe width="700" height="400" src="https://www.youtube.com/embed/abc123?rel=0" frameborder="0" allowfullscreen></iframe>"#
    );

    server.stop().await;
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let server = TestServer::start().await;
    let url = format!("{}?linkid=xyz", server.base);
    let first = reqwest::get(&url).await.expect("request").text().await.expect("body");
    let second = reqwest::get(&url).await.expect("request").text().await.expect("body");
    assert_eq!(first, second);
    server.stop().await;
}

#[tokio::test]
async fn health_reports_ok() {
    let server = TestServer::start().await;
    let body: serde_json::Value = reqwest::get(format!("{}health", server.base))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(body["status"], "ok");
    server.stop().await;
}
