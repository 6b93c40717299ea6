//! HTTP surface for the embed widget.
//!
//! Every request is one render pass: the `linkid` query parameter is the
//! current input value and the response is rendered from it alone.

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::embed::render_embed;
use crate::page::render_page;
use crate::utils::{AppSettings, Result};

/// Query string of both render routes.
#[derive(Debug, Default, Deserialize)]
pub struct EmbedQuery {
    /// Current value of the input field; absent means empty.
    #[serde(default)]
    pub linkid: String,
}

/// Build the router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/embed", get(embed_handler))
        .route("/health", get(health_handler))
}

/// Bound listener waiting to serve the widget.
pub struct EmbedServer {
    listener: TcpListener,
}

impl EmbedServer {
    /// Bind to the address in `settings`.
    pub async fn bind(settings: &AppSettings) -> Result<Self> {
        let addr = settings.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        info!("Listening on {}", listener.local_addr()?);
        Ok(Self { listener })
    }

    /// Use an already-bound listener.
    pub fn from_listener(listener: TcpListener) -> Self {
        Self { listener }
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Base URL of the page, e.g. `http://127.0.0.1:8501/`.
    pub fn url(&self) -> Result<String> {
        Ok(format!("http://{}/", self.local_addr()?))
    }

    /// Serve until Ctrl-C.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(ctrl_c()).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, router())
            .with_graceful_shutdown(signal)
            .await?;
        info!("Server stopped");
        Ok(())
    }
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        // never resolve, keep serving
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

/// Full page with the input field and, for non-empty input, the player.
async fn index_handler(Query(query): Query<EmbedQuery>) -> Html<String> {
    debug!("Render page for linkid={:?}", query.linkid);
    Html(render_page(&query.linkid))
}

/// Bare iframe fragment; 204 when there is nothing to embed.
async fn embed_handler(Query(query): Query<EmbedQuery>) -> Response {
    debug!("Render fragment for linkid={:?}", query.linkid);
    match render_embed(&query.linkid) {
        Some(fragment) => Html(fragment).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Health check handler.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
