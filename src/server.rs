//! HTTP front of the relay.

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::error::{RelayError, Result};
use crate::relay::Relay;

/// Build the router serving `POST /api/message`.
pub fn build_router(relay: Arc<Relay>) -> Router {
    Router::new()
        .route("/api/message", post(message))
        .layer(TraceLayer::new_for_http())
        .with_state(relay)
}

/// Handler for `POST /api/message`.
async fn message(State(relay): State<Arc<Relay>>, body: Bytes) -> Result<Json<Value>> {
    let span = info_span!("message", request_id = %Uuid::new_v4());

    async move {
        let request = Relay::parse_request(&body)?;
        let response = relay.handle(&request).await?;
        Ok::<_, RelayError>(Json(response))
    }
    .instrument(span)
    .await
}

/// Serve until the process is stopped.
pub async fn start_server(config: &ServerConfig, relay: Arc<Relay>) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Relay listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(relay)).await?;
    Ok(())
}
