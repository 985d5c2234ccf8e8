use std::future::Future;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::store::{Message, MessageLog};
use crate::transport::message::SubmitAck;
use crate::utils::error::RelayResult;

/// Builds the relay's routes around a shared message log.
///
/// Request bodies are not size-capped: any parseable document is accepted.
pub fn router(log: Arc<MessageLog>) -> Router {
    Router::new()
        .route("/send", post(submit))
        .route("/messages", get(list_all))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(log)
}

/// Serves the relay on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, log: Arc<MessageLog>, shutdown: F) -> RelayResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(log))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn start_http_server(settings: &Settings, log: Arc<MessageLog>) -> RelayResult<()> {
    let listener = TcpListener::bind(settings.bind_addr()).await?;

    info!("Message relay listening on http://{}", listener.local_addr()?);

    serve(listener, log, shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received. Exiting gracefully."),
        Err(e) => {
            // Without a signal handler the server runs until killed.
            warn!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}

/// `POST /send`: appends the JSON body to the log.
async fn submit(
    State(log): State<Arc<MessageLog>>,
    body: Result<Json<Message>, JsonRejection>,
) -> RelayResult<Json<SubmitAck>> {
    let Json(message) = body?;

    let position = log.append(message);
    debug!(position, "Message received");

    Ok(Json(SubmitAck::received()))
}

/// `GET /messages`: every message so far, oldest first.
async fn list_all(State(log): State<Arc<MessageLog>>) -> Json<Vec<Message>> {
    let messages = log.snapshot();
    debug!(count = messages.len(), "Listing messages");
    Json(messages)
}
