use std::net::SocketAddr;

use axum::{
    body::{self, Body},
    extract::{ConnectInfo, State},
    http::Request,
    response::Html,
    Json,
};

use crate::http::request::{Payload, Receipt};
use crate::http::response::{human_timestamp, status_page, Acknowledgment, ReceiverError};
use crate::http::server::AppState;

/// Log any POSTed body and acknowledge it. The path is not inspected.
pub async fn receive(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    request: Request<Body>,
) -> Result<Json<Acknowledgment>, ReceiverError> {
    let (parts, body) = request.into_parts();
    let bytes = body::to_bytes(body, state.config.max_body_bytes).await?;

    let timestamp = human_timestamp();
    let payload = Payload::parse(&bytes);
    let receipt = Receipt::new(timestamp.clone(), peer, &parts.uri, &parts.headers, payload);

    tracing::debug!(
        peer = %peer,
        path = %receipt.path,
        data_size = bytes.len(),
        json = receipt.payload.is_json(),
        "Payload received"
    );
    println!("{receipt}");

    Ok(Json(Acknowledgment::success(timestamp, bytes.len())))
}

pub async fn status(State(state): State<AppState>) -> Html<String> {
    Html(status_page(&state.config, &human_timestamp()))
}
