//! Trello webhook endpoint.
//!
//! One linear pipeline per delivery: parse, filter for card archival,
//! normalize, persist. Filtered-out deliveries are acknowledged with 200
//! and distinguished by body text only; the two real errors (unparsable
//! body, storage failure) live in `crate::errors`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{ArchivedCardRecord, WebhookPayload};
use crate::AppState;

/// The Trello action type that covers archival.
const UPDATE_CARD: &str = "updateCard";

/// Response body for a persisted record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResponse {
    pub status: &'static str,
    pub inserted_id: String,
}

/// GET/HEAD /webhook - Trello's validation handshake.
///
/// Trello probes the endpoint with a safe method before activating the
/// webhook; acknowledge without side effects.
pub async fn handshake() -> &'static str {
    "OK"
}

/// POST /webhook - process one Trello delivery.
pub async fn receive_webhook(State(state): State<AppState>, body: String) -> Response {
    tracing::debug!(raw = %body, "received webhook delivery");

    let payload: WebhookPayload = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::debug!("rejecting unparsable body: {}", err);
            return AppError::InvalidJson.into_response();
        }
    };

    // Some deliveries carry no actionable payload; that is a successful no-op.
    let Some(action) = payload.action.filter(|action| !action.is_empty()) else {
        return (StatusCode::OK, "No action").into_response();
    };

    // Only card updates can represent an archival.
    if action.kind.as_deref() != Some(UPDATE_CARD) {
        return (StatusCode::OK, "Ignored").into_response();
    }

    // An update to a still-open card is not an archival. Any update that
    // leaves the card closed is recorded, including later edits to a card
    // that was already archived.
    if !action.data.card.closed {
        return (StatusCode::OK, "Not archived").into_response();
    }

    let record = ArchivedCardRecord::from_action(&action);

    match state.store.insert_archived_card(&record).await {
        Ok(inserted_id) => {
            tracing::info!(%inserted_id, card_id = ?record.card_id, "archived card saved");
            Json(SavedResponse {
                status: "saved",
                inserted_id,
            })
            .into_response()
        }
        Err(err) => err.into_response(),
    }
}
