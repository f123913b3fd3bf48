//! The normalized document written for every archived card.

use serde::{Deserialize, Serialize};

use super::WebhookAction;

/// Base URL for Trello's card short links.
const SHORT_URL_BASE: &str = "https://trello.com/c";

/// One archived card, as persisted to the collection.
///
/// Absent source fields are stored as nulls rather than omitted so the
/// collection keeps a uniform document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedCardRecord {
    pub card_id: Option<String>,
    pub name: Option<String>,
    pub short_url: Option<String>,
    /// When the card was closed; falls back to the action timestamp for
    /// cards that carry no `dateClosed` of their own.
    pub date_closed: Option<String>,
    pub board_id: Option<String>,
    pub board_name: Option<String>,
    pub list_id: Option<String>,
    pub list_name: Option<String>,
    /// Timestamp of the triggering action.
    pub archived_at: Option<String>,
    /// Full name of the member attributed with the action.
    pub archived_by: Option<String>,
}

impl ArchivedCardRecord {
    /// Build a record from an `updateCard` action.
    pub fn from_action(action: &WebhookAction) -> Self {
        let card = &action.data.card;

        Self {
            card_id: card.id.clone(),
            name: card.name.clone(),
            short_url: card
                .short_link
                .as_ref()
                .map(|link| format!("{SHORT_URL_BASE}/{link}")),
            date_closed: card.date_closed.clone().or_else(|| action.date.clone()),
            board_id: action.data.board.id.clone(),
            board_name: action.data.board.name.clone(),
            list_id: action.data.list.id.clone(),
            list_name: action.data.list.name.clone(),
            archived_at: action.date.clone(),
            archived_by: action.data.member_creator.full_name.clone(),
        }
    }
}
