//! Typed representation of a Trello webhook delivery.
//!
//! Trello sends loosely-shaped JSON; every nested field here is optional or
//! defaulted so the payload is validated once at the parse boundary and the
//! pipeline works with plain struct access afterwards.

use serde::Deserialize;

/// Top-level webhook body.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub action: Option<WebhookAction>,
}

/// The action a delivery describes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WebhookAction {
    /// Action type; only `updateCard` is relevant to this service.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Timestamp of the action (ISO 8601).
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub data: ActionData,
}

impl WebhookAction {
    /// Deliveries occasionally carry an `action` object with no content;
    /// those are treated the same as a missing action.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Entities referenced by the action.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    #[serde(default)]
    pub card: CardSummary,
    #[serde(default)]
    pub board: BoardSummary,
    #[serde(default)]
    pub list: ListSummary,
    /// The user attributed with the action.
    #[serde(default)]
    pub member_creator: MemberSummary,
}

/// The card the action touched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// True when the card is archived.
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub short_link: Option<String>,
    #[serde(default)]
    pub date_closed: Option<String>,
}

/// The board the card belongs to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoardSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// The list the card sits in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// The member who performed the action.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummary {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_action() {
        let payload: WebhookPayload = serde_json::from_str(
            r#"{
                "action": {
                    "type": "updateCard",
                    "date": "2024-01-01T00:00:00Z",
                    "data": {
                        "card": {
                            "id": "c1",
                            "name": "Task",
                            "closed": true,
                            "shortLink": "abc123"
                        },
                        "board": { "id": "b1", "name": "Board" },
                        "list": { "id": "l1", "name": "Done" },
                        "memberCreator": { "fullName": "Jane Doe" }
                    }
                }
            }"#,
        )
        .unwrap();

        let action = payload.action.unwrap();
        assert_eq!(action.kind.as_deref(), Some("updateCard"));
        assert_eq!(action.date.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert!(action.data.card.closed);
        assert_eq!(action.data.card.short_link.as_deref(), Some("abc123"));
        assert_eq!(
            action.data.member_creator.full_name.as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_missing_action_is_none() {
        let payload: WebhookPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.action.is_none());
    }

    #[test]
    fn test_empty_action_object_is_empty() {
        let payload: WebhookPayload = serde_json::from_str(r#"{"action":{}}"#).unwrap();
        assert!(payload.action.unwrap().is_empty());
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let payload: WebhookPayload = serde_json::from_str(
            r#"{"model":{"id":"m1"},"action":{"type":"commentCard","id":"a1"}}"#,
        )
        .unwrap();

        let action = payload.action.unwrap();
        assert!(!action.is_empty());
        assert_eq!(action.kind.as_deref(), Some("commentCard"));
    }

    #[test]
    fn test_closed_defaults_to_false() {
        let payload: WebhookPayload = serde_json::from_str(
            r#"{"action":{"type":"updateCard","data":{"card":{"id":"c1"}}}}"#,
        )
        .unwrap();

        assert!(!payload.action.unwrap().data.card.closed);
    }
}
