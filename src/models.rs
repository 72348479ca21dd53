use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Identifier of the liked cafe, as rendered into the page.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(id) => write!(f, "{id}"),
            EntityId::Str(id) => f.write_str(id),
        }
    }
}

/// Reads an id the way a page hands it over: digits become a number, anything else stays text.
impl FromStr for EntityId {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.parse::<i64>() {
            Ok(id) => EntityId::Int(id),
            Err(_) => EntityId::Str(value.to_string()),
        })
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Str(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Str(value)
    }
}

/// Whether the current viewer likes the cafe. The server owns this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeStatus(pub bool);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Unlike control shown, like control hidden.
    Liked,
    /// Like control shown, unlike control hidden.
    NotLiked,
}

impl DisplayState {
    pub fn shows(self, control: Control) -> bool {
        matches!(
            (self, control),
            (DisplayState::Liked, Control::Unlike) | (DisplayState::NotLiked, Control::Like)
        )
    }
}

impl From<LikeStatus> for DisplayState {
    fn from(status: LikeStatus) -> Self {
        if status.0 {
            DisplayState::Liked
        } else {
            DisplayState::NotLiked
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Like,
    Unlike,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::Like, Control::Unlike];
}

/// The three requests a controller can have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Status,
    Like,
    Unlike,
}

impl Action {
    /// Controls disabled while this action waits for its reply.
    pub(crate) fn triggers(self) -> &'static [Control] {
        match self {
            Action::Status => &Control::ALL,
            Action::Like => &[Control::Like],
            Action::Unlike => &[Control::Unlike],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Status => "status",
            Action::Like => "like",
            Action::Unlike => "unlike",
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CafeRequest<'a> {
    pub(crate) cafe_id: &'a EntityId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusReply {
    pub(crate) likes: bool,
}

/// Splits a reply body into the remote error or the raw success payload.
///
/// Only the presence of `error` matters: HTTP status and the value's type are ignored.
pub(crate) fn parse_reply(body: &str) -> Result<Value, Error> {
    let value: Value = serde_json::from_str(body)?;
    match value.get("error") {
        Some(Value::String(message)) => Err(Error::Remote(message.clone())),
        Some(other) => Err(Error::Remote(other.to_string())),
        None => Ok(value),
    }
}

pub(crate) fn parse_status(body: &str) -> Result<LikeStatus, Error> {
    let reply: StatusReply = serde_json::from_value(parse_reply(body)?)?;
    Ok(LikeStatus(reply.likes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn request_body_keeps_id_type() {
        let int = EntityId::from(1);
        let text = EntityId::from("1");
        assert_snapshot!(
            serde_json::to_string(&CafeRequest { cafe_id: &int }).unwrap(),
            @r#"{"cafe_id":1}"#
        );
        assert_snapshot!(
            serde_json::to_string(&CafeRequest { cafe_id: &text }).unwrap(),
            @r#"{"cafe_id":"1"}"#
        );
    }

    #[test]
    fn entity_id_reads_numbers_and_strings() {
        assert_eq!(
            serde_json::from_str::<EntityId>("7").unwrap(),
            EntityId::Int(7)
        );
        assert_eq!(
            serde_json::from_str::<EntityId>("\"seven\"").unwrap(),
            EntityId::Str("seven".into())
        );
        assert_eq!(EntityId::from("seven").to_string(), "seven");
        assert_eq!(EntityId::from(7).to_string(), "7");
    }

    #[test]
    fn command_line_ids_keep_their_kind() {
        assert_eq!("42".parse::<EntityId>().unwrap(), EntityId::Int(42));
        assert_eq!("-3".parse::<EntityId>().unwrap(), EntityId::Int(-3));
        assert_eq!(
            "espresso-bar".parse::<EntityId>().unwrap(),
            EntityId::Str("espresso-bar".into())
        );
        assert_eq!(
            "12abc".parse::<EntityId>().unwrap(),
            EntityId::Str("12abc".into())
        );
    }

    #[test]
    fn error_key_wins_over_payload() {
        let err = parse_status(r#"{"likes": true, "error": "Not logged in"}"#).unwrap_err();
        assert!(matches!(err, Error::Remote(message) if message == "Not logged in"));
    }

    #[test]
    fn non_string_error_is_still_an_error() {
        let err = parse_reply(r#"{"error": null}"#).unwrap_err();
        assert!(matches!(err, Error::Remote(message) if message == "null"));

        let err = parse_reply(r#"{"error": {"code": 401}}"#).unwrap_err();
        assert!(matches!(err, Error::Remote(message) if message == r#"{"code":401}"#));
    }

    #[test]
    fn status_reply_needs_boolean_likes() {
        assert_eq!(parse_status(r#"{"likes": false}"#).unwrap(), LikeStatus(false));
        assert!(matches!(
            parse_status(r#"{"liked": 1}"#),
            Err(Error::Decode(_))
        ));
        assert!(matches!(
            parse_status(r#"{"likes": "yes"}"#),
            Err(Error::Decode(_))
        ));
        assert!(matches!(parse_status("<html>"), Err(Error::Decode(_))));
    }

    #[test]
    fn display_state_follows_status() {
        let liked = DisplayState::from(LikeStatus(true));
        assert_eq!(liked, DisplayState::Liked);
        assert!(liked.shows(Control::Unlike));
        assert!(!liked.shows(Control::Like));

        let not_liked = DisplayState::from(LikeStatus(false));
        assert!(not_liked.shows(Control::Like));
        assert!(!not_liked.shows(Control::Unlike));
    }
}
