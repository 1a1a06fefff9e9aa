//! Email module.
//!
//! Emails are owned by the server: they are fetched fresh for every
//! screen and never cached nor reconciled client-side.

pub mod arg;
pub mod command;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the server.
pub type EmailId = u64;

/// The summary form of an email, as returned by mailbox listings.
///
/// Listings may contain more fields than the summary needs
/// (recipients, body); they are ignored.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Envelope {
    pub id: EmailId,
    pub sender: String,
    pub subject: String,
    /// Display string formatted by the server, never parsed.
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub archived: bool,
}

/// The full email record.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Email {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub body: String,
}

impl Email {
    pub fn id(&self) -> EmailId {
        self.envelope.id
    }
}

/// Partial update of the flags of an email.
///
/// Only the fields set to `Some` are sent to the server.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EmailUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl EmailUpdate {
    pub fn read(read: bool) -> Self {
        Self {
            read: Some(read),
            ..Self::default()
        }
    }

    pub fn archived(archived: bool) -> Self {
        Self {
            archived: Some(archived),
            ..Self::default()
        }
    }
}

/// The content of the compose form, posted as is to the server.
///
/// Recipients stay a raw comma-separated string: splitting and
/// validating them is the job of the server.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Draft {
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

impl Draft {
    /// Build the draft replying to the given email.
    pub fn reply_to(email: &Email) -> Self {
        let Envelope {
            sender,
            subject,
            timestamp,
            ..
        } = &email.envelope;

        Self {
            recipients: sender.clone(),
            subject: format!("Re: {subject}"),
            body: format!("On {timestamp}, {sender} wrote:\n{}", email.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserialize_full_record() {
        let email: Email = serde_json::from_value(json!({
            "id": 7,
            "sender": "a@x.com",
            "recipients": ["b@x.com", "c@x.com"],
            "subject": "Hi",
            "body": "Hello",
            "timestamp": "Jan 2 2024, 10:00 AM",
            "read": false,
            "archived": true
        }))
        .unwrap();

        assert_eq!(7, email.id());
        assert_eq!(vec!["b@x.com", "c@x.com"], email.recipients);
        assert!(email.envelope.archived);
        assert!(!email.envelope.read);
    }

    #[test]
    fn deserialize_envelope_ignoring_extra_fields() {
        let envelope: Envelope = serde_json::from_value(json!({
            "id": 1,
            "sender": "a@x.com",
            "recipients": ["b@x.com"],
            "subject": "Hi",
            "body": "ignored",
            "timestamp": "t",
            "read": true,
            "archived": false
        }))
        .unwrap();

        assert_eq!("Hi", envelope.subject);
        assert!(envelope.read);
    }

    #[test]
    fn serialize_draft_fields_in_order() {
        let draft = Draft {
            recipients: "b@x.com".into(),
            subject: "S".into(),
            body: "B".into(),
        };

        assert_eq!(
            r#"{"recipients":"b@x.com","subject":"S","body":"B"}"#,
            serde_json::to_string(&draft).unwrap()
        );
    }

    #[test]
    fn prefill_reply_draft() {
        let email = Email {
            envelope: Envelope {
                id: 3,
                sender: "a@x.com".into(),
                subject: "Lunch".into(),
                timestamp: "Jan 1 2024, 12:00 PM".into(),
                ..Envelope::default()
            },
            recipients: vec!["me@x.com".into()],
            body: "Noon?".into(),
        };

        let draft = Draft::reply_to(&email);

        assert_eq!("a@x.com", draft.recipients);
        assert_eq!("Re: Lunch", draft.subject);
        assert_eq!("On Jan 1 2024, 12:00 PM, a@x.com wrote:\nNoon?", draft.body);
    }

    #[test]
    fn serialize_partial_updates() {
        assert_eq!(
            r#"{"read":true}"#,
            serde_json::to_string(&EmailUpdate::read(true)).unwrap()
        );
        assert_eq!(
            r#"{"archived":false}"#,
            serde_json::to_string(&EmailUpdate::archived(false)).unwrap()
        );
    }
}
