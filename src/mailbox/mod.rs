//! Mailbox module.
//!
//! A mailbox is a server-side named collection of emails. The server
//! computes its content, the client only names it.

pub mod arg;
pub mod command;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mailbox {
    #[default]
    Inbox,
    Sent,
    #[serde(alias = "archived")]
    #[value(alias = "archived")]
    Archive,
}

impl Mailbox {
    pub const ALL: [Mailbox; 3] = [Mailbox::Inbox, Mailbox::Sent, Mailbox::Archive];

    /// The name used in the `/emails/{mailbox}` endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Archive => "archive",
        }
    }

    /// The capitalized name shown above the mailbox listing.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Sent => "Sent",
            Self::Archive => "Archive",
        }
    }

    /// Emails listed in the sent mailbox cannot be (un)archived.
    pub fn allows_archive(&self) -> bool {
        !matches!(self, Self::Sent)
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mailbox_names() {
        assert_eq!(Ok(Mailbox::Inbox), Mailbox::from_str("INBOX", true));
        assert_eq!(Ok(Mailbox::Sent), Mailbox::from_str("sent", true));
        assert_eq!(Ok(Mailbox::Archive), Mailbox::from_str("archived", true));
        assert!(Mailbox::from_str("drafts", true).is_err());
    }

    #[test]
    fn capitalize_titles() {
        let titles: Vec<_> = Mailbox::ALL.iter().map(Mailbox::title).collect();
        assert_eq!(vec!["Inbox", "Sent", "Archive"], titles);
    }

    #[test]
    fn only_sent_forbids_archive() {
        assert!(Mailbox::Inbox.allows_archive());
        assert!(Mailbox::Archive.allows_archive());
        assert!(!Mailbox::Sent.allows_archive());
    }

    #[test]
    fn serialize_as_endpoint_name() {
        assert_eq!("\"archive\"", serde_json::to_string(&Mailbox::Archive).unwrap());
        assert_eq!(
            Mailbox::Archive,
            serde_json::from_str::<Mailbox>("\"archived\"").unwrap()
        );
    }
}
