//! Action module.
//!
//! Every rendered screen exposes its buttons. A button binds a key,
//! stable for the element it belongs to, to the [`Action`] run when
//! it is activated. Keys are looked up in the current screen only:
//! screens are rebuilt on every render, so are their bindings.

use serde::Serialize;
use std::fmt;

use crate::{email::EmailId, mailbox::Mailbox};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Action {
    /// Show the given mailbox listing.
    Load { mailbox: Mailbox },
    /// Show an empty compose form.
    Compose,
    /// Show the given email, marking it as read.
    Open { id: EmailId },
    /// Show the compose form replying to the given email.
    Reply { id: EmailId },
    /// Set the read flag of the given email to `read`.
    ToggleRead { id: EmailId, read: bool },
    /// Set the archived flag of the given email to `archived`.
    ToggleArchive { id: EmailId, archived: bool },
}

impl Action {
    /// The key identifying the element bound to this action.
    pub fn key(&self) -> String {
        match self {
            Self::Load { mailbox } => mailbox.to_string(),
            Self::Compose => String::from("compose"),
            Self::Open { id } => format!("o{id}"),
            Self::Reply { id } => format!("re{id}"),
            Self::ToggleRead { id, .. } => format!("r{id}"),
            Self::ToggleArchive { id, .. } => format!("a{id}"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Button {
    pub key: String,
    pub label: String,
    pub action: Action,
}

impl Button {
    pub fn new(label: impl ToString, action: Action) -> Self {
        Self {
            key: action.key(),
            label: label.to_string(),
            action,
        }
    }

    /// Build the button flipping the read flag currently displayed.
    pub fn read_toggle(id: EmailId, read: bool) -> Self {
        let label = if read { "Mark as Unread" } else { "Mark as Read" };
        Self::new(label, Action::ToggleRead { id, read: !read })
    }

    /// Build the button flipping the archived flag currently
    /// displayed, as shown in mailbox listings.
    pub fn archive_toggle(id: EmailId, archived: bool) -> Self {
        let label = if archived {
            "Move to Inbox"
        } else {
            "Add to Archive"
        };
        Self::new(label, Action::ToggleArchive {
            id,
            archived: !archived,
        })
    }

    /// The buttons always available, whatever the visible panel.
    pub fn navigation() -> Vec<Self> {
        vec![
            Self::new("Inbox", Action::Load { mailbox: Mailbox::Inbox }),
            Self::new("Sent", Action::Load { mailbox: Mailbox::Sent }),
            Self::new("Archived", Action::Load { mailbox: Mailbox::Archive }),
            Self::new("Compose", Action::Compose),
        ]
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.key, self.label)
    }
}
