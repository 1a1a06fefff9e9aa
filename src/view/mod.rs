//! View module.
//!
//! This module renders server responses into screens, one per
//! panel. Screens are plain data: printing them is the job of the
//! printer, running their actions is the job of the [`App`].
//!
//! [`App`]: crate::app::App

pub mod action;
pub mod compose;
pub mod email;
pub mod state;
pub mod summary;

use anyhow::Result;
use serde::Serialize;

use crate::{
    email::Draft,
    printer::{Print, PrintTable, PrintTableOpts, Printer, WriteColor},
};

#[doc(inline)]
pub use self::{
    action::{Action, Button},
    compose::ComposeView,
    email::EmailView,
    state::{Panel, View, ViewState},
    summary::{MailboxView, SummaryBlock},
};

/// The content of the visible panel.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "panel")]
pub enum Screen {
    Mailbox(MailboxView),
    Email(EmailView),
    Compose(ComposeView),
}

impl Screen {
    pub fn panel(&self) -> Panel {
        match self {
            Self::Mailbox(_) => Panel::Mailbox,
            Self::Email(_) => Panel::Email,
            Self::Compose(_) => Panel::Compose,
        }
    }

    /// The draft of the compose panel.
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Compose(view) => Some(&view.draft),
            _ => None,
        }
    }

    /// The buttons rendered on this screen, navigation excluded.
    pub fn buttons(&self) -> Vec<&Button> {
        match self {
            Self::Mailbox(view) => view.buttons().collect(),
            Self::Email(view) => view.buttons().collect(),
            Self::Compose(_) => Vec::new(),
        }
    }

    /// Find the action bound to the given key, on this screen or in
    /// the navigation.
    pub fn find_action(&self, key: &str) -> Option<Action> {
        let key = key.trim();
        self.buttons()
            .into_iter()
            .find(|button| button.key == key)
            .map(|button| button.action)
            .or_else(|| {
                Button::navigation()
                    .into_iter()
                    .find(|button| button.key == key)
                    .map(|button| button.action)
            })
    }

    /// Print the screen using the given printer. JSON output carries
    /// the `panel` tag of the screen.
    pub fn print(&self, printer: &mut impl Printer, opts: PrintTableOpts) -> Result<()> {
        printer.print_table(Box::new(self.clone()), opts)
    }
}

impl PrintTable for Screen {
    fn print_table(&self, writer: &mut dyn WriteColor, opts: PrintTableOpts) -> Result<()> {
        match self {
            Self::Mailbox(view) => view.print_table(writer, opts),
            Self::Email(view) => view.print(writer),
            Self::Compose(view) => view.print(writer),
        }
    }
}
