//! View state module.
//!
//! Exactly one panel is visible at a time. The visible panel is a
//! single [`View`] value changed through [`ViewState::show`], so
//! mutual exclusion holds by construction.

use serde::Serialize;

use crate::{email::EmailId, mailbox::Mailbox};

/// The three mutually exclusive regions of the client.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Panel {
    Mailbox,
    Email,
    Compose,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "panel")]
pub enum View {
    Mailbox {
        mailbox: Mailbox,
    },
    Email {
        id: EmailId,
        /// Mailbox the email was opened from, if any.
        origin: Option<Mailbox>,
    },
    Compose,
}

impl View {
    pub fn panel(&self) -> Panel {
        match self {
            Self::Mailbox { .. } => Panel::Mailbox,
            Self::Email { .. } => Panel::Email,
            Self::Compose => Panel::Compose,
        }
    }

    /// Mailbox to reload after a flag changed while this view is
    /// visible.
    ///
    /// From a mailbox listing this is the listed mailbox. From a
    /// single email this is the mailbox it was opened from, falling
    /// back to the inbox when it was opened directly.
    pub fn reload_target(&self) -> Mailbox {
        match self {
            Self::Mailbox { mailbox } => *mailbox,
            Self::Email {
                origin: Some(mailbox),
                ..
            } => *mailbox,
            Self::Email { origin: None, .. } | Self::Compose => Mailbox::Inbox,
        }
    }
}

impl Default for View {
    fn default() -> Self {
        Self::Mailbox {
            mailbox: Mailbox::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ViewState {
    view: View,
}

impl ViewState {
    pub fn current(&self) -> &View {
        &self.view
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.view.panel() == panel
    }

    /// Show the given view, hiding the previous one. Returns the
    /// previous view.
    pub fn show(&mut self, view: View) -> View {
        std::mem::replace(&mut self.view, view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANELS: [Panel; 3] = [Panel::Mailbox, Panel::Email, Panel::Compose];

    fn visible_panels(state: &ViewState) -> Vec<Panel> {
        PANELS
            .into_iter()
            .filter(|panel| state.is_visible(*panel))
            .collect()
    }

    #[test]
    fn start_on_inbox() {
        let state = ViewState::default();
        assert_eq!(
            &View::Mailbox {
                mailbox: Mailbox::Inbox
            },
            state.current()
        );
    }

    #[test]
    fn show_exactly_one_panel() {
        let mut state = ViewState::default();
        assert_eq!(vec![Panel::Mailbox], visible_panels(&state));

        state.show(View::Email {
            id: 1,
            origin: None,
        });
        assert_eq!(vec![Panel::Email], visible_panels(&state));

        let prev = state.show(View::Compose);
        assert_eq!(Panel::Email, prev.panel());
        assert_eq!(vec![Panel::Compose], visible_panels(&state));
    }

    #[test]
    fn reload_origin_mailbox() {
        let view = View::Email {
            id: 1,
            origin: Some(Mailbox::Archive),
        };
        assert_eq!(Mailbox::Archive, view.reload_target());

        let view = View::Email {
            id: 1,
            origin: None,
        };
        assert_eq!(Mailbox::Inbox, view.reload_target());

        let view = View::Mailbox {
            mailbox: Mailbox::Sent,
        };
        assert_eq!(Mailbox::Sent, view.reload_target());
    }
}
