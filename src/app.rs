//! App module.
//!
//! The app coordinates the view state, the backend and the rendered
//! screen. Every transition takes `&mut self`, so transitions never
//! overlap: a screen is rendered from the response of the request
//! that triggered it, never from a concurrent one.
//!
//! A transition only changes the visible panel once all its requests
//! succeeded. When a request fails the previous screen stays as is
//! and the error is returned to the caller.

use log::{debug, info, trace};
use std::result;
use thiserror::Error;

use crate::{
    backend::{self, Backend},
    email::{Draft, EmailId, EmailUpdate},
    mailbox::Mailbox,
    view::{Action, Button, ComposeView, EmailView, MailboxView, Panel, Screen, View, ViewState},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] backend::Error),
    #[error("no action bound to key {0} on the {1:?} panel")]
    UnknownKey(String, Panel),
}

pub type Result<T> = result::Result<T, Error>;

pub struct App<B> {
    backend: B,
    state: ViewState,
    screen: Option<Screen>,
}

impl<B: Backend> App<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ViewState::default(),
            screen: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &View {
        self.state.current()
    }

    /// The rendered content of the visible panel, if any was
    /// rendered yet.
    pub fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    fn render(&mut self, view: View, screen: Screen) -> &Screen {
        let prev = self.state.show(view);
        trace!("switched view from {prev:?} to {view:?}");
        self.screen.insert(screen)
    }

    /// Show the listing of the given mailbox.
    pub async fn load_mailbox(&mut self, mailbox: Mailbox) -> Result<&Screen> {
        info!("loading mailbox {mailbox}");

        let envelopes = self.backend.list_envelopes(mailbox).await?;
        debug!("rendering {} email(s) of {mailbox}", envelopes.len());

        let screen = Screen::Mailbox(MailboxView::new(mailbox, &envelopes));
        Ok(self.render(View::Mailbox { mailbox }, screen))
    }

    /// Show the given email.
    ///
    /// The email is marked as read first, then fetched: the fetched
    /// record already reflects the read flag.
    pub async fn open_email(&mut self, id: EmailId) -> Result<&Screen> {
        info!("opening email {id}");

        let origin = match self.state.current() {
            View::Mailbox { mailbox } => Some(*mailbox),
            View::Email { origin, .. } => *origin,
            View::Compose => None,
        };

        self.backend.update_email(id, EmailUpdate::read(true)).await?;
        let email = self.backend.get_email(id).await?;

        let screen = Screen::Email(EmailView::new(email));
        Ok(self.render(View::Email { id, origin }, screen))
    }

    /// Set the read flag of the given email, then reload the mailbox
    /// listing matching the visible panel.
    pub async fn set_read(&mut self, id: EmailId, read: bool) -> Result<&Screen> {
        info!("setting read flag of email {id} to {read}");
        let target = self.state.current().reload_target();
        self.backend.update_email(id, EmailUpdate::read(read)).await?;
        self.load_mailbox(target).await
    }

    /// Set the archived flag of the given email, then reload the
    /// mailbox listing matching the visible panel.
    pub async fn set_archived(&mut self, id: EmailId, archived: bool) -> Result<&Screen> {
        info!("setting archived flag of email {id} to {archived}");
        let target = self.state.current().reload_target();
        self.backend
            .update_email(id, EmailUpdate::archived(archived))
            .await?;
        self.load_mailbox(target).await
    }

    /// Show the compose panel with cleared fields.
    pub fn compose(&mut self) -> &Screen {
        info!("composing new email");
        self.fill_draft(Draft::default())
    }

    /// Show the compose panel pre-filled with the reply to the given
    /// email.
    pub async fn reply(&mut self, id: EmailId) -> Result<&Screen> {
        info!("replying to email {id}");

        let email = match &self.screen {
            Some(Screen::Email(view)) if view.id == id => view.email.clone(),
            _ => self.backend.get_email(id).await?,
        };

        Ok(self.fill_draft(Draft::reply_to(&email)))
    }

    /// Show the compose panel filled with the given draft.
    pub fn fill_draft(&mut self, draft: Draft) -> &Screen {
        self.render(View::Compose, Screen::Compose(ComposeView::new(draft)))
    }

    /// Send the given draft from the compose panel, then show the
    /// sent mailbox.
    ///
    /// If the server rejects the draft, the compose panel stays
    /// visible with the draft so it can be fixed.
    pub async fn send(&mut self, draft: Draft) -> Result<&Screen> {
        info!("sending email to {}", draft.recipients);

        self.fill_draft(draft.clone());
        self.backend.send_email(&draft).await?;
        self.load_mailbox(Mailbox::Sent).await
    }

    /// Run the given action.
    pub async fn dispatch(&mut self, action: Action) -> Result<&Screen> {
        debug!("dispatching action {action:?}");

        match action {
            Action::Load { mailbox } => self.load_mailbox(mailbox).await,
            Action::Compose => Ok(self.compose()),
            Action::Open { id } => self.open_email(id).await,
            Action::Reply { id } => self.reply(id).await,
            Action::ToggleRead { id, read } => self.set_read(id, read).await,
            Action::ToggleArchive { id, archived } => self.set_archived(id, archived).await,
        }
    }

    /// Run the action bound to the given key on the current screen.
    pub async fn activate(&mut self, key: &str) -> Result<&Screen> {
        let action = match &self.screen {
            Some(screen) => screen.find_action(key),
            None => Button::navigation()
                .into_iter()
                .find(|button| button.key == key.trim())
                .map(|button| button.action),
        };

        match action {
            Some(action) => self.dispatch(action).await,
            None => Err(Error::UnknownKey(
                key.to_owned(),
                self.state.current().panel(),
            )),
        }
    }
}
