//! Browse module.
//!
//! This module contains the interactive session: the visible screen
//! is printed, then the user picks one of its buttons until they
//! quit.

pub mod command;

use anyhow::Result;
use log::{debug, warn};
use std::fmt;

use crate::{
    app::App,
    backend::Backend,
    email::Draft,
    printer::{PrintTableOpts, Printer},
    ui::prompt,
    view::{Button, Screen},
};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Choice {
    Button(Button),
    Edit,
    Send,
    Quit,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Button(button) => write!(f, "{button}"),
            Self::Edit => write!(f, "Edit draft"),
            Self::Send => write!(f, "Send"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

/// Build the choices offered on the given screen: its own buttons
/// first, then the navigation.
fn choices(screen: &Screen) -> Vec<Choice> {
    let mut choices: Vec<Choice> = screen
        .buttons()
        .into_iter()
        .cloned()
        .map(Choice::Button)
        .collect();

    if screen.draft().is_some() {
        choices.push(Choice::Edit);
        choices.push(Choice::Send);
    }

    choices.extend(Button::navigation().into_iter().map(Choice::Button));
    choices.push(Choice::Quit);
    choices
}

/// Apply the chosen action to the app. The draft shown on the
/// compose panel goes through `edit` before being shown again.
async fn apply<B: Backend>(
    app: &mut App<B>,
    screen: &Screen,
    choice: Choice,
    edit: impl FnOnce(Draft) -> Result<Draft>,
) -> Result<()> {
    match choice {
        Choice::Quit => Ok(()),
        Choice::Button(button) => {
            app.dispatch(button.action).await?;
            Ok(())
        }
        Choice::Edit => {
            let draft = edit(screen.draft().cloned().unwrap_or_default())?;
            app.fill_draft(draft);
            Ok(())
        }
        Choice::Send => {
            let draft = screen.draft().cloned().unwrap_or_default();
            app.send(draft).await?;
            Ok(())
        }
    }
}

/// Run the interactive session, starting from the current screen of
/// the given app.
///
/// A failing action is reported and leaves the screen as it was, so
/// the user can try again.
pub async fn run<B: Backend>(
    app: &mut App<B>,
    printer: &mut impl Printer,
    opts: PrintTableOpts,
) -> Result<()> {
    while let Some(screen) = app.screen().cloned() {
        screen.print(printer, opts)?;

        let choices = choices(&screen);
        let choice = match prompt::select("Action", &choices)? {
            Some(idx) => choices[idx].clone(),
            None => Choice::Quit,
        };
        debug!("selected choice {choice:?}");

        if choice == Choice::Quit {
            break;
        }

        if let Err(err) = apply(app, &screen, choice, prompt::draft).await {
            warn!("{err:#}");
            printer.print_log(format!("Error: {err:#}\n"))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use async_trait::async_trait;

    use super::*;
    use crate::{
        backend,
        email::{Email, EmailId, EmailUpdate, Envelope},
        mailbox::Mailbox,
        view::{Action, ComposeView, MailboxView, Panel},
    };

    /// Backend of a server refusing every request.
    struct OfflineBackend;

    #[async_trait]
    impl Backend for OfflineBackend {
        async fn list_envelopes(&self, _mailbox: Mailbox) -> backend::Result<Vec<Envelope>> {
            Err(backend::Error::Rejected("offline".into()))
        }

        async fn get_email(&self, _id: EmailId) -> backend::Result<Email> {
            Err(backend::Error::Rejected("offline".into()))
        }

        async fn update_email(&self, _id: EmailId, _update: EmailUpdate) -> backend::Result<()> {
            Err(backend::Error::Rejected("offline".into()))
        }

        async fn send_email(&self, _draft: &Draft) -> backend::Result<()> {
            Err(backend::Error::Rejected("offline".into()))
        }
    }

    fn composing(draft: Draft) -> (App<OfflineBackend>, Screen) {
        let mut app = App::new(OfflineBackend);
        let screen = app.fill_draft(draft).clone();
        (app, screen)
    }

    #[test]
    fn offer_screen_buttons_before_navigation() {
        let envelope = Envelope {
            id: 3,
            sender: "a@x.com".into(),
            subject: "Hi".into(),
            timestamp: "t".into(),
            read: false,
            archived: false,
        };
        let screen = Screen::Mailbox(MailboxView::new(Mailbox::Inbox, &[envelope]));
        let choices = choices(&screen);

        assert!(matches!(
            &choices[0],
            Choice::Button(button) if button.action == Action::Open { id: 3 }
        ));
        assert!(!choices.contains(&Choice::Send));
        assert_eq!(Some(&Choice::Quit), choices.last());
    }

    #[test]
    fn offer_edit_and_send_on_compose() {
        let screen = Screen::Compose(ComposeView::blank());
        let choices = choices(&screen);

        assert_eq!(Choice::Edit, choices[0]);
        assert_eq!(Choice::Send, choices[1]);
        assert_eq!("Quit", choices.last().unwrap().to_string());
    }

    #[tokio::test]
    async fn keep_compose_panel_when_editor_fails() {
        let draft = Draft {
            recipients: "b@x.com".into(),
            ..Draft::default()
        };
        let (mut app, screen) = composing(draft.clone());

        let res = apply(&mut app, &screen, Choice::Edit, |_| {
            Err(anyhow!("cannot edit body with editor"))
        })
        .await;

        assert!(res.is_err());
        assert_eq!(Some(&draft), app.screen().and_then(Screen::draft));
    }

    #[tokio::test]
    async fn show_edited_draft() {
        let (mut app, screen) = composing(Draft::default());

        apply(&mut app, &screen, Choice::Edit, |draft| {
            Ok(Draft {
                subject: "S".into(),
                ..draft
            })
        })
        .await
        .unwrap();

        let draft = app.screen().and_then(Screen::draft).unwrap();
        assert_eq!("S", draft.subject);
    }

    #[tokio::test]
    async fn keep_screen_when_action_fails() {
        let (mut app, screen) = composing(Draft::default());

        let button = Button::new("Inbox", Action::Load { mailbox: Mailbox::Inbox });
        let res = apply(&mut app, &screen, Choice::Button(button), Ok).await;

        assert!(res.unwrap_err().to_string().contains("offline"));
        assert_eq!(Some(Panel::Compose), app.screen().map(Screen::panel));

        let res = apply(&mut app, &screen, Choice::Send, Ok).await;
        assert!(res.is_err());
        assert_eq!(Some(Panel::Compose), app.screen().map(Screen::panel));
    }
}
