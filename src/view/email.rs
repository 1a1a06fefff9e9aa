//! Single email module.

use anyhow::Result;
use serde::Serialize;

use crate::{
    email::{Email, EmailId},
    printer::{Print, WriteColor},
    ui::Cell,
    view::action::{Action, Button},
};

/// The single-email panel.
///
/// An opened email has just been marked as read, so the read toggle
/// always offers to mark it back as unread.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EmailView {
    pub id: EmailId,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub timestamp: String,
    pub body: String,
    pub reply: Button,
    pub read_toggle: Button,
    pub archive_toggle: Button,
    #[serde(skip)]
    pub email: Email,
}

impl EmailView {
    pub fn new(email: Email) -> Self {
        let id = email.id();
        let archived = email.envelope.archived;
        let archive_label = if archived {
            "Remove from Archive"
        } else {
            "Add to Archive"
        };

        Self {
            id,
            from: email.envelope.sender.clone(),
            to: email.recipients.join(", "),
            subject: email.envelope.subject.clone(),
            timestamp: email.envelope.timestamp.clone(),
            body: email.body.clone(),
            reply: Button::new("Reply", Action::Reply { id }),
            read_toggle: Button::read_toggle(id, true),
            archive_toggle: Button::new(
                archive_label,
                Action::ToggleArchive {
                    id,
                    archived: !archived,
                },
            ),
            email,
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        [&self.reply, &self.read_toggle, &self.archive_toggle].into_iter()
    }
}

impl Print for EmailView {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        let headers = [
            ("From", &self.from),
            ("To", &self.to),
            ("Subject", &self.subject),
            ("Timestamp", &self.timestamp),
        ];

        for (name, value) in headers {
            Cell::new(format!("{name}:")).bold().print(writer)?;
            writeln!(writer, " {value}")?;
        }

        let buttons = self
            .buttons()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(writer, "{buttons}")?;

        Cell::new("─".repeat(40)).dimmed().print(writer)?;
        writeln!(writer)?;
        writeln!(writer, "{}", self.body)?;

        Ok(writer.reset()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{email::Envelope, ui::table::tests::StringWriter};

    fn email(archived: bool) -> Email {
        Email {
            envelope: Envelope {
                id: 5,
                sender: "a@x.com".into(),
                subject: "Hi".into(),
                timestamp: "t".into(),
                read: true,
                archived,
            },
            recipients: vec!["b@x.com".into(), "c@x.com".into()],
            body: "Hello there".into(),
        }
    }

    #[test]
    fn join_recipients() {
        let view = EmailView::new(email(false));
        assert_eq!("b@x.com, c@x.com", view.to);
    }

    #[test]
    fn offer_mark_as_unread() {
        let view = EmailView::new(email(false));
        assert_eq!("Mark as Unread", view.read_toggle.label);
        assert_eq!(Action::ToggleRead { id: 5, read: false }, view.read_toggle.action);
    }

    #[test]
    fn archive_toggle_negates_flag() {
        let view = EmailView::new(email(false));
        assert_eq!("Add to Archive", view.archive_toggle.label);
        assert_eq!(
            Action::ToggleArchive {
                id: 5,
                archived: true
            },
            view.archive_toggle.action
        );

        let view = EmailView::new(email(true));
        assert_eq!("Remove from Archive", view.archive_toggle.label);
        assert_eq!(
            Action::ToggleArchive {
                id: 5,
                archived: false
            },
            view.archive_toggle.action
        );
    }

    #[test]
    fn print_headers_actions_and_body() {
        let view = EmailView::new(email(false));
        let mut writer = StringWriter::default();
        view.print(&mut writer).unwrap();

        let rule = "─".repeat(40);
        let expected = [
            "From: a@x.com",
            "To: b@x.com, c@x.com",
            "Subject: Hi",
            "Timestamp: t",
            "[re5] Reply  [r5] Mark as Unread  [a5] Add to Archive",
            rule.as_str(),
            "Hello there",
            "",
        ]
        .join("\n");
        assert_eq!(expected, writer.content);
    }
}
