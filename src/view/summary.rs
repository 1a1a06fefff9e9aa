//! Mailbox listing module.
//!
//! A mailbox listing is a title followed by one summary block per
//! email, in the order the server returned them.

use anyhow::Result;
use serde::Serialize;
use termcolor::Color;

use crate::{
    email::{EmailId, Envelope},
    mailbox::Mailbox,
    printer::{Print, PrintTable, PrintTableOpts, WriteColor},
    ui::{Cell, Row, Table},
    view::action::{Action, Button},
};

/// The compact representation of one email in a mailbox listing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SummaryBlock {
    pub id: EmailId,
    pub sender: String,
    pub subject: String,
    pub timestamp: String,
    /// Read emails are shaded.
    pub shaded: bool,
    pub open: Button,
    pub read_toggle: Button,
    /// Absent from the sent mailbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_toggle: Option<Button>,
}

impl SummaryBlock {
    pub fn new(envelope: &Envelope, mailbox: Mailbox) -> Self {
        let id = envelope.id;

        Self {
            id,
            sender: envelope.sender.clone(),
            subject: envelope.subject.clone(),
            timestamp: envelope.timestamp.clone(),
            shaded: envelope.read,
            open: Button::new("Open", Action::Open { id }),
            read_toggle: Button::read_toggle(id, envelope.read),
            archive_toggle: mailbox
                .allows_archive()
                .then(|| Button::archive_toggle(id, envelope.archived)),
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        [Some(&self.open), Some(&self.read_toggle), self.archive_toggle.as_ref()]
            .into_iter()
            .flatten()
    }
}

impl Table for SummaryBlock {
    fn head() -> Row {
        Row::new()
            .cell(Cell::new("KEY").bold().underline())
            .cell(Cell::new("SENDER").bold().underline())
            .cell(Cell::new("SUBJECT").shrinkable().bold().underline())
            .cell(Cell::new("TIMESTAMP").bold().underline())
            .cell(Cell::new("ACTIONS").bold().underline())
    }

    fn row(&self) -> Row {
        let unread = !self.shaded;
        let actions = [Some(&self.read_toggle), self.archive_toggle.as_ref()]
            .into_iter()
            .flatten()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("  ");

        let shaded = self.shaded;

        Row::new()
            .cell(Cell::new(&self.open.key).fg(Color::Red).bold_if(unread).shaded_if(shaded))
            .cell(Cell::new(&self.sender).fg(Color::Blue).bold_if(unread).shaded_if(shaded))
            .cell(
                Cell::new(&self.subject)
                    .shrinkable()
                    .fg(Color::Green)
                    .bold_if(unread)
                    .shaded_if(shaded),
            )
            .cell(
                Cell::new(&self.timestamp)
                    .fg(Color::Yellow)
                    .bold_if(unread)
                    .shaded_if(shaded),
            )
            .cell(Cell::new(actions).shaded_if(shaded))
    }
}

/// The mailbox-list panel.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MailboxView {
    pub mailbox: Mailbox,
    pub title: String,
    pub summaries: Vec<SummaryBlock>,
}

impl MailboxView {
    pub fn new(mailbox: Mailbox, envelopes: &[Envelope]) -> Self {
        Self {
            mailbox,
            title: mailbox.title().to_owned(),
            summaries: envelopes
                .iter()
                .map(|envelope| SummaryBlock::new(envelope, mailbox))
                .collect(),
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.summaries.iter().flat_map(SummaryBlock::buttons)
    }
}

impl PrintTable for MailboxView {
    fn print_table(&self, writer: &mut dyn WriteColor, opts: PrintTableOpts) -> Result<()> {
        writeln!(writer)?;
        let title = Cell::new(&self.title).bold();
        title.print(writer)?;
        writeln!(writer)?;
        writeln!(writer)?;

        if self.summaries.is_empty() {
            writeln!(writer, "No email.")?;
        } else {
            Table::print(writer, &self.summaries, opts)?;
        }

        writeln!(writer)?;
        Ok(())
    }
}
