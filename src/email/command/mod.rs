mod archive;
mod flag;
mod read;
mod reply;
mod write;

use anyhow::Result;
use clap::Subcommand;

use crate::{config::TomlConfig, printer::Printer};

use self::{
    archive::{EmailArchiveCommand, EmailUnarchiveCommand},
    flag::{EmailMarkReadCommand, EmailMarkUnreadCommand},
    read::EmailReadCommand,
    reply::EmailReplyCommand,
    write::EmailWriteCommand,
};

/// Manage emails.
///
/// An email is identified by the id the server assigned to it, as
/// shown in mailbox listings.
#[derive(Debug, Subcommand)]
pub enum EmailSubcommand {
    #[command(arg_required_else_help = true)]
    Read(EmailReadCommand),

    #[command(arg_required_else_help = true)]
    Reply(EmailReplyCommand),

    #[command(alias = "compose", alias = "new")]
    Write(EmailWriteCommand),

    #[command(arg_required_else_help = true)]
    MarkRead(EmailMarkReadCommand),

    #[command(arg_required_else_help = true)]
    MarkUnread(EmailMarkUnreadCommand),

    #[command(arg_required_else_help = true)]
    Archive(EmailArchiveCommand),

    #[command(arg_required_else_help = true)]
    Unarchive(EmailUnarchiveCommand),
}

impl EmailSubcommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        match self {
            Self::Read(cmd) => cmd.execute(printer, config).await,
            Self::Reply(cmd) => cmd.execute(printer, config).await,
            Self::Write(cmd) => cmd.execute(printer, config).await,
            Self::MarkRead(cmd) => cmd.execute(printer, config).await,
            Self::MarkUnread(cmd) => cmd.execute(printer, config).await,
            Self::Archive(cmd) => cmd.execute(printer, config).await,
            Self::Unarchive(cmd) => cmd.execute(printer, config).await,
        }
    }
}
