mod list;

use anyhow::Result;
use clap::Subcommand;

use crate::{config::TomlConfig, printer::Printer};

pub use self::list::MailboxListCommand;

/// List the emails of a mailbox.
#[derive(Debug, Subcommand)]
pub enum MailboxSubcommand {
    #[command(alias = "ls")]
    List(MailboxListCommand),
}

impl MailboxSubcommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        match self {
            Self::List(cmd) => cmd.execute(printer, config).await,
        }
    }
}
