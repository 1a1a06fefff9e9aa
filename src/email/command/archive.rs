use anyhow::Result;
use clap::Parser;
use log::info;

use super::flag::join_ids;
use crate::{
    backend::Backend,
    config::TomlConfig,
    email::{arg::ids::EmailIdsArgs, EmailUpdate},
    printer::Printer,
};

/// Archive emails.
///
/// Archived emails leave the inbox and show up in the archive
/// mailbox.
#[derive(Debug, Parser)]
pub struct EmailArchiveCommand {
    #[command(flatten)]
    pub emails: EmailIdsArgs,
}

impl EmailArchiveCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing archive email(s) command");

        let backend = config.to_backend()?;
        for id in &self.emails.ids {
            backend.update_email(*id, EmailUpdate::archived(true)).await?;
        }

        printer.print(format!(
            "Email(s) {} successfully archived!",
            join_ids(&self.emails.ids)
        ))
    }
}

/// Move archived emails back to the inbox.
#[derive(Debug, Parser)]
pub struct EmailUnarchiveCommand {
    #[command(flatten)]
    pub emails: EmailIdsArgs,
}

impl EmailUnarchiveCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing unarchive email(s) command");

        let backend = config.to_backend()?;
        for id in &self.emails.ids {
            backend.update_email(*id, EmailUpdate::archived(false)).await?;
        }

        printer.print(format!(
            "Email(s) {} successfully moved to inbox!",
            join_ids(&self.emails.ids)
        ))
    }
}
