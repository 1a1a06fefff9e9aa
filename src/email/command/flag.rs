use anyhow::Result;
use clap::Parser;
use log::info;

use crate::{
    backend::Backend,
    config::TomlConfig,
    email::{arg::ids::EmailIdsArgs, EmailId, EmailUpdate},
    printer::Printer,
};

/// Mark emails as read.
#[derive(Debug, Parser)]
pub struct EmailMarkReadCommand {
    #[command(flatten)]
    pub emails: EmailIdsArgs,
}

impl EmailMarkReadCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing mark email(s) as read command");

        let backend = config.to_backend()?;
        for id in &self.emails.ids {
            backend.update_email(*id, EmailUpdate::read(true)).await?;
        }

        printer.print(format!(
            "Email(s) {} successfully marked as read!",
            join_ids(&self.emails.ids)
        ))
    }
}

/// Mark emails as unread.
#[derive(Debug, Parser)]
pub struct EmailMarkUnreadCommand {
    #[command(flatten)]
    pub emails: EmailIdsArgs,
}

impl EmailMarkUnreadCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing mark email(s) as unread command");

        let backend = config.to_backend()?;
        for id in &self.emails.ids {
            backend.update_email(*id, EmailUpdate::read(false)).await?;
        }

        printer.print(format!(
            "Email(s) {} successfully marked as unread!",
            join_ids(&self.emails.ids)
        ))
    }
}

pub(super) fn join_ids(ids: &[EmailId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
