use anyhow::Result;
use clap::Parser;
use log::info;

use crate::{
    app::App,
    config::TomlConfig,
    mailbox::arg::name::MailboxNameOptionalArg,
    printer::{PrintTableOpts, Printer},
    ui::table::TableMaxWidthFlag,
};

/// List all emails of a mailbox.
///
/// This command lists the emails of the given mailbox in the order
/// the server returns them. Each email comes with the keys of its
/// actions, usable from the browse command.
#[derive(Debug, Default, Parser)]
pub struct MailboxListCommand {
    #[command(flatten)]
    pub mailbox: MailboxNameOptionalArg,

    #[command(flatten)]
    pub table: TableMaxWidthFlag,
}

impl MailboxListCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing list mailbox command");

        let mailbox = self.mailbox.name.unwrap_or_else(|| config.default_mailbox());
        let opts = PrintTableOpts {
            max_width: self
                .table
                .max_width
                .or(config.mailbox_listing_table_max_width),
        };

        let mut app = App::new(config.to_backend()?);
        let screen = app.load_mailbox(mailbox).await?;
        screen.print(printer, opts)
    }
}
