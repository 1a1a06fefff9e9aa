use anyhow::Result;
use clap::Parser;
use log::info;

use crate::{
    app::App,
    browse,
    config::TomlConfig,
    mailbox::arg::name::MailboxNameOptionalArg,
    printer::{PrintTableOpts, Printer},
    ui::table::TableMaxWidthFlag,
};

/// Browse emails interactively.
///
/// This command starts from the listing of the given mailbox, then
/// lets you open, reply, flag, archive and write emails until you
/// quit.
#[derive(Debug, Parser)]
pub struct BrowseCommand {
    #[command(flatten)]
    pub mailbox: MailboxNameOptionalArg,

    #[command(flatten)]
    pub table: TableMaxWidthFlag,
}

impl BrowseCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing browse command");

        let mailbox = self.mailbox.name.unwrap_or_else(|| config.default_mailbox());
        let opts = PrintTableOpts {
            max_width: self
                .table
                .max_width
                .or(config.mailbox_listing_table_max_width),
        };

        let mut app = App::new(config.to_backend()?);
        app.load_mailbox(mailbox).await?;
        browse::run(&mut app, printer, opts).await?;

        printer.print_log("Bye!\n")
    }
}
