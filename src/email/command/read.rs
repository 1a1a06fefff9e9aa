use anyhow::Result;
use clap::Parser;
use log::info;

use crate::{
    app::App,
    config::TomlConfig,
    email::arg::ids::EmailIdArg,
    printer::{PrintTableOpts, Printer},
};

/// Read an email.
///
/// This command shows the headers and the body of the given email.
/// The email is marked as read.
#[derive(Debug, Parser)]
pub struct EmailReadCommand {
    #[command(flatten)]
    pub email: EmailIdArg,
}

impl EmailReadCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing read email command");

        let mut app = App::new(config.to_backend()?);
        let screen = app.open_email(self.email.id).await?;
        screen.print(printer, PrintTableOpts::default())
    }
}
