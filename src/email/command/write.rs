use anyhow::Result;
use clap::Parser;
use log::info;

use crate::{
    app::App,
    config::TomlConfig,
    email::{arg::body::EmailBodyFlag, Draft},
    printer::Printer,
    ui::prompt,
};

/// Write a new email.
///
/// Missing fields are prompted interactively. Recipients are given
/// as a comma-separated list, checked by the server only.
#[derive(Debug, Parser)]
pub struct EmailWriteCommand {
    /// The comma-separated list of recipients.
    #[arg(long, short, value_name = "ADDRESSES")]
    pub to: Option<String>,

    /// The subject of the email.
    #[arg(long, short, value_name = "TEXT")]
    pub subject: Option<String>,

    #[command(flatten)]
    pub body: EmailBodyFlag,
}

impl EmailWriteCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing write email command");

        let mut app = App::new(config.to_backend()?);
        app.compose();

        let draft = Draft {
            recipients: match self.to {
                Some(to) => to,
                None => prompt::text("To", "")?,
            },
            subject: match self.subject {
                Some(subject) => subject,
                None => prompt::text("Subject", "")?,
            },
            body: match self.body.body {
                Some(body) => body,
                None => prompt::body("")?,
            },
        };

        app.send(draft).await?;
        printer.print("Email successfully sent!")
    }
}
