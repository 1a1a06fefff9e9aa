use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;

use crate::{
    app::App,
    config::TomlConfig,
    email::arg::{body::EmailBodyFlag, ids::EmailIdArg},
    printer::Printer,
    ui::prompt,
};

/// Reply to an email.
///
/// The reply is addressed to the sender of the given email, its
/// subject is prefixed with "Re: " and its body quotes the original
/// body. Fields are then edited interactively, unless a body is
/// given from the command line.
#[derive(Debug, Parser)]
pub struct EmailReplyCommand {
    #[command(flatten)]
    pub email: EmailIdArg,

    #[command(flatten)]
    pub body: EmailBodyFlag,
}

impl EmailReplyCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing reply email command");

        let mut app = App::new(config.to_backend()?);

        let id = self.email.id;
        let mut draft = app
            .reply(id)
            .await?
            .draft()
            .cloned()
            .ok_or_else(|| anyhow!("cannot build reply to email {id}"))?;

        match self.body.body {
            Some(body) => draft.body = format!("{body}\n\n{}", draft.body),
            None => {
                draft = prompt::draft(draft)?;
                if !prompt::confirm("Send the reply?")? {
                    return printer.print("Reply discarded.");
                }
            }
        }

        app.send(draft).await?;
        printer.print("Reply successfully sent!")
    }
}
