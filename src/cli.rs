use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    browse::command::BrowseCommand,
    completion::command::CompletionGenerateCommand,
    config::{self, TomlConfig},
    email::command::EmailSubcommand,
    mailbox::command::{MailboxListCommand, MailboxSubcommand},
    manual::command::ManualGenerateCommand,
    output::{ColorFmt, OutputFmt},
    printer::Printer,
};

#[derive(Parser, Debug)]
#[command(
    name = "webmail",
    author,
    version,
    about,
    propagate_version = true,
    infer_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<WebmailCommand>,

    /// Override the default configuration file path
    ///
    /// The given path is shell-expanded then canonicalized (if
    /// applicable). When no path is given and no configuration file
    /// exists at the default paths, the default configuration is
    /// used.
    #[arg(long, short, global = true)]
    #[arg(value_name = "PATH", value_parser = config::path_parser)]
    pub config: Option<PathBuf>,

    /// Override the url of the webmail server
    ///
    /// Takes precedence over the url of the configuration file.
    #[arg(long, short, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Customize the output format
    ///
    /// The output format determine how to display commands output to
    /// the terminal.
    ///
    /// The possible values are:
    ///
    ///  - json: output will be in a form of a JSON-compatible object
    ///
    ///  - plain: output will be in a form of either a plain text or
    ///    table, depending on the command
    #[arg(long, short, global = true)]
    #[arg(value_name = "FORMAT", value_enum, default_value_t = Default::default())]
    pub output: OutputFmt,

    /// Control when to use colors
    ///
    /// The default setting is 'auto': colors are used when printing
    /// to a terminal, and suppressed when the output is redirected to
    /// a file or a pipe, or when the TERM environment variable is
    /// unset or set to 'dumb'.
    ///
    /// The possible values are:
    ///
    ///  - never: colors will never be used
    ///
    ///  - always: colors will always be used regardless of where output is sent
    ///
    ///  - ansi: like 'always', but emits ANSI escapes (even in a Windows console)
    ///
    ///  - auto: colors are used when it makes sense
    #[arg(long, short = 'C', global = true)]
    #[arg(value_name = "MODE", value_enum, default_value_t = Default::default())]
    pub color: ColorFmt,
}

impl Cli {
    /// Load the configuration, then apply the command line
    /// overrides.
    pub fn load_config(&self) -> Result<TomlConfig> {
        let config = TomlConfig::from_some_path_or_default(self.config.as_deref())?;
        Ok(self.override_config(config))
    }

    fn override_config(&self, mut config: TomlConfig) -> TomlConfig {
        if let Some(url) = &self.url {
            config.url = Some(url.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum WebmailCommand {
    /// List mailboxes
    #[command(subcommand)]
    #[command(alias = "mailboxes")]
    Mailbox(MailboxSubcommand),

    /// Manage emails
    #[command(subcommand)]
    #[command(alias = "emails")]
    Email(EmailSubcommand),

    /// Browse emails interactively
    Browse(BrowseCommand),

    /// Generate manual pages to a directory
    #[command(arg_required_else_help = true)]
    #[command(alias = "manuals", alias = "mans")]
    Manual(ManualGenerateCommand),

    /// Print completion script for a shell to stdout
    #[command(arg_required_else_help = true)]
    #[command(alias = "completions")]
    Completion(CompletionGenerateCommand),
}

impl Default for WebmailCommand {
    fn default() -> Self {
        Self::Mailbox(MailboxSubcommand::List(MailboxListCommand::default()))
    }
}

impl WebmailCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        match self {
            Self::Mailbox(cmd) => cmd.execute(printer, config).await,
            Self::Email(cmd) => cmd.execute(printer, config).await,
            Self::Browse(cmd) => cmd.execute(printer, config).await,
            Self::Manual(cmd) => cmd.execute(printer).await,
            Self::Completion(cmd) => cmd.execute(printer).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::mailbox::Mailbox;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_to_mailbox_listing() {
        let cli = Cli::try_parse_from(["webmail"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            WebmailCommand::default(),
            WebmailCommand::Mailbox(MailboxSubcommand::List(cmd)) if cmd.mailbox.name.is_none()
        ));
    }

    #[test]
    fn parse_commands() {
        let cli =
            Cli::try_parse_from(["webmail", "mailboxes", "ls", "archived", "-w", "80"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(WebmailCommand::Mailbox(MailboxSubcommand::List(cmd)))
                if cmd.mailbox.name == Some(Mailbox::Archive) && cmd.table.max_width == Some(80)
        ));

        let cli = Cli::try_parse_from(["webmail", "email", "compose", "--to", "a@x.com"]).unwrap();
        assert!(matches!(cli.command, Some(WebmailCommand::Email(_))));

        assert!(Cli::try_parse_from(["webmail", "mailbox", "list", "drafts"]).is_err());
    }

    #[test]
    fn override_config_url() {
        let cli = Cli::try_parse_from(["webmail", "--url", "http://localhost:9000"]).unwrap();
        let config = TomlConfig {
            url: Some("http://localhost:8000".into()),
            ..TomlConfig::default()
        };
        let config = cli.override_config(config);
        assert_eq!(
            "http://localhost:9000",
            config.to_server_config().unwrap().url
        );
    }
}
