use clap::Parser;

use crate::mailbox::Mailbox;

/// The optional mailbox name argument parser.
#[derive(Debug, Default, Parser)]
pub struct MailboxNameOptionalArg {
    /// The name of the mailbox.
    ///
    /// If omitted, the default mailbox from the configuration is
    /// used (inbox unless configured otherwise).
    #[arg(name = "mailbox_name", value_name = "MAILBOX", value_enum)]
    pub name: Option<Mailbox>,
}
