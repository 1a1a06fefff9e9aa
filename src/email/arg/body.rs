use clap::Parser;

/// The optional raw body argument parser.
#[derive(Debug, Default, Parser)]
pub struct EmailBodyFlag {
    /// The body of the email.
    ///
    /// When given, the email is sent without prompting for it.
    #[arg(long, short, value_name = "TEXT")]
    pub body: Option<String>,
}
