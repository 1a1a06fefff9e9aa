use clap::Parser;

use crate::email::EmailId;

/// The email id argument parser.
#[derive(Debug, Parser)]
pub struct EmailIdArg {
    /// The email id, as assigned by the server.
    #[arg(value_name = "ID", required = true)]
    pub id: EmailId,
}

/// The emails ids arguments parser.
#[derive(Debug, Parser)]
pub struct EmailIdsArgs {
    /// The list of emails ids, as assigned by the server.
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<EmailId>,
}
