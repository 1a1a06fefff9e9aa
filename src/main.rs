use anyhow::Result;
use clap::Parser;
use env_logger::{Env, DEFAULT_FILTER_ENV};
use webmail::{cli::Cli, printer::StdoutPrinter};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().filter_or(DEFAULT_FILTER_ENV, "warn"));

    let cli = Cli::parse();
    let mut printer = StdoutPrinter::new(cli.output, cli.color);
    let config = cli.load_config()?;

    cli.command
        .unwrap_or_default()
        .execute(&mut printer, &config)
        .await
}
