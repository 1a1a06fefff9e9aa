use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_mangen::Man;
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{cli::Cli, config, printer::Printer};

/// Generate manual pages to a directory.
///
/// This command allows you to generate manual pages (following the
/// man page format) to the given directory. If the directory does not
/// exist, it will be created. Any existing man pages will be
/// overriden.
#[derive(Debug, Parser)]
pub struct ManualGenerateCommand {
    /// Directory where man files should be generated in.
    #[arg(value_parser = config::path_parser)]
    pub dir: PathBuf,
}

impl ManualGenerateCommand {
    pub async fn execute(self, printer: &mut impl Printer) -> Result<()> {
        info!("executing manual generate command");

        let cmd = Cli::command();
        let cmd_name = cmd.get_name().to_string();
        let subcmds = cmd.get_subcommands().cloned().collect::<Vec<_>>();
        let subcmds_len = subcmds.len() + 1;

        let mut buffer = Vec::new();
        Man::new(cmd)
            .render(&mut buffer)
            .context("cannot render man page")?;

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("cannot create directory {:?}", self.dir))?;
        printer.print_log(format!("Generating man page for command {cmd_name}…\n"))?;
        write_page(&self.dir.join(format!("{cmd_name}.1")), &buffer)?;

        for subcmd in subcmds {
            let subcmd_name = subcmd.get_name().to_string();

            let mut buffer = Vec::new();
            Man::new(subcmd)
                .render(&mut buffer)
                .with_context(|| format!("cannot render man page of {subcmd_name}"))?;

            printer.print_log(format!(
                "Generating man page for subcommand {subcmd_name}…\n"
            ))?;
            write_page(&self.dir.join(format!("{cmd_name}-{subcmd_name}.1")), &buffer)?;
        }

        printer.print(format!(
            "{subcmds_len} man page(s) successfully generated in {:?}!",
            self.dir
        ))?;

        Ok(())
    }
}

fn write_page(path: &Path, page: &[u8]) -> Result<()> {
    fs::write(path, page).with_context(|| format!("cannot write man page {path:?}"))
}
