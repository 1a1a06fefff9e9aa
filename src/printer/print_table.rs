use anyhow::Result;

use crate::printer::WriteColor;

pub trait PrintTable {
    fn print_table(&self, writer: &mut dyn WriteColor, opts: PrintTableOpts) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PrintTableOpts {
    pub max_width: Option<usize>,
}
