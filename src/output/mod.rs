#[allow(clippy::module_inception)]
pub mod output;

pub use output::*;
