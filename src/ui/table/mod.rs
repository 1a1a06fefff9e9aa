pub mod arg;
#[allow(clippy::module_inception)]
pub mod table;

pub use table::*;

pub use self::arg::max_width::TableMaxWidthFlag;
