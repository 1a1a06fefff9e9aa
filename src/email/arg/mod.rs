pub mod body;
pub mod ids;
