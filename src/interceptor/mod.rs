pub mod body;
pub mod log;
pub mod sink;
