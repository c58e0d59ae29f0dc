#[macro_use]

mod log;
mod error;
pub mod filter;

pub use error::LogError;
pub use filter::Filter;

pub type Result<T> = core::result::Result<T, LogError>;

pub use log::*;
