pub mod config;
pub mod error;
pub mod flow;

pub use config::*;
pub use error::*;
pub use flow::*;
