pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::OutputFormat;
pub use crate::core::{driver::run, finder::find_pair};
pub use crate::domain::model::{PairReport, PairResult, DEFAULT_SEQUENCE};
pub use crate::utils::error::{PairError, Result};
