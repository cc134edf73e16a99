pub mod driver;
pub mod finder;

pub use crate::domain::model::{PairReport, PairResult};
pub use crate::utils::error::Result;
