pub mod gateway;

pub use crate::domain::model::{LeagueData, MatchResult};
pub use crate::domain::ports::{DataProvider, Storage};
pub use crate::utils::error::Result;
