use crate::domain::model::{LeagueData, MatchResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// A backend that can serve and update the league data.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn get_all_data(&self) -> Result<LeagueData>;

    /// Returns `Ok(false)` when the backend declined or failed the write
    /// without raising an error.
    async fn submit_result(
        &self,
        location: &str,
        league: &str,
        group: &str,
        week: &str,
        result: MatchResult,
    ) -> Result<bool>;
}
