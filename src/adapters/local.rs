use crate::adapters::storage::LocalStorage;
use crate::domain::model::{LeagueData, MatchResult};
use crate::domain::ports::{DataProvider, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_DATA_FILE: &str = "league-data.json";

/// Read-only provider backed by the static JSON file the site ships with.
///
/// The hosted providers also use it to seed an empty backend.
#[derive(Debug, Clone)]
pub struct LocalProvider<S: Storage = LocalStorage> {
    storage: S,
    file: String,
}

impl<S: Storage> LocalProvider<S> {
    pub fn new(storage: S, file: impl Into<String>) -> Self {
        Self {
            storage,
            file: file.into(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }
}

#[async_trait]
impl<S: Storage> DataProvider for LocalProvider<S> {
    async fn get_all_data(&self) -> Result<LeagueData> {
        let bytes = self.storage.read_file(&self.file).await?;
        let data = LeagueData::from_slice(&bytes)?;
        tracing::debug!("Loaded {} locations from {}", data.locations.len(), self.file);
        Ok(data)
    }

    async fn submit_result(
        &self,
        _location: &str,
        _league: &str,
        _group: &str,
        _week: &str,
        _result: MatchResult,
    ) -> Result<bool> {
        tracing::warn!(
            "Local mode: results cannot be saved. Switch provider to firebase or supabase to enable writes."
        );
        Ok(false)
    }
}
