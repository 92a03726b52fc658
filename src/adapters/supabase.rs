use crate::adapters::http::{backend_error, build_client};
use crate::adapters::local::LocalProvider;
use crate::adapters::storage::LocalStorage;
use crate::config::SupabaseConfig;
use crate::domain::model::{LeagueData, MatchResult};
use crate::domain::ports::{DataProvider, Storage};
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BACKEND: &str = "supabase";

#[derive(Debug, Deserialize)]
struct DataColumn {
    data: Value,
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    id: &'a str,
    data: &'a LeagueData,
}

/// Keeps the league data in one row of a Supabase table, accessed through
/// PostgREST. The `data` column holds the whole aggregate.
pub struct SupabaseProvider<S: Storage = LocalStorage> {
    client: Client,
    table_url: String,
    anon_key: String,
    row_id: String,
    seed: LocalProvider<S>,
}

impl<S: Storage> SupabaseProvider<S> {
    pub fn new(config: &SupabaseConfig, seed: LocalProvider<S>) -> Result<Self> {
        config
            .validate()
            .map_err(|e| GatewayError::BackendUnavailable {
                backend: BACKEND,
                message: e.to_string(),
            })?;

        Ok(Self {
            client: build_client(BACKEND)?,
            table_url: format!(
                "{}/rest/v1/{}",
                config.url.trim_end_matches('/'),
                config.table
            ),
            anon_key: config.anon_key.clone(),
            row_id: config.row_id.clone(),
            seed,
        })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    async fn fetch_row(&self) -> Result<Option<LeagueData>> {
        tracing::debug!("GET {} id={}", self.table_url, self.row_id);
        let id_filter = format!("eq.{}", self.row_id);
        let response = self
            .authorized(self.client.get(&self.table_url))
            .query(&[("select", "data"), ("id", id_filter.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(BACKEND, response).await);
        }

        let rows: Vec<DataColumn> = response.json().await?;
        match rows.into_iter().next() {
            Some(DataColumn { data: Value::Null }) | None => Ok(None),
            Some(DataColumn { data }) => Ok(Some(LeagueData::from_value(data)?)),
        }
    }

    async fn upsert(&self, data: &LeagueData) -> Result<()> {
        tracing::debug!("Upserting {} id={}", self.table_url, self.row_id);
        let response = self
            .authorized(self.client.post(&self.table_url))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&Row {
                id: &self.row_id,
                data,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(BACKEND, response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl<S: Storage> DataProvider for SupabaseProvider<S> {
    async fn get_all_data(&self) -> Result<LeagueData> {
        if let Some(data) = self.fetch_row().await? {
            return Ok(data);
        }

        tracing::info!("Supabase row {} missing, seeding it from {}", self.row_id, self.seed.file());
        let seed = self.seed.get_all_data().await?;
        if let Err(e) = self.upsert(&seed).await {
            tracing::warn!("Supabase seed write failed: {}", e);
        }
        Ok(seed)
    }

    /// Read-modify-write of the whole row with no transaction around it.
    async fn submit_result(
        &self,
        location: &str,
        league: &str,
        group: &str,
        week: &str,
        result: MatchResult,
    ) -> Result<bool> {
        let mut data = self.get_all_data().await?;
        data.append_result(location, league, group, week, result)?;

        match self.upsert(&data).await {
            Ok(()) => {
                tracing::info!("Saved result for {}/{}/{} week {}", location, league, group, week);
                Ok(true)
            }
            Err(e) => {
                tracing::error!("Supabase write error: {}", e);
                Ok(false)
            }
        }
    }
}
