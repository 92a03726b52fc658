pub mod codec;

use crate::adapters::http::{backend_error, build_client};
use crate::adapters::local::LocalProvider;
use crate::adapters::storage::LocalStorage;
use crate::config::FirebaseConfig;
use crate::domain::model::{LeagueData, MatchResult};
use crate::domain::ports::{DataProvider, Storage};
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};

const BACKEND: &str = "firebase";

/// Keeps the league data in a single Firestore document, read and written
/// whole through the REST API.
///
/// There is no precondition on writes: two submitters racing on the same
/// document both succeed and the later write wins.
pub struct FirestoreProvider<S: Storage = LocalStorage> {
    client: Client,
    document_url: String,
    api_key: String,
    seed: LocalProvider<S>,
}

impl<S: Storage> FirestoreProvider<S> {
    pub fn new(config: &FirebaseConfig, seed: LocalProvider<S>) -> Result<Self> {
        config
            .validate()
            .map_err(|e| GatewayError::BackendUnavailable {
                backend: BACKEND,
                message: e.to_string(),
            })?;

        let document_url = format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            config.base_url.trim_end_matches('/'),
            config.project_id,
            config.collection,
            config.document
        );

        Ok(Self {
            client: build_client(BACKEND)?,
            document_url,
            api_key: config.api_key.clone(),
            seed,
        })
    }

    pub fn document_url(&self) -> &str {
        &self.document_url
    }

    async fn fetch_document(&self) -> Result<Option<LeagueData>> {
        tracing::debug!("GET {}", self.document_url);
        let response = self
            .client
            .get(&self.document_url)
            .query(&[("key", &self.api_key)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(backend_error(BACKEND, response).await);
        }

        let document: Value = response.json().await?;
        let fields = match document.get("fields") {
            Some(Value::Object(fields)) => codec::decode_fields(fields)?,
            Some(_) => {
                return Err(GatewayError::DecodeError {
                    message: "document fields is not an object".to_string(),
                })
            }
            None => Map::new(),
        };

        Ok(Some(LeagueData::from_value(Value::Object(fields))?))
    }

    /// Replaces every field of the document (PATCH without an update mask).
    async fn write_document(&self, data: &LeagueData) -> Result<()> {
        let fields = match data.to_value()? {
            Value::Object(map) => codec::encode_fields(&map)?,
            _ => {
                return Err(GatewayError::DecodeError {
                    message: "league data did not serialize to an object".to_string(),
                })
            }
        };

        tracing::debug!("PATCH {}", self.document_url);
        let response = self
            .client
            .patch(&self.document_url)
            .query(&[("key", &self.api_key)])
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(backend_error(BACKEND, response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl<S: Storage> DataProvider for FirestoreProvider<S> {
    async fn get_all_data(&self) -> Result<LeagueData> {
        if let Some(data) = self.fetch_document().await? {
            return Ok(data);
        }

        tracing::info!(
            "Firestore document missing, seeding it from {}",
            self.seed.file()
        );
        let seed = self.seed.get_all_data().await?;
        self.write_document(&seed).await?;
        Ok(seed)
    }

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
        self.write_document(&data).await?;

        tracing::info!(
            "Saved result for {}/{}/{} week {}",
            location,
            league,
            group,
            week
        );
        Ok(true)
    }
}
