use crate::adapters::{FirestoreProvider, LocalProvider, LocalStorage, SupabaseProvider};
use crate::config::{GatewayConfig, ProviderKind};
use crate::domain::model::{LeagueData, MatchResult};
use crate::domain::ports::{DataProvider, Storage};
use crate::utils::error::{GatewayError, Result};

/// The backend chosen at startup.
pub enum Provider<S: Storage = LocalStorage> {
    Local(LocalProvider<S>),
    Firebase(FirestoreProvider<S>),
    Supabase(SupabaseProvider<S>),
}

impl<S: Storage> Provider<S> {
    /// Builds the provider named by `config.provider`. Hosted providers get a
    /// local provider over `storage` to seed an empty backend from.
    pub fn from_config(config: &GatewayConfig, storage: S) -> Result<Self> {
        let local = LocalProvider::new(storage, config.local.file.clone());

        match config.provider {
            ProviderKind::Local => Ok(Provider::Local(local)),
            ProviderKind::Firebase => {
                let firebase = config.firebase.as_ref().ok_or_else(|| missing_section("firebase"))?;
                Ok(Provider::Firebase(FirestoreProvider::new(firebase, local)?))
            }
            ProviderKind::Supabase => {
                let supabase = config.supabase.as_ref().ok_or_else(|| missing_section("supabase"))?;
                Ok(Provider::Supabase(SupabaseProvider::new(supabase, local)?))
            }
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::Local(_) => ProviderKind::Local,
            Provider::Firebase(_) => ProviderKind::Firebase,
            Provider::Supabase(_) => ProviderKind::Supabase,
        }
    }

    fn as_data_provider(&self) -> &dyn DataProvider {
        match self {
            Provider::Local(p) => p,
            Provider::Firebase(p) => p,
            Provider::Supabase(p) => p,
        }
    }
}

fn missing_section(backend: &'static str) -> GatewayError {
    GatewayError::BackendUnavailable {
        backend,
        message: format!("no [{}] section in the configuration", backend),
    }
}

/// Entry point for the rest of the site: reads all league data and submits
/// results without knowing which backend is behind it.
///
/// Errors from the backend are passed through unchanged.
pub struct DataGateway<S: Storage = LocalStorage> {
    provider: Provider<S>,
}

impl DataGateway<LocalStorage> {
    /// Static data is read from `config.local.data_dir`.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        Self::with_storage(config, LocalStorage::new(&config.local.data_dir))
    }
}

impl<S: Storage> DataGateway<S> {
    pub fn new(provider: Provider<S>) -> Self {
        tracing::debug!("Data gateway using the {} provider", provider.kind().as_str());
        Self { provider }
    }

    pub fn with_storage(config: &GatewayConfig, storage: S) -> Result<Self> {
        Ok(Self::new(Provider::from_config(config, storage)?))
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    pub async fn get_all_data(&self) -> Result<LeagueData> {
        self.provider.as_data_provider().get_all_data().await
    }

    /// `Ok(false)` means the backend did not store the result: the local
    /// provider is read-only, and a failed Supabase write is only logged.
    pub async fn submit_result(
        &self,
        location: &str,
        league: &str,
        group: &str,
        week: &str,
        result: MatchResult,
    ) -> Result<bool> {
        self.provider
            .as_data_provider()
            .submit_result(location, league, group, week, result)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::local::tests::{MockStorage, SAMPLE};
    use crate::adapters::local::DEFAULT_DATA_FILE;
    use crate::config::{FirebaseConfig, SupabaseConfig};

    fn storage() -> MockStorage {
        MockStorage::with_file(DEFAULT_DATA_FILE, SAMPLE.as_bytes())
    }

    #[test]
    fn test_default_config_selects_local() {
        let gateway = DataGateway::with_storage(&GatewayConfig::default(), storage()).unwrap();
        assert_eq!(gateway.provider_kind(), ProviderKind::Local);
    }

    #[test]
    fn test_selects_configured_provider() {
        let mut config = GatewayConfig {
            firebase: Some(FirebaseConfig::new("key", "league-site")),
            supabase: Some(SupabaseConfig::new("https://league-site.supabase.co", "anon")),
            ..GatewayConfig::default()
        };

        config.provider = ProviderKind::Firebase;
        let gateway = DataGateway::with_storage(&config, storage()).unwrap();
        assert_eq!(gateway.provider_kind(), ProviderKind::Firebase);

        config.provider = ProviderKind::Supabase;
        let gateway = DataGateway::with_storage(&config, storage()).unwrap();
        assert_eq!(gateway.provider_kind(), ProviderKind::Supabase);
    }

    #[test]
    fn test_missing_section_is_backend_unavailable() {
        let config = GatewayConfig {
            provider: ProviderKind::Supabase,
            ..GatewayConfig::default()
        };

        let err = DataGateway::with_storage(&config, storage()).err().unwrap();
        assert!(matches!(err, GatewayError::BackendUnavailable { backend: "supabase", .. }));
    }

    #[tokio::test]
    async fn test_local_gateway_reads_and_declines_writes() {
        let gateway = DataGateway::with_storage(&GatewayConfig::default(), storage()).unwrap();

        let before = gateway.get_all_data().await.unwrap();
        let saved = gateway
            .submit_result("EU", "Premier", "A", "1", MatchResult::new().with("home", "X"))
            .await
            .unwrap();
        let after = gateway.get_all_data().await.unwrap();

        assert!(!saved);
        assert_eq!(before, after);
    }
}
