pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FirestoreProvider, LocalProvider, LocalStorage, SupabaseProvider};
pub use config::{FirebaseConfig, GatewayConfig, LocalConfig, ProviderKind, SupabaseConfig};
pub use core::gateway::{DataGateway, Provider};
pub use domain::model::{Group, League, LeagueData, MatchResult};
pub use domain::ports::{DataProvider, Storage};
pub use utils::error::{GatewayError, Result};
