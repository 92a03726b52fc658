use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{
    validate_not_placeholder, validate_path, validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Which backend serves the league data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Static JSON file, read-only.
    #[default]
    Local,
    /// Cloud Firestore document.
    #[serde(alias = "firestore")]
    Firebase,
    /// Supabase (PostgREST) table row.
    Supabase,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Local => "local",
            ProviderKind::Firebase => "firebase",
            ProviderKind::Supabase => "supabase",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub local: LocalConfig,
    pub firebase: Option<FirebaseConfig>,
    pub supabase: Option<SupabaseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_data_file")]
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_document")]
    pub document: String,
    #[serde(default = "default_firestore_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_row_id")]
    pub row_id: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_data_file() -> String {
    crate::adapters::local::DEFAULT_DATA_FILE.to_string()
}

fn default_collection() -> String {
    "leagues".to_string()
}

fn default_document() -> String {
    "data".to_string()
}

fn default_firestore_base_url() -> String {
    FIRESTORE_BASE_URL.to_string()
}

fn default_table() -> String {
    "league_data".to_string()
}

fn default_row_id() -> String {
    "main".to_string()
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file: default_data_file(),
        }
    }
}

impl FirebaseConfig {
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: project_id.into(),
            collection: default_collection(),
            document: default_document(),
            base_url: default_firestore_base_url(),
        }
    }
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: default_table(),
            row_id: default_row_id(),
        }
    }
}

impl GatewayConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GatewayError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GatewayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GatewayError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for LocalConfig {
    fn validate(&self) -> Result<()> {
        validate_path("local.data_dir", &self.data_dir)?;
        validate_path("local.file", &self.file)
    }
}

impl Validate for FirebaseConfig {
    fn validate(&self) -> Result<()> {
        validate_not_placeholder("firebase.api_key", &self.api_key)?;
        validate_not_placeholder("firebase.project_id", &self.project_id)?;
        validate_path("firebase.collection", &self.collection)?;
        validate_path("firebase.document", &self.document)?;
        validate_url("firebase.base_url", &self.base_url)
    }
}

impl Validate for SupabaseConfig {
    fn validate(&self) -> Result<()> {
        validate_not_placeholder("supabase.url", &self.url)?;
        validate_url("supabase.url", &self.url)?;
        validate_not_placeholder("supabase.anon_key", &self.anon_key)?;
        validate_path("supabase.table", &self.table)?;
        validate_path("supabase.row_id", &self.row_id)
    }
}

impl Validate for GatewayConfig {
    /// Only the active provider's section has to be complete.
    fn validate(&self) -> Result<()> {
        self.local.validate()?;
        match self.provider {
            ProviderKind::Local => Ok(()),
            ProviderKind::Firebase => validate_required_field("firebase", &self.firebase)?.validate(),
            ProviderKind::Supabase => validate_required_field("supabase", &self.supabase)?.validate(),
        }
    }
}
