use anyhow::Result;
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use league_gateway::{
    DataGateway, FirebaseConfig, GatewayConfig, GatewayError, LeagueData, MatchResult, ProviderKind,
};
use tempfile::TempDir;

const LEAGUE_DATA: &str = r#"{
    "EU": {
        "Premier": {
            "name": "Premier League",
            "groups": {
                "A": {
                    "teams": ["X", "Y"],
                    "results": { "1": [ { "home": "X", "away": "Y", "score": "0-1" } ] }
                }
            }
        }
    }
}"#;

fn local_config(dir: &TempDir) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.local.data_dir = dir.path().to_str().unwrap().to_string();
    config
}

#[tokio::test]
async fn test_local_read_returns_file_contents() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("league-data.json"), LEAGUE_DATA)?;

    let gateway = DataGateway::from_config(&local_config(&dir))?;
    let data = gateway.get_all_data().await?;

    assert_eq!(gateway.provider_kind(), ProviderKind::Local);
    assert_eq!(data, serde_json::from_str::<LeagueData>(LEAGUE_DATA)?);
    assert_eq!(
        serde_json::to_value(&data)?,
        serde_json::from_str::<serde_json::Value>(LEAGUE_DATA)?
    );
    Ok(())
}

#[tokio::test]
async fn test_local_read_of_custom_file_name() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("2024.json"), LEAGUE_DATA)?;

    let mut config = local_config(&dir);
    config.local.file = "2024.json".to_string();

    let data = DataGateway::from_config(&config)?.get_all_data().await?;
    assert!(data.group("EU", "Premier", "A").is_some());
    Ok(())
}

#[tokio::test]
async fn test_local_read_errors() -> Result<()> {
    let dir = TempDir::new()?;
    let gateway = DataGateway::from_config(&local_config(&dir))?;

    let missing = gateway.get_all_data().await.unwrap_err();
    assert!(matches!(missing, GatewayError::IoError(_)));

    std::fs::write(dir.path().join("league-data.json"), "{ \"EU\": ")?;
    let malformed = gateway.get_all_data().await.unwrap_err();
    assert!(matches!(malformed, GatewayError::SerializationError(_)));
    Ok(())
}

#[tokio::test]
async fn test_local_submit_never_touches_the_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("league-data.json");
    std::fs::write(&path, LEAGUE_DATA)?;

    let gateway = DataGateway::from_config(&local_config(&dir))?;
    let result = MatchResult::new()
        .with("home", "Y")
        .with("away", "X")
        .with("score", "1-1");

    assert!(!gateway.submit_result("EU", "Premier", "A", "1", result.clone()).await?);
    // even a group that does not exist is just declined
    assert!(!gateway.submit_result("XX", "None", "Q", "9", result).await?);

    assert_eq!(std::fs::read_to_string(&path)?, LEAGUE_DATA);
    Ok(())
}

#[tokio::test]
async fn test_switching_provider_keeps_call_signatures() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("league-data.json"), LEAGUE_DATA)?;

    let server = MockServer::start();
    let doc_path = "/projects/league-site/databases/(default)/documents/leagues/data";
    server.mock(|when, then| {
        when.method(GET).path(doc_path);
        then.status(404);
    });
    let writes = server.mock(|when, then| {
        when.method(PATCH).path(doc_path);
        then.status(200);
    });

    let mut firebase = FirebaseConfig::new("test-key", "league-site");
    firebase.base_url = server.base_url();
    let mut config = local_config(&dir);
    config.firebase = Some(firebase);

    let result = MatchResult::new().with("home", "Y").with("away", "X").with("score", "2-0");

    let local = DataGateway::from_config(&config)?;
    assert_eq!(local.provider_kind(), ProviderKind::Local);
    assert!(!local.submit_result("EU", "Premier", "A", "2", result.clone()).await?);
    writes.assert_hits(0);

    config.provider = ProviderKind::Firebase;
    let hosted = DataGateway::from_config(&config)?;
    assert_eq!(hosted.provider_kind(), ProviderKind::Firebase);
    assert!(hosted.submit_result("EU", "Premier", "A", "2", result).await?);
    // seed write plus the result write
    writes.assert_hits(2);
    Ok(())
}

#[tokio::test]
async fn test_config_file_drives_provider_choice() -> Result<()> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("league-gateway.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
provider = "supabase"

[local]
data_dir = "{}"

[supabase]
url = "https://league-site.supabase.co"
anon_key = "anon"
"#,
            dir.path().to_str().unwrap().replace('\\', "/")
        ),
    )?;

    let config = GatewayConfig::from_file(&config_path)?;
    let gateway = DataGateway::from_config(&config)?;

    assert_eq!(gateway.provider_kind(), ProviderKind::Supabase);
    Ok(())
}

#[test]
fn test_placeholder_credentials_fail_at_construction() {
    let config = GatewayConfig {
        provider: ProviderKind::Firebase,
        firebase: Some(FirebaseConfig::new("YOUR_API_KEY", "YOUR_PROJECT")),
        ..GatewayConfig::default()
    };

    let err = DataGateway::from_config(&config).err().unwrap();
    assert!(matches!(err, GatewayError::BackendUnavailable { .. }));
    assert_eq!(
        err.recovery_suggestion(),
        "Fill in the backend settings or switch provider to 'local'"
    );
}
