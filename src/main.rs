use anyhow::Context;
use clap::Parser;
use league_gateway::config::Command;
use league_gateway::utils::{logger, validation::Validate};
use league_gateway::{CliConfig, DataGateway, GatewayConfig, GatewayError, MatchResult};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let mut config = if Path::new(&cli.config).exists() {
        GatewayConfig::from_file(&cli.config)
            .with_context(|| format!("failed to load config file '{}'", cli.config))?
    } else {
        tracing::info!("No config at {}, using local defaults", cli.config);
        GatewayConfig::default()
    };

    if let Some(provider) = cli.provider {
        config.provider = provider;
        tracing::info!("Provider overridden to: {}", provider.as_str());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        fail(&e);
    }

    let gateway = match DataGateway::from_config(&config) {
        Ok(gateway) => gateway,
        Err(e) => fail(&e),
    };

    match cli.command {
        Command::Show { location } => {
            let data = match gateway.get_all_data().await {
                Ok(data) => data,
                Err(e) => fail(&e),
            };
            let output = match location {
                Some(location) => {
                    let leagues = data
                        .locations
                        .get(&location)
                        .with_context(|| format!("no location named '{}'", location))?;
                    serde_json::to_string_pretty(leagues)?
                }
                None => serde_json::to_string_pretty(&data)?,
            };
            println!("{}", output);
        }
        Command::Submit {
            location,
            league,
            group,
            week,
            result,
        } => {
            let result: MatchResult = serde_json::from_str(&result)
                .context("--result must be a JSON object")?;

            match gateway
                .submit_result(&location, &league, &group, &week, result)
                .await
            {
                Ok(true) => println!("✅ Result saved to {}/{}/{} week {}", location, league, group, week),
                Ok(false) => {
                    eprintln!("❌ The {} provider did not save the result", config.provider.as_str());
                    std::process::exit(2);
                }
                Err(e) => fail(&e),
            }
        }
    }

    Ok(())
}

fn fail(e: &GatewayError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}
