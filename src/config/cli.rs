use crate::config::toml_config::ProviderKind;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "league-gateway")]
#[command(about = "Read and submit league results through the configured data provider")]
pub struct CliConfig {
    /// Path to the gateway TOML configuration
    #[arg(short, long, default_value = "league-gateway.toml")]
    pub config: String,

    /// Override the provider named in the configuration
    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the league data as JSON
    Show {
        /// Only print this location
        #[arg(long)]
        location: Option<String>,
    },
    /// Append a match result to a group's week
    Submit {
        #[arg(long)]
        location: String,
        #[arg(long)]
        league: String,
        #[arg(long)]
        group: String,
        #[arg(long)]
        week: String,
        /// Result record as a JSON object, e.g. '{"home":"X","away":"Y","score":"2-1"}'
        #[arg(long)]
        result: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit_command() {
        let cli = CliConfig::parse_from([
            "league-gateway",
            "--provider",
            "supabase",
            "submit",
            "--location",
            "EU",
            "--league",
            "Premier",
            "--group",
            "A",
            "--week",
            "1",
            "--result",
            r#"{"home":"X"}"#,
        ]);

        assert_eq!(cli.provider, Some(ProviderKind::Supabase));
        assert_eq!(cli.config, "league-gateway.toml");
        assert!(matches!(cli.command, Command::Submit { ref week, .. } if week == "1"));
    }

    #[test]
    fn test_parse_show_defaults() {
        let cli = CliConfig::parse_from(["league-gateway", "show"]);

        assert_eq!(cli.provider, None);
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Command::Show { location: None }));
    }
}
