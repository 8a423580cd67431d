//! CLI command definitions and dispatch.

pub mod entities;
pub mod get;
pub mod locations;

use anyhow::Context as _;
use backstage_catalog::telemetry::init_tracing;
use backstage_catalog::{BackstageClient, ClientConfig};
use clap::{Parser, Subcommand};

/// Backstage CLI — query the Software Catalog.
#[derive(Parser)]
#[command(
    name = "backstage",
    version,
    about = "Query and manage the Backstage Software Catalog",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL including `/api`.
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Namespace used for lookups by name.
    #[arg(long, short = 'n', global = true)]
    pub namespace: Option<String>,

    /// Bearer token.
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, short = 'o', global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List, inspect and delete entities of any kind by UID.
    #[command(subcommand)]
    Entities(entities::EntityCommands),

    /// Fetch a single entity of a known kind by name.
    Get(get::GetArgs),

    /// Register, list and remove catalog locations.
    #[command(subcommand)]
    Locations(locations::LocationCommands),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl Cli {
    /// Override configuration values with the flags that were given.
    fn apply_to(&self, config: &mut ClientConfig) {
        if let Some(ref url) = self.url {
            config.base_url = url.clone();
        }
        if let Some(ref ns) = self.namespace {
            config.default_namespace = ns.clone();
        }
        if let Some(ref token) = self.token {
            config.token = Some(token.clone());
        }
    }
}

/// Everything a command needs to talk to the backend and print results.
pub struct Context {
    pub client: BackstageClient,
    pub output: OutputFormat,
}

impl Context {
    /// Build the client from, in increasing precedence: the config file,
    /// `BACKSTAGE_*` environment variables, then command-line flags.
    fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = ClientConfig::load().context("loading configuration")?;
        cli.apply_to(&mut config);

        init_tracing(&config.logging)?;
        tracing::debug!(base_url = %config.base_url, "using catalog backend");

        let client = BackstageClient::from_config(&config)
            .with_context(|| format!("creating client for {}", config.base_url))?;
        Ok(Self {
            client,
            output: cli.output,
        })
    }
}

/// Execute the CLI command.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::from_cli(&cli)?;
    match cli.command {
        Commands::Entities(cmd) => entities::execute(&ctx, cmd).await,
        Commands::Get(args) => get::execute(&ctx, args).await,
        Commands::Locations(cmd) => locations::execute(&ctx, cmd).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "backstage",
            "get",
            "component",
            "artist-web",
            "--namespace",
            "music",
            "-o",
            "yaml",
        ])
        .unwrap();

        assert_eq!(cli.namespace.as_deref(), Some("music"));
        assert_eq!(cli.output, OutputFormat::Yaml);
        assert!(matches!(cli.command, Commands::Get(_)));
    }

    #[test]
    fn test_flags_override_environment() {
        use backstage_catalog::config::{ENV_BASE_URL, ENV_NAMESPACE, ENV_TOKEN};

        let mut config = ClientConfig::default();
        config.apply_overrides(|key| match key {
            ENV_BASE_URL => Some("http://from-env:7007/api".into()),
            ENV_NAMESPACE => Some("env-ns".into()),
            ENV_TOKEN => Some("env-token".into()),
            _ => None,
        });

        let cli = Cli::try_parse_from([
            "backstage",
            "--url",
            "http://from-flag:7007/api",
            "locations",
            "list",
        ])
        .unwrap();
        cli.apply_to(&mut config);

        assert_eq!(config.base_url, "http://from-flag:7007/api");
        assert_eq!(config.default_namespace, "env-ns");
        assert_eq!(config.token.as_deref(), Some("env-token"));
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        assert!(Cli::try_parse_from(["backstage", "locations", "list", "-o", "xml"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
