pub mod commands;
pub mod display;
pub mod output;

use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bdbctl::config::{self, types::ApiVersion, types::TlsPolicy};
use bdbctl::core::client::ApiClient;

#[derive(Parser)]
#[command(
    name = "bdbctl",
    about = "Provision databases and users through the management REST API.",
    version,
    after_help = "Requires API_URL, API_USER and API_PASSWORD in the environment."
)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Backend API generation
    #[arg(long, value_enum, env = "API_VERSION", default_value = "legacy")]
    pub api_version: ApiVersion,

    /// Skip TLS certificate verification
    #[arg(
        long,
        env = "API_INSECURE",
        action = ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub insecure: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run
    #[arg(value_enum, ignore_case = true, value_name = "COMMAND")]
    pub command: Operation,

    /// Database identifier (DDB only)
    #[arg(value_name = "DB_ID")]
    pub database_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Operation {
    /// Create a database
    #[value(name = "CDB")]
    Cdb,
    /// Create the seed users
    #[value(name = "CUSR")]
    Cusr,
    /// List users
    #[value(name = "LUSR")]
    Lusr,
    /// Delete a database by identifier
    #[value(name = "DDB")]
    Ddb,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .init();
}

/// Load configuration and dispatch a CLI command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let tls = if cli.insecure {
        TlsPolicy::AcceptInvalidCerts
    } else {
        TlsPolicy::Verify
    };
    let cfg = config::load_config()?
        .with_api_version(cli.api_version)
        .with_tls(tls);

    tracing::debug!(base_url = %cfg.base_url, api_version = ?cfg.api_version, "configuration loaded");

    match cli.command {
        Operation::Ddb => {
            let Some(id) = cli.database_id else {
                anyhow::bail!("Missing database ID for deletion.");
            };
            let client = ApiClient::from_config(&cfg)?;
            commands::delete_database::run(&client, &id, cli.format)
        }
        Operation::Cdb => {
            let client = ApiClient::from_config(&cfg)?;
            commands::create_database::run(&client, cli.format)
        }
        Operation::Cusr => {
            let client = ApiClient::from_config(&cfg)?;
            commands::create_users::run(&client, cli.format)
        }
        Operation::Lusr => {
            let client = ApiClient::from_config(&cfg)?;
            commands::list_users::run(&client, cli.format)
        }
    }
}
