use anyhow::Result;
use oracle_histogram::{
    init_logging, register, serve, AppState, DeltaRegistry, ElasticConnection, PluginConfig,
    ServiceConfig,
};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "oracle-histogram")]
#[command(about = "Price oracle histogram API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        #[arg(short, long, default_value = "50001")]
        port: u16,

        #[arg(short = 'b', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print the index mapping declared for the datapoint table
    Mapping,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    let oracle = PluginConfig::from_env().resolve();
    info!("Using contract {} and table {}", oracle.contract, oracle.table);

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ServiceConfig::new()?;
            let backend = Arc::new(ElasticConnection::new(config.elastic.clone())?);

            info!("Starting API server against {} for chain {}", config.elastic.url, config.chain);
            let state = AppState::new(backend, oracle, config.chain);

            if let Err(e) = serve(host, port, state).await {
                error!("Server failed: {}", e);
                return Err(e);
            }
        }
        Commands::Mapping => {
            let mut registry = DeltaRegistry::new();
            register(&oracle, &mut registry);

            let mappings = serde_json::to_string_pretty(registry.mappings())?;
            println!("{}", mappings);
        }
    }

    Ok(())
}
