//! # Server Binary Entry Point
//!
//! Thin wrapper that loads configuration and runs the HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin server -- --config config/server.toml
//! cargo run --bin server -- --address 0.0.0.0:8080 --log-level debug
//! ```

use clap::Parser;
use log::info;

use delcom_starter::common::config::ServiceConfig;
use delcom_starter::common::logging::init_logger;
use delcom_starter::Server;

/// Command-line arguments for the server binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (TOML format)
    ///
    /// Example: config/server.toml. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind, overriding the configuration file
    #[arg(short, long)]
    address: Option<String>,

    /// Log level, overriding the configuration file
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ServiceConfig::from_optional_file(args.config.as_deref())?;
    if let Some(address) = args.address {
        config.server.address = address;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    init_logger(&config.logging.level);

    info!("🚀 Initializing server...");
    if let Some(path) = &args.config {
        info!("⚙️  Loaded configuration from {}", path);
    }

    Server::new(config).run().await
}
