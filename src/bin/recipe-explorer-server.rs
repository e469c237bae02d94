// ABOUTME: Server binary for the Recipe Explorer REST API
// ABOUTME: Loads environment configuration, opens the recipe store and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Explorer Server Binary
//!
//! Starts the recipe API with the SQLite store and the simplify/suggest
//! assistant. Configuration comes from the environment; a few values can be
//! overridden on the command line.

use anyhow::Result;
use clap::Parser;
use recipe_explorer::{
    config::{DatabaseUrl, ServerConfig},
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-explorer-server")]
#[command(about = "Recipe Explorer - recipe catalog API with assisted simplify and suggest")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&url)?;
    }

    logging::init_from_env()?;

    info!("Starting Recipe Explorer API");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config).await?);

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
