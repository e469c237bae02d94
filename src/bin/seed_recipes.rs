// ABOUTME: Sample recipe seeding utility for the Recipe Explorer API
// ABOUTME: Inserts the bundled sample catalog into the configured database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sample recipe seeder.
//!
//! Usage:
//! ```bash
//! # Seed sample recipes (uses DATABASE_URL from environment)
//! cargo run --bin seed-recipes
//!
//! # Override database URL
//! cargo run --bin seed-recipes -- --database-url sqlite:./data/recipes.db
//!
//! # Seed even when recipes already exist
//! cargo run --bin seed-recipes -- --force -v
//! ```

use anyhow::Result;
use clap::Parser;
use recipe_explorer::{
    config::DatabaseUrl,
    constants::{defaults, env_config},
    database::{create_pool, seed_recipes::seed_sample_recipes, RecipesManager},
};
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "Recipe Explorer sample catalog seeder",
    long_about = "Insert the bundled sample recipes, including a step-by-step chicken biryani"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Seed even if recipes already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .init();

    info!("=== Recipe Explorer Sample Seeder ===");

    let raw_url = args
        .database_url
        .or_else(|| env::var(env_config::DATABASE_URL).ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.to_owned());
    let url = DatabaseUrl::parse_url(&raw_url)?;

    let recipes = RecipesManager::new(create_pool(&url).await?);
    recipes.migrate().await?;

    let created = seed_sample_recipes(&recipes, args.force).await?;
    let total = recipes.count().await?;

    info!("Created {created} recipes, {total} in database");
    Ok(())
}
