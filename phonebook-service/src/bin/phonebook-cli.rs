//! Command-line access to the phonebook collection, for seeding and quick checks.

use clap::{Parser, Subcommand};
use phonebook_service::config::PhonebookConfig;
use phonebook_service::services::{MongoDb, MongoPersonStore, PersonRepository};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "phonebook-cli", version, about = "Inspect or seed the phonebook")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every entry
    List,
    /// Add an entry, subject to the same rules as the HTTP API
    Add {
        /// Full name, at least 3 characters
        name: String,
        /// Phone number such as 09-1234556 or 040-22334455
        number: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = PhonebookConfig::load()?;

    let db = MongoDb::connect(
        config.mongodb.uri.expose_secret(),
        &config.mongodb.database,
        config.mongodb.timeout,
    )
    .await?;
    db.initialize_collection().await?;
    let repository = PersonRepository::new(Arc::new(MongoPersonStore::new(db)));

    match cli.command {
        Command::List => {
            println!("Phonebook:");
            for person in repository.list_all().await? {
                println!("{} {}", person.name, person.number);
            }
        }
        Command::Add { name, number } => {
            repository.create(&name, &number).await?;
            println!("Added {} number {} to phonebook", name, number);
        }
    }

    Ok(())
}
