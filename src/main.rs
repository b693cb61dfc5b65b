use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use taskboard::app_context::{AppContext, UpdatePolicy};
use taskboard::config::{ConfigOverrides, ServerConfig, DEFAULT_DATABASE};
use taskboard::database::{establish_connection, get_database_url, setup_database};
use taskboard::server;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the GraphQL API
    Serve {
        /// TOML file with server settings
        #[clap(short, long)]
        config: Option<PathBuf>,
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        database: Option<String>,
        #[clap(long)]
        cors_origin: Option<String>,
        /// Do not serve the GraphQL playground
        #[clap(long)]
        no_playground: bool,
        #[clap(long, value_enum)]
        update_policy: Option<UpdatePolicy>,
    },
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
    /// Manage organizations (tenants)
    Org {
        #[clap(subcommand)]
        command: OrgCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Init {
        #[clap(short, long, default_value = DEFAULT_DATABASE)]
        database: String,
    },
    Migrate {
        #[clap(subcommand)]
        direction: server::MigrateDirection,
        #[clap(short, long, default_value = DEFAULT_DATABASE)]
        database: String,
    },
}

#[derive(Subcommand, Debug)]
enum OrgCommands {
    Create {
        #[clap(short, long)]
        slug: String,
        #[clap(short, long)]
        name: String,
        #[clap(short, long, default_value = DEFAULT_DATABASE)]
        database: String,
    },
    List {
        #[clap(short, long, default_value = DEFAULT_DATABASE)]
        database: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            config,
            port,
            database,
            cors_origin,
            no_playground,
            update_policy,
        } => {
            let overrides = ConfigOverrides {
                port,
                database,
                cors_origin,
                disable_playground: no_playground,
                update_policy,
            };
            let config = ServerConfig::load(config.as_deref(), overrides)?;
            info!("Starting server on port {}", config.port);
            server::start_server(config).await?;
        }
        Commands::Db { command } => match command {
            DbCommands::Init { database } => {
                info!("Initializing database: {}", database);
                server::migrate_database(&database, server::MigrateDirection::Up).await?;
            }
            DbCommands::Migrate {
                direction,
                database,
            } => {
                info!("Running database migration: {:?}", direction);
                server::migrate_database(&database, direction).await?;
            }
        },
        Commands::Org { command } => match command {
            OrgCommands::Create {
                slug,
                name,
                database,
            } => {
                let app = open_app_context(&database).await?;
                let organization = app.create_organization(slug, name).await?;
                println!(
                    "{}\t{}\t{}",
                    organization.id, organization.slug, organization.name
                );
            }
            OrgCommands::List { database } => {
                let app = open_app_context(&database).await?;
                for organization in app.list_organizations().await? {
                    println!(
                        "{}\t{}\t{}",
                        organization.id, organization.slug, organization.name
                    );
                }
            }
        },
    }

    Ok(())
}

async fn open_app_context(database: &str) -> Result<Arc<AppContext>> {
    let db = establish_connection(&get_database_url(Some(database))).await?;
    setup_database(&db).await?;
    Ok(Arc::new(AppContext::new(db)))
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sea_orm_migration=warn,{}", log_level)))
        .init();
}
