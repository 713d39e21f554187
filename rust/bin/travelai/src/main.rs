//! `travelai`: the TravelAI command-line client.
//!
//! Logs in against a classic or companion backend, browses the catalogue
//! and, for classic admins, the statistics pages. When the backend is down
//! every page still renders from sample data.

mod commands;
mod config;

use clap::{Parser, Subcommand};

use commands::Context;

/// TravelAI CLI tool.
#[derive(Parser, Debug)]
#[command(name = "travelai", about = "TravelAI command-line client")]
struct Cli {
    /// Path to client config file (default: ~/.travelai/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show or change client settings.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Log in by username.
    Login {
        /// Username (e.g. user_a, admin).
        username: String,
    },

    /// Log out and forget the saved session.
    Logout,

    /// Show the logged-in user.
    Whoami,

    /// Show the "About TravelAI" summary (companion backend).
    Summary,

    /// List the place catalogue.
    Places,

    /// Show one place with its comments.
    Place {
        /// Place ID.
        id: String,
    },

    /// Show visited places.
    Profile,

    /// Recommended places.
    Discover {
        /// Free-text wish sent to the recommender (classic backend).
        #[arg(long)]
        query: Option<String>,
        /// Only show places whose name contains this.
        #[arg(long)]
        filter: Option<String>,
        /// Replace the list with AI recommendations (companion backend).
        #[arg(long)]
        ai: bool,
    },

    /// Search places (companion backend, needs a live server).
    Search {
        query: String,
    },

    /// Admin statistics (classic backend).
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the current settings.
    Show,
    /// Set one of: server, variant, fallback_delay_ms.
    Set { key: String, value: String },
}

#[derive(Subcommand, Debug)]
enum AdminAction {
    /// Comments and visit count of one user.
    Users {
        /// Username to look up.
        username: String,
    },
    /// Places with rating statistics.
    Places {
        /// Name contains.
        #[arg(long)]
        name: Option<String>,
        /// Minimum mean rating (inclusive).
        #[arg(long)]
        min: Option<f64>,
        /// Maximum mean rating (inclusive).
        #[arg(long)]
        max: Option<f64>,
        /// Show the detail panel of this place.
        #[arg(long)]
        select: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);
    let json_output = cli.output == "json";

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config_path, json_output)?,
            ConfigAction::Set { key, value } => commands::config::set(&config_path, &key, &value)?,
        },

        Commands::Login { username } => {
            let mut ctx = Context::load(&config_path, json_output)?;
            commands::session::login(&mut ctx, &username).await?;
        }

        Commands::Logout => {
            let mut ctx = Context::load(&config_path, json_output)?;
            commands::session::logout(&mut ctx)?;
        }

        Commands::Whoami => {
            let ctx = Context::load(&config_path, json_output)?;
            commands::session::whoami(&ctx)?;
        }

        Commands::Summary => {
            let ctx = Context::load(&config_path, json_output)?;
            commands::places::summary(&ctx).await?;
        }

        Commands::Places => {
            let ctx = Context::load(&config_path, json_output)?;
            commands::places::list(&ctx).await?;
        }

        Commands::Place { id } => {
            let ctx = Context::load(&config_path, json_output)?;
            commands::places::show(&ctx, &id).await?;
        }

        Commands::Profile => {
            let ctx = Context::load(&config_path, json_output)?;
            commands::discover::profile(&ctx).await?;
        }

        Commands::Discover { query, filter, ai } => {
            let ctx = Context::load(&config_path, json_output)?;
            commands::discover::discover(&ctx, query.as_deref(), filter.as_deref(), ai).await?;
        }

        Commands::Search { query } => {
            let ctx = Context::load(&config_path, json_output)?;
            commands::places::search(&ctx, &query).await?;
        }

        Commands::Admin { action } => {
            let ctx = Context::load(&config_path, json_output)?;
            match action {
                AdminAction::Users { username } => {
                    commands::admin::users(&ctx, &username).await?;
                }
                AdminAction::Places {
                    name,
                    min,
                    max,
                    select,
                } => {
                    commands::admin::places(
                        &ctx,
                        commands::admin::PlaceQuery {
                            name: name.as_deref(),
                            min,
                            max,
                            select: select.as_deref(),
                        },
                    )
                    .await?;
                }
            }
        }

        Commands::Version => {
            println!("travelai cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
