//! CLI entry point for folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::list::ListOptions;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Markdown content pipeline for a personal portfolio and blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or categories
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only posts filed under this category
        #[arg(long)]
        category: Option<String>,

        /// Only posts whose title, excerpt or categories contain this text
        #[arg(short, long)]
        query: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Key of the post (its file name without `.md`)
        key: String,

        /// Render the body to HTML
        #[arg(long)]
        html: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List posts sharing a category with a post
    Related {
        /// Key of the reference post
        key: String,

        /// Maximum number of posts (defaults to `related_limit`)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Start the JSON query server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to `server.port`)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to `server.ip`)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::List {
            r#type,
            category,
            query,
            json,
        } => {
            let folio = folio::Folio::new(&base_dir)?;
            let options = ListOptions {
                category,
                query,
                json,
            };
            folio::commands::list::run(&folio, &r#type, &options)?;
        }

        Commands::Show { key, html, json } => {
            let folio = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&folio, &key, html, json)?;
        }

        Commands::Related { key, limit } => {
            let folio = folio::Folio::new(&base_dir)?;
            let limit = limit.unwrap_or(folio.config.related_limit);
            folio::commands::related::run(&folio, &key, limit)?;
        }

        Commands::Serve { port, ip } => {
            let folio = folio::Folio::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| folio.config.server.ip.clone());
            let port = port.unwrap_or(folio.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio::server::start(&folio, &ip, port).await?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
