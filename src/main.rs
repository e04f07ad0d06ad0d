//! CLI entry point for brittle

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brittle::commands::search::SearchOptions;

#[derive(Parser)]
#[command(name = "brittle")]
#[command(version)]
#[command(about = "Article search and visitor state service for brittle.systems", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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
    /// Serve the visitor API and the public directory
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4321")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Use production cookie settings regardless of _config.yml
        #[arg(long)]
        production: bool,
    },

    /// List site information
    List {
        /// Type of content to list (post, category, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Search articles the way the landing page search box does
    Search {
        /// Search query (empty lists everything)
        #[arg(default_value = "")]
        query: String,

        /// Use the Nth "Recently updated" category as the query
        #[arg(long, conflicts_with = "query")]
        category: Option<usize>,

        /// Select the result at this index
        #[arg(short, long)]
        select: Option<usize>,

        /// Last key pressed before selecting (keyboard commit)
        #[arg(short, long, requires = "select")]
        key: Option<String>,

        /// Navigate on any keyboard commit, not only Enter
        #[arg(long)]
        any_commit: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "brittle=debug,info"
    } else {
        "brittle=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Server {
            port,
            ip,
            production,
        } => {
            let mut site = brittle::Site::new(&base_dir)?;
            site.config.production |= production;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            brittle::server::start(&site, &ip, port).await?;
        }

        Commands::List { r#type } => {
            let site = brittle::Site::new(&base_dir)?;
            brittle::commands::list::run(&site, &r#type)?;
        }

        Commands::Search {
            query,
            category,
            select,
            key,
            any_commit,
        } => {
            let site = brittle::Site::new(&base_dir)?;
            let options = SearchOptions {
                query,
                category,
                select,
                key,
                any_commit,
            };
            brittle::commands::search::run(&site, &options)?;
        }

        Commands::Version => {
            println!("brittle version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
