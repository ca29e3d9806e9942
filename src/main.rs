//! CLI entry point for blogcat

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogcat")]
#[command(version)]
#[command(about = "Resolve and query a blog catalog from a REST backend with static fallback", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Override the backend API URL
    #[arg(long, global = true)]
    api: Option<String>,

    /// Skip the backend entirely and use the bundled fallback data
    #[arg(long, global = true)]
    offline: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts in the resolved catalog
    #[command(alias = "ls")]
    List,

    /// Show a single post and its related posts
    Show {
        /// Post id
        id: String,
    },

    /// Print the front-page sections (featured, recent, read more)
    Front,

    /// List categories with post counts
    Categories,

    /// Print the date archive, grouped by month
    Archive,

    /// Show the comment thread for a post
    Comments {
        /// Post id
        post_id: String,
    },

    /// Check backend availability
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogcat=debug,info"
    } else {
        "blogcat=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    let mut app = blogcat::Blogcat::new(&base_dir)?;
    if let Some(api) = cli.api {
        app.config.api_url = Some(api);
    }
    app.offline = cli.offline;

    match cli.command {
        Commands::List => blogcat::commands::list::run(&app).await?,
        Commands::Show { id } => blogcat::commands::show::run(&app, &id).await?,
        Commands::Front => blogcat::commands::front::run(&app).await?,
        Commands::Categories => blogcat::commands::categories::run(&app).await?,
        Commands::Archive => blogcat::commands::archive::run(&app).await?,
        Commands::Comments { post_id } => blogcat::commands::comments::run(&app, &post_id).await?,
        Commands::Status => blogcat::commands::status::run(&app).await?,
    }

    Ok(())
}
