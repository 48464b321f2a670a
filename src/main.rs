use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use policybot_feedback::{api, db};

#[derive(Parser)]
#[command(name = "feedbackd")]
#[command(about = "Feedback capture service for the PolicyBot assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the feedback server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Database file (defaults to the platform data directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "policybot_feedback=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(port: u16, db_path: Option<PathBuf>) -> anyhow::Result<()> {
    tracing::info!("Starting feedback server on port {}", port);

    let db = match db_path {
        Some(path) => db::Database::open(path)?,
        None => db::Database::open_default()?,
    };
    db.migrate()?;

    let app = api::create_router(db);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Feedback server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, db }) => serve(port, db).await?,
        // Default: start server with defaults
        None => serve(5000, None).await?,
    }

    Ok(())
}
