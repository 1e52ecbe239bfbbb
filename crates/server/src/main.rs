//! Folio Server
//!
//! Axum server that renders the portfolio pages from `folio_core`, serves the
//! embedded assets and relays contact messages to the external endpoint.

mod api;
mod pages;
mod preview;
mod render;

use axum::{
    routing::{get, post},
    Router,
};
use clap::{Parser, Subcommand};
use folio_core::config::SiteConfig;
use folio_core::contact::{ContactTransport, HttpContactTransport, InFlight};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

/// Application state
pub struct AppState {
    config: SiteConfig,
    /// Delivery of contact messages to the external endpoint
    transport: Arc<dyn ContactTransport>,
    /// Messages still being relayed; identical reposts are refused
    in_flight: InFlight,
}

pub type SharedState = Arc<AppState>;

#[derive(Parser, Clone)]
#[command(author, version, about = "Folio - personal portfolio site")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the web server (default)
    Serve {
        /// Port to listen on (overrides config and FOLIO_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Walk through the home page in the terminal
    Preview {
        /// Gallery category to select ("All", "Frontend", "Backend", "Full Stack")
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Routes for the whole site
fn build_app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(pages::page))
        .route("/message", post(pages::send_message))
        .route("/theme", post(pages::theme::toggle_theme))
        .route("/assets/*path", get(pages::assets::serve_asset))
        .nest("/api/v1", api::api_routes())
        // "/not-found" and every other path resolve to the not-found screen
        .fallback(pages::page)
        .with_state(state)
}

async fn load_config() -> anyhow::Result<SiteConfig> {
    let root = std::env::current_dir()?;
    let mut config = SiteConfig::load(&root).await?;
    config.apply_env()?;
    Ok(config)
}

pub async fn run_server(config: SiteConfig) -> anyhow::Result<()> {
    let http = HttpContactTransport::new(config.contact_endpoint.clone());
    let endpoint = http.endpoint().to_string();
    let transport: Arc<dyn ContactTransport> = Arc::new(http);
    let port = config.port;

    let state: SharedState = Arc::new(AppState {
        config,
        transport,
        in_flight: InFlight::new(),
    });
    let app = build_app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("🚀 Folio running at http://{}", addr);
    println!("   Pages:   /, /not-found");
    println!("   Contact: POST /message -> {}", endpoint);
    println!("   API v1:  /api/v1/projects, /api/v1/categories, /api/v1/openapi.json");
    tracing::info!(%addr, contact_endpoint = %endpoint, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();
    let args = Args::parse();
    let mut config = load_config().await?;

    match args.command {
        Some(CliCommand::Preview { category }) => preview::run_preview(&config, category).await,
        Some(CliCommand::Serve { port }) => {
            if let Some(port) = port {
                config.port = port;
            }
            run_server(config).await
        }
        None => run_server(config).await,
    }
}
