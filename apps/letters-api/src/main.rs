//! Letters API server - generates compensation-change letters
//!
//! For each requested employee email the server looks the employee up in a
//! compensation sheet, copies a letter template in the document store,
//! substitutes the employee's fields, and returns a link to the new
//! document.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use letters_api::config::Settings;
use letters_api::google::GoogleClients;
use letters_api::state::AppState;
use letters_core::LetterGenerator;

/// Command-line arguments for the letters API server
#[derive(Parser, Debug)]
#[command(name = "letters-api")]
#[command(about = "HTTP API for compensation letter generation")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("letters_api={default_level}").parse()?)
                .add_directive(format!("letters_core={default_level}").parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let settings = Settings::from_env()?;

    let google = Arc::new(GoogleClients::new(settings.google_access_token.clone()));
    let generator = LetterGenerator::new(
        settings.generator.clone(),
        google.clone(),
        google.clone(),
        google,
    );
    let state = Arc::new(AppState::new(generator));

    let app = letters_api::app(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting letters API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
