mod config;
mod detect;
mod message;
mod report;
mod server;
mod telegram;
mod utils;

use crate::server::AppState;
use crate::telegram::Notifier;
use anyhow::Result;
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load_config()?;
    pretty_env_logger::init();
    info!("Starting device report relay...");
    let notifier = Notifier::new(&config)?;
    let state = Arc::new(AppState { notifier });
    let app = server::router(state);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
