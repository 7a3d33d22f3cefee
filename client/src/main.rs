//! NFL DB browser client
//!
//! An MCP server over stdio that browses and edits the NFL database through
//! the Query Service. Configured by environment variables:
//! - NFL_DB_API_URL: Base URL of the Query Service
//! - NFL_DB_API_KEY: Bearer key, when the service requires one

mod client;
mod render;
mod server;
mod views;

use anyhow::Result;
use rmcp::ServiceExt;
use server::NflDbServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting NFL DB MCP server");

    let server = NflDbServer::from_env()?;

    // Serve over stdio - pass as tuple (stdin, stdout)
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    // Wait for shutdown
    service.waiting().await?;

    Ok(())
}
