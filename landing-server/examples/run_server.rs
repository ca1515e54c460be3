//! Example to run the landing server standalone
//!
//! Run with: cargo run -p landing-server --example run_server

use landing_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting landing server on port {}", config.port);
    println!("Open http://localhost:{}/", config.port);

    run_server(config).await
}
