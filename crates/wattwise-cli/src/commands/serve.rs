//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};

pub async fn cmd_serve(host: &str, port: u16, static_dir: Option<&Path>) -> Result<()> {
    println!("🚀 Starting WattWise dashboard server...");
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    let config = wattwise_server::ServerConfig::from_env();
    if !config.allowed_origins.is_empty() {
        println!(
            "   🌐 CORS origins: {} ({})",
            config.allowed_origins.join(", "),
            wattwise_server::ALLOWED_ORIGINS_ENV
        );
    }
    println!();
    println!("   ⚠️  Data is kept in memory only. Export your history before stopping.");
    println!("   Press Ctrl+C to stop");

    let static_dir = static_dir
        .map(|d| {
            d.to_str()
                .with_context(|| format!("Static directory is not valid UTF-8: {}", d.display()))
        })
        .transpose()?;

    wattwise_server::serve_with_config(host, port, static_dir, config)
        .await
        .context("Server failed")
}
