//! Static asset server: every file under the asset root, verbatim, and
//! nothing else.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

pub const DEFAULT_PORT: u16 = 8080;

/// Listen port: CLI flag, else the PORT environment variable, else 8080.
/// A non-numeric PORT value falls back to the default.
pub fn resolve_port(flag: Option<u16>) -> u16 {
    flag.or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

/// Router whose only behavior is static file semantics over `asset_root`:
/// content type by extension, index.html at directory roots, 404 otherwise.
pub fn asset_router(asset_root: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(asset_root).append_index_html_on_directories(true))
}

pub async fn serve(asset_root: PathBuf, port: u16) -> Result<()> {
    let app = asset_router(&asset_root);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind port {port}"))?;

    log::info!("Running on port: {port}");
    log::info!("serving {} at http://localhost:{port}", asset_root.display());

    axum::serve(listener, app).await?;
    Ok(())
}
