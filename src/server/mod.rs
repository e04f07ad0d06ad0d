//! HTTP server for the visitor state API
//!
//! Mounts `/api/id` and `/api/scroll` and serves the pre-built public
//! directory for every other path.

pub mod api;
pub mod cookie;
mod error;

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::store::{self, KeyValueStore};
use crate::Site;

pub use cookie::{CookieAttributes, COOKIE_NAME};
pub use error::ApiError;

/// Deployment environment the handlers run in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Environment {
    pub production: bool,
}

/// State shared by all handlers
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub env: Environment,
    /// Cookie domain, only applied in production
    pub domain: String,
    pub cookie_max_age: Option<i64>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, env: Environment, config: &SiteConfig) -> Self {
        Self {
            store,
            env,
            domain: config.domain.clone(),
            cookie_max_age: config.cookie_max_age,
        }
    }

    /// Production cookies are scoped to the site domain and locked down;
    /// development cookies must work over plain HTTP on localhost.
    pub fn cookie_attributes(&self) -> CookieAttributes {
        CookieAttributes {
            domain: self.env.production.then(|| self.domain.clone()),
            http_only: self.env.production,
            secure: self.env.production,
            max_age: self.cookie_max_age,
        }
    }
}

/// API routes without the static fallback
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/id", get(api::identify))
        .route("/api/scroll", get(api::read_scroll).put(api::write_scroll))
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let store = store::open(&site.config.store, &site.base_dir).await?;
    let env = Environment {
        production: site.config.production,
    };
    let state = Arc::new(AppState::new(store, env, &site.config));

    let mut app = router(state);
    if site.public_dir.exists() {
        tracing::info!("Serving static files from {:?}", site.public_dir);
        app = app.fallback_service(ServeDir::new(&site.public_dir));
    } else {
        tracing::warn!(
            "Public directory {:?} not found, only the API is served",
            site.public_dir
        );
    }
    let app = app.layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!(
        "Serving {} ({}) at http://{}:{}",
        site.config.title, site.config.url, ip, port
    );
    if env.production {
        println!("Production mode: cookies scoped to {}", site.config.domain);
    }
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
