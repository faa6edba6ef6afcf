// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! Rendering host for the published catalog. Every request resolves the
//! settings document first, then the catalog, then renders the page from
//! whatever resolution produced. No remote document is ever cached
//! server-side; staleness after a sheet edit would be a correctness bug.

mod config;
mod render;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use config::SiteConfig;
use forecourt_client::{
    default_dataset, resolve_catalog, resolve_settings, AssetConfig, Origin, RemoteFetcher,
    ResolvedCatalog,
};
use forecourt_model::BusinessProfile;
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct SiteState {
    defaults: BusinessProfile,
    assets: AssetConfig,
    fetcher: Option<RemoteFetcher>,
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("FORECOURT_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Settings resolve and apply before anything renders; the fleet section
/// is built only once catalog resolution completes. No partial render.
async fn index(State(state): State<Arc<SiteState>>) -> Html<String> {
    let (profile, catalog) = match &state.fetcher {
        Some(fetcher) => {
            let profile = resolve_settings(fetcher, &state.defaults).await;
            let catalog = resolve_catalog(fetcher).await;
            (profile, catalog)
        }
        None => (
            state.defaults.clone(),
            ResolvedCatalog {
                items: default_dataset().active_items(),
                origin: Origin::Fallback,
            },
        ),
    };
    tracing::debug!(origin = ?catalog.origin, items = catalog.items.len(), "rendering page");
    Html(render::render_page(&profile, &catalog.items, &state.assets))
}

async fn healthz() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config = SiteConfig::from_env();
    config.validate()?;

    let fetcher = match &config.data_base_url {
        Some(base) => Some(RemoteFetcher::new(base).map_err(|err| err.0)?),
        None => {
            tracing::warn!("no data base URL configured; serving the bundled dataset only");
            None
        }
    };
    let state = Arc::new(SiteState {
        defaults: BusinessProfile::default(),
        assets: AssetConfig::from_env(),
        fetcher,
    });

    let app = Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .with_state(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|err| format!("bind {} failed: {err}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "forecourt site listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|err| format!("server error: {err}"))?;
    Ok(())
}
