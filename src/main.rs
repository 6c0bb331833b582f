use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wordbloom::cache::{CacheManager, CachePolicy, MemoryCache};
use wordbloom::generate::ContentGenerator;
use wordbloom::model::{HttpModelClient, TextModel};
use wordbloom::server::{self, AppState};
use wordbloom::ServiceConfig;

#[tokio::main]
async fn main() -> wordbloom::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServiceConfig::from_env();

    let model: Option<Arc<dyn TextModel>> = match &config.model {
        Some(model_config) => {
            info!(base_url = %model_config.base_url, model = %model_config.model, "model endpoint configured");
            Some(Arc::new(HttpModelClient::new(model_config)?))
        }
        None => {
            warn!("no model endpoint configured; word lists use the dictionary, stories will fail");
            None
        }
    };

    let policy = CachePolicy::default().with_enabled(config.cache_enabled);
    let cache = CacheManager::new(policy, Box::new(MemoryCache::new(config.cache_capacity)));
    let state = Arc::new(AppState::new(ContentGenerator::new(model), cache));

    let app = server::router(state);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
