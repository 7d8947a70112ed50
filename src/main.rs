use std::path::Path;
use std::sync::Arc;

use log::info;

use recipe_site::{render, routes, seed, AppState, MemoryStore, SiteConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SiteConfig::load()?;

    let store = Arc::new(MemoryStore::new());
    if let Some(file) = &config.seed.file {
        let stats = seed::load_file(store.as_ref(), Path::new(file)).await?;
        info!(
            "seeded {} categories, {} authors, {} recipes from {}",
            stats.categories, stats.authors, stats.recipes, file
        );
    }

    let templates = Arc::new(render::load_templates(&config.templates.dir)?);
    let app = routes::router(AppState::new(store, templates));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to install ctrl-c handler: {}", err);
    }
}
