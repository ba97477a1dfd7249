pub(crate) mod api;
pub(crate) mod catalog;
pub(crate) mod core;
pub(crate) mod repositories;
pub(crate) mod schemas;
pub(crate) mod services;

#[cfg(test)]
mod test_support;

use anyhow::Context;

use crate::core::{config::Settings, state::AppState, telemetry};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let catalog_path = settings.catalog().path.clone();
    let bank = catalog::loader::load_from_path(&catalog_path)
        .await
        .with_context(|| format!("refusing to start without a valid catalog ({catalog_path})"))?;
    tracing::info!(
        path = %catalog_path,
        questions = bank.len(),
        categories = bank.list_categories().len(),
        "Question catalog loaded"
    );

    let state = AppState::new(settings, bank);
    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        "Aptiquiz API listening"
    );

    axum::serve(listener, app).with_graceful_shutdown(core::shutdown::shutdown_signal()).await?;

    Ok(())
}
