//! Cocktail Browser terminal frontend

mod app;
mod backend;
mod config;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use cocktail_browser_app::adapters::JsonFileStore;
use cocktail_browser_app::AppStateBuilder;
use cocktail_browser_provider::ProviderConfig;

use config::Config;
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<()> {
    // 1. Configuration and logging
    let (config, config_error) = Config::load();
    let data_dir = config.data_dir();
    let _log_guard = init_logging(&data_dir, config.log_level())?;
    if let Some(e) = config_error {
        tracing::warn!("{e}; using default configuration");
    }
    view::theme::set_theme(config.theme);

    // 2. Services
    let state = AppStateBuilder::new()
        .store(Arc::new(JsonFileStore::new(data_dir.clone())))
        .provider_config(ProviderConfig::CocktailDb {
            base_url: config.api_base_url.clone(),
        })
        .build()
        .context("failed to initialize services")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    // Preferences come first so the form never shows stale values
    let preferences = runtime.block_on(state.startup_preferences());
    let executor = backend::Executor::new(Arc::new(state), runtime.handle().clone(), tx);

    // 3. Terminal
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut app = model::App::with_preferences(preferences);

    // 4. Main loop
    let result = app::run(&mut terminal, &mut app, &executor, &mut rx);

    // 5. Restore the terminal whatever happened
    restore_terminal(&mut terminal)?;
    if let Err(ref e) = result {
        tracing::error!("Exiting with error: {e:#}");
    }
    tracing::info!("Bye");

    result
}
