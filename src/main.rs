use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;

use flash_lookup_web::{build_app, ui::templates, AppConfig, DictionaryClient};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(AppConfig::from_env()).await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    // Templates configuration
    let templates = templates::load(&config.templates_dir).context("Template parsing error")?;

    // Dictionary service client
    let client = DictionaryClient::new(&config.api_url, config.timeout_ms)
        .context("Failed to build dictionary client")?;

    let app = build_app((Arc::new(client), Arc::new(templates)), &config.static_dir);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);
    log::info!("Dictionary service at {}", config.api_url);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
