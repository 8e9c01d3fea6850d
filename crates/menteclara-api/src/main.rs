use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use menteclara_api::config::ApiConfig;
use menteclara_api::state::AppState;
use menteclara_genai::client::GeminiClient;
use menteclara_store::seed;
use menteclara_store::store::Store;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let config = ApiConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let store = if config.seed_demo {
        info!("loading demo accounts");
        seed::demo_store(config.record_progress)?
    } else {
        Store::new().with_progress_tracking(config.record_progress)
    };

    if config.genai.api_key.is_none() {
        tracing::warn!("no Gemini API key set; generation and speech will fail");
    }
    let gemini = Arc::new(GeminiClient::new(config.genai.clone())?);
    let state =
        AppState::new(store, gemini.clone(), gemini).with_session_idle(config.session_idle);

    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "menteclara-api listening");
    axum::serve(listener, menteclara_api::app(state)).await?;
    Ok(())
}
