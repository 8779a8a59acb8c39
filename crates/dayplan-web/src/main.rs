use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use dayplan_agent::{OpenAiProvider, PlanGenerator};
use dayplan_core::config::DayplanConfig;
use dayplan_store::PlanStore;

mod app;
mod http;
mod page;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dayplan_web=debug,tower_http=debug".into()),
        )
        .init();

    // load config: explicit path via DAYPLAN_CONFIG env > ./dayplan.toml
    let config_path = std::env::var("DAYPLAN_CONFIG").ok();
    let config = DayplanConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        DayplanConfig::default()
    });

    let bind = config.server.bind.clone();
    let port = config.server.port;

    // open the SQLite database and create the schema if absent
    let db_path = &config.database.path;
    ensure_parent_dir(db_path);
    info!(path = %db_path, "opening SQLite database");

    let db = rusqlite::Connection::open(db_path)?;
    dayplan_store::db::init_db(&db)?;
    info!("database schema ready");

    let store = PlanStore::new(db);
    let generator = build_generator(&config);

    let state = Arc::new(app::AppState::new(config, generator, store));
    let router = app::build_router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("dayplan listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

/// Build the plan generator from config.
///
/// The credential comes from `generator.api_key` in dayplan.toml, falling
/// back to the OPENAI_API_KEY env var. Without either the server still
/// starts; every generation then fails and the page shows the apology.
fn build_generator(config: &DayplanConfig) -> PlanGenerator {
    let api_key = config
        .generator
        .api_key
        .clone()
        .or_else(|| std::env::var("OPENAI_API_KEY").ok());

    let provider: Box<dyn dayplan_agent::LlmProvider> = match api_key {
        Some(key) => {
            info!(
                model = %config.generator.model,
                base_url = %config.generator.base_url,
                "LLM provider: OpenAI"
            );
            Box::new(OpenAiProvider::new(
                key,
                Some(config.generator.base_url.clone()),
            ))
        }
        None => {
            tracing::warn!(
                "No API credential configured — plan generation will return errors. \
                 Set generator.api_key in dayplan.toml or the OPENAI_API_KEY env var."
            );
            Box::new(NullProvider)
        }
    };

    PlanGenerator::new(provider, config.generator.model.clone())
}

/// Ensure the parent directory for a file path exists.
fn ensure_parent_dir(path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
}

/// Placeholder provider when no API key is available.
struct NullProvider;

#[async_trait::async_trait]
impl dayplan_agent::LlmProvider for NullProvider {
    fn name(&self) -> &str {
        "null"
    }

    async fn send(
        &self,
        _req: &dayplan_agent::provider::ChatRequest,
    ) -> Result<dayplan_agent::provider::ChatResponse, dayplan_agent::ProviderError> {
        Err(dayplan_agent::ProviderError::Unavailable(
            "no API credential configured — set generator.api_key in dayplan.toml".into(),
        ))
    }
}
