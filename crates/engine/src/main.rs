//! Dexview - headless runner.
//!
//! `dexview <name-or-id>` prints the detail view model as JSON;
//! `dexview` with no argument prints the first catalog page.

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dexview_engine::infrastructure::pokeapi::PokeApiClient;
use dexview_engine::infrastructure::settings::Settings;
use dexview_engine::stores::DetailState;
use dexview_engine::use_cases::CatalogPhase;
use dexview_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root so the binary behaves the same from any crate dir.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dexview_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env();
    tracing::info!(
        api = %settings.api_base_url,
        page_size = settings.page_size,
        max_in_flight = settings.max_in_flight,
        "Starting Dexview"
    );

    let client = match settings.http_timeout {
        Some(timeout) => PokeApiClient::with_timeout(&settings.api_base_url, timeout),
        None => PokeApiClient::new(&settings.api_base_url),
    };
    let app = App::new(Arc::new(client), settings).context("invalid settings")?;

    let output = match std::env::args().nth(1) {
        Some(name) => match app.open_detail(&name).await? {
            DetailState::Ready(view) => serde_json::to_string_pretty(&view)?,
            DetailState::Unavailable { name, reason } => {
                bail!("{name} is unavailable: {reason}")
            }
            state => bail!("unexpected detail state: {state:?}"),
        },
        None => {
            app.load_catalog_phase(CatalogPhase::FirstPage).await?;
            let snapshot = app.catalog.snapshot().await?;
            if let Some(error) = &snapshot.last_error {
                bail!("catalog unavailable: {error}");
            }
            serde_json::to_string_pretty(&snapshot)?
        }
    };

    println!("{output}");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
