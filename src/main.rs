use anyhow::Result;

use kalendi_api::CalendarStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    kalendi_core::init()?;

    // Load and validate configuration
    let (config, _validation) = kalendi_core::Config::load_validated()?;

    tracing::info!("Kalendi backend started");
    tracing::info!("ML service URL: {}", config.ml.base_url);

    // Wire up services
    let ml = kalendi_ml::MlClient::new(&config.ml)?;
    let assistant = kalendi_api::Assistant::new(ml);
    let store = kalendi_api::InMemoryStore::new();

    // Probe the ML service before reporting ready
    let ml_healthy = assistant.ml_service_healthy().await;
    tracing::info!(ml_healthy, "ML service probe complete");

    println!("Kalendi - Calendar Assistant Backend");
    println!("API status: {}", kalendi_api::health());
    println!("ML service configured: {}", ml_healthy);
    println!("Calendars stored: {}", store.list().len());

    Ok(())
}
