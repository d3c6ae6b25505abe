use phonebook_service::config::{PhonebookConfig, SERVICE_NAME};
use phonebook_service::services::init_metrics;
use phonebook_service::startup::Application;
use service_core::error::AppError;
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Configuration comes first: a missing MONGODB_URI must stop the process
    // before anything binds.
    let config = PhonebookConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.otlp_endpoint.as_deref(),
    )?;
    init_metrics();

    tracing::info!(
        service = %SERVICE_NAME,
        version = %env!("CARGO_PKG_VERSION"),
        port = config.common.port,
        "Starting phonebook service"
    );

    let application = Application::build(config).await?;
    let result = application.run_until_stopped().await;

    tracing::info!("Phonebook service stopped");
    shutdown_tracing();

    Ok(result?)
}
