use devops_notify_core::models::{LogLevel, NotifyConfig};
use devops_notify_core::utils::logging::init_tracing;
use devops_notify_worker::{AppState, handler};
use lambda_runtime::{Error, run, service_fn};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    init_tracing(LogLevel::from_env());

    // A config error only rejects email sends, each as a logged record failure
    let config = NotifyConfig::from_env().inspect_err(|e| {
        error!(error = %e, "Invalid configuration, notifications will be rejected")
    });

    info!("Starting DevOps notify Lambda function");

    let state = Arc::new(AppState::load(config).await);

    // Run the Lambda runtime
    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(event, &state).await }
    }))
    .await
}
