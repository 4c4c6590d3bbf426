use books_server::config::Config;
use books_server::error::ServerError;
use books_server::lifecycle::setup_tracing;
use books_server::start_server;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    setup_tracing();

    let config = Config::load().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;
    info!(
        host = %config.host,
        port = config.port,
        body_limit = config.body_limit,
        "Configuration loaded"
    );

    start_server(config).await
}
