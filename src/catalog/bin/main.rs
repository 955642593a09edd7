use std::net::SocketAddr;
use library_catalog::catalog::controller::router;
use library_catalog::core::controller::AppState;
use library_catalog::gateway::GatewayPublisherVia;
use library_catalog::utils::logs::setup_tracing;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_BRANCH: &str = "main";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing();

    let branch = std::env::var("LIBRARY_BRANCH").unwrap_or_else(|_| DEFAULT_BRANCH.to_string());
    let addr: SocketAddr = std::env::var("LIBRARY_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string()).parse()?;

    let state = AppState::new(branch.as_str(), GatewayPublisherVia::Logs);
    tracing::info!(branch = branch.as_str(), addr = %addr, "library catalog listening");

    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await?;
    Ok(())
}
