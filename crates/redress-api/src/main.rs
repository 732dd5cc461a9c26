//! Binary entrypoint for the Redress API server.
use redress_api::run;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Default listen address can be overridden with REDRESS_ADDR
    let addr = std::env::var("REDRESS_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());
    run(&addr).await;
}
