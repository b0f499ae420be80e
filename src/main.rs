use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use purchase_report::{service, telemetry, Config, InMemoryPurchaseStore, PurchaseService};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    telemetry::init();

    let store = InMemoryPurchaseStore::new(config.store_id_policy());
    let service = Arc::new(PurchaseService::with_config(store, config.service_config()));

    match service::serve(service, &config.addr).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(addr = %config.addr, "server failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
