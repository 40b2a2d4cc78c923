use announce_api::{HandlerConfig, function_handler};
use announce_core::{DynamoStore, init_logging};
use lambda_http::{Error, run, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    // Missing TABLE_NAME is fatal before the first invocation.
    let config = HandlerConfig::from_env()?;
    let store = DynamoStore::new(config.table_name.as_str()).await;

    info!(
        table = %store.table_name(),
        error_mode = ?config.error_mode,
        "announce handler starting"
    );

    run(service_fn(|event| function_handler(&store, &config, event))).await
}
