//! `rift` binary: loads configuration, starts the runtime and hands the
//! terminal to [`rift_client::App`].
use anyhow::Result;

use rift_client::{App, logging};
use rift_runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let _guard = logging::setup_logging()?;

    let config = RuntimeConfig::from_env()?;
    tracing::info!(target: "rift::client", ?config, "starting rift");

    let runtime = Runtime::builder().config(config).build().await?;
    println!("rift run seed {}", runtime.seed());

    let result = App::new(runtime.handle()).run().await;

    runtime.shutdown().await?;
    tracing::info!(target: "rift::client", "shutdown complete");
    result
}
