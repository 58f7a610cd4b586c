use print_agent::{AgentConfig, ApiClient, PrintWorker, init_logger, resolve_printer};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AgentConfig::from_env()?;
    init_logger(&config.log_level);

    tracing::info!("Print agent starting");
    tracing::info!("  Store:   {}", config.store_id);
    tracing::info!("  Server:  {}", config.server_url);

    let client = ApiClient::new(&config.server_url)?;
    let printer = resolve_printer(&config, &client).await?;
    tracing::info!("  Printer: {}", printer.describe());

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            signal_token.cancel();
        }
    });

    PrintWorker::new(client, printer, &config).run(shutdown).await;

    Ok(())
}
