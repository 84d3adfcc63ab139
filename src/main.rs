use policy_metrics::frontend::start_all;
use policy_metrics::logging;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;

    info!("PolicyMetrics is starting...");
    start_all().await?;

    Ok(())
}
