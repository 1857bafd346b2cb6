use std::time::Duration;

use anyhow::Result;
use backlog::api::emitter::MetricEmitter;
use backlog::api::service::BacklogService;
use backlog::config::{self, Config};
use backlog::domain::entity::ServiceIdentity;
use backlog::infrastructure::http::{HttpOrchestrationClient, HttpQueueClient};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    config::configure_tracing();

    // Timeout policy lives here with the client, not in the core.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let orchestration =
        HttpOrchestrationClient::new(http.clone(), config.orchestration_url.clone());
    let queues = HttpQueueClient::new(http, config.queue_api_url.clone());

    let identity = ServiceIdentity::new(config.cluster_name.clone(), config.service_name.clone());
    let service = BacklogService::new(orchestration, queues, identity);

    let mut emitter = MetricEmitter::new(config.namespace.clone(), std::io::stdout().lock());

    if let Err(e) = service.run(&config.queue_names, &mut emitter).await {
        error!("Backlog emission failed: {e}");
        return Err(e.into());
    }

    info!("Exiting");

    Ok(())
}
