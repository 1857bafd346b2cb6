use std::io::Write;

use chrono::Utc;
use tracing::info;

use crate::api::emitter::MetricEmitter;
use crate::domain::{
    client::{OrchestrationClient, QueueClient},
    entity::{QueueBacklog, ServiceIdentity},
    error::{Error, Result},
};

/// Computes and emits the backlog-per-task signal for one service and its
/// queues. Generic over the two API clients so tests can substitute fakes.
#[derive(Debug)]
pub struct BacklogService<O, Q>
where
    O: OrchestrationClient,
    Q: QueueClient,
{
    orchestration: O,
    queues: Q,
    identity: ServiceIdentity,
}

impl<O, Q> BacklogService<O, Q>
where
    O: OrchestrationClient,
    Q: QueueClient,
{
    pub fn new(orchestration: O, queues: Q, identity: ServiceIdentity) -> Self {
        Self {
            orchestration,
            queues,
            identity,
        }
    }

    /// One full invocation: resolve the running task count once, capture one
    /// timestamp, then compute and emit per queue in the configured order.
    /// Fail-fast: the first error aborts the run; documents already written
    /// for earlier queues stand and are not retracted.
    pub async fn run<W: Write>(
        &self,
        queue_names: &[String],
        emitter: &mut MetricEmitter<W>,
    ) -> Result<()> {
        if queue_names.is_empty() {
            return Err(Error::Configuration(
                "QUEUE_NAMES must name at least one queue".to_string(),
            ));
        }

        let running_count = self.running_task_count().await?;

        // One timestamp shared by every document of this invocation.
        let timestamp = Utc::now().timestamp_millis();

        info!(running_count, timestamp, "Resolved running task count");

        for name in queue_names {
            let backlog = self.queue_backlog(name, running_count).await?;
            emitter.emit(timestamp, &backlog)?;
        }

        Ok(())
    }

    /// Number of task instances currently running for the configured
    /// service. A service the orchestration layer does not know is a hard
    /// stop; a known service with no reported count counts as 0.
    async fn running_task_count(&self) -> Result<u64> {
        let services = self
            .orchestration
            .describe_service(&self.identity.cluster_name, &self.identity.service_name)
            .await?;

        match services.first() {
            Some(service) => Ok(service.running_count.unwrap_or(0)),
            None => Err(Error::ServiceNotFound {
                cluster: self.identity.cluster_name.clone(),
                service: self.identity.service_name.clone(),
            }),
        }
    }

    /// Backlog-per-task for one queue, given the shared running count. A
    /// queue reporting no message-count attribute counts as empty.
    async fn queue_backlog(&self, queue_name: &str, running_count: u64) -> Result<QueueBacklog> {
        let handle = self.queues.resolve_queue(queue_name).await?;

        let messages = self
            .queues
            .approx_message_count(&handle)
            .await?
            .unwrap_or(0);

        Ok(QueueBacklog::new(
            queue_name.to_string(),
            messages,
            running_count,
        ))
    }
}
