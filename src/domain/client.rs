use super::entity::{QueueHandle, ServiceDescription};
use super::error::Result;

#[async_trait::async_trait]
pub trait OrchestrationClient: Send + Sync {
    /// Describe the named service in the given cluster. An empty list means
    /// no such service exists.
    async fn describe_service(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<Vec<ServiceDescription>>;
}

#[async_trait::async_trait]
pub trait QueueClient: Send + Sync {
    /// Resolve a queue name to its address. Fails with
    /// [`Error::QueueNotFound`](super::error::Error::QueueNotFound) if the
    /// name does not resolve.
    async fn resolve_queue(&self, name: &str) -> Result<QueueHandle>;

    /// Approximate number of messages waiting on the queue. `None` when the
    /// queue service does not report the attribute.
    async fn approx_message_count(&self, queue: &QueueHandle) -> Result<Option<u64>>;
}
