use serde::Deserialize;

use crate::domain::{
    client::{OrchestrationClient, QueueClient},
    entity::{QueueHandle, ServiceDescription},
    error::{Error, Result},
};

/// JSON client for the container-orchestration API.
#[derive(Debug, Clone)]
pub struct HttpOrchestrationClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrchestrationClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[derive(Debug, Deserialize)]
struct DescribeServicesResponse {
    services: Vec<ServiceDescription>,
}

#[async_trait::async_trait]
impl OrchestrationClient for HttpOrchestrationClient {
    async fn describe_service(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<Vec<ServiceDescription>> {
        let url = format!(
            "{}/v1/clusters/{}/services/{}",
            self.base_url, cluster, service
        );

        let response = self.client.get(&url).send().await?;

        // An unknown service surfaces as an empty list either way.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let body: DescribeServicesResponse = response.error_for_status()?.json().await?;

        Ok(body.services)
    }
}

/// JSON client for the queue-service API.
#[derive(Debug, Clone)]
pub struct HttpQueueClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQueueClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolveQueueResponse {
    queue_url: String,
}

#[derive(Debug, Deserialize)]
struct QueueAttributesResponse {
    #[serde(default)]
    attributes: QueueAttributes,
}

#[derive(Debug, Default, Deserialize)]
struct QueueAttributes {
    #[serde(rename = "ApproximateNumberOfMessages")]
    approximate_number_of_messages: Option<u64>,
}

#[async_trait::async_trait]
impl QueueClient for HttpQueueClient {
    async fn resolve_queue(&self, name: &str) -> Result<QueueHandle> {
        let url = format!("{}/v1/queues/{}", self.base_url, name);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::QueueNotFound(name.to_string()));
        }

        let body: ResolveQueueResponse = response.error_for_status()?.json().await?;

        Ok(QueueHandle {
            url: body.queue_url,
        })
    }

    async fn approx_message_count(&self, queue: &QueueHandle) -> Result<Option<u64>> {
        let url = format!("{}/attributes", queue.url);

        let body: QueueAttributesResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(body.attributes.approximate_number_of_messages)
    }
}
