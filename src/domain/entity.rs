use serde::{Deserialize, Serialize};

/// Orchestration-API target, fixed at startup from configuration.
#[derive(Debug, Clone)]
pub struct ServiceIdentity {
    pub cluster_name: String,
    pub service_name: String,
}

impl ServiceIdentity {
    pub fn new(cluster_name: String, service_name: String) -> Self {
        Self {
            cluster_name,
            service_name,
        }
    }
}

/// One entry of the orchestration API's describe response. The API may omit
/// the running count, in which case it is taken to be 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescription {
    #[serde(rename = "runningCount")]
    pub running_count: Option<u64>,
}

/// Resolved queue address. Opaque to the backlog computation; only the
/// queue client dereferences it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueHandle {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueBacklog {
    pub queue_name: String,
    pub backlog_per_task: u64,
}

impl QueueBacklog {
    pub fn new(queue_name: String, messages: u64, running_tasks: u64) -> Self {
        Self {
            queue_name,
            backlog_per_task: backlog_per_task(messages, running_tasks),
        }
    }
}

/// Messages waiting per running task, rounded up so a nonzero remainder
/// still registers as one more task's worth of pressure. A zero task count
/// divides by 1 instead, keeping the signal meaningful for scale-from-zero.
pub fn backlog_per_task(messages: u64, running_tasks: u64) -> u64 {
    let divisor = if running_tasks == 0 { 1 } else { running_tasks };

    messages.div_ceil(divisor)
}
