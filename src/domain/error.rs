/// Failures of one emitter invocation. Every variant aborts the run;
/// nothing is retried. Documents already written before the failure stand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("no service named {service} in cluster {cluster}")]
    ServiceNotFound { cluster: String, service: String },

    #[error("queue not found: {0}")]
    QueueNotFound(String),

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
