use clap::Parser;
use tracing_subscriber::{fmt::format, prelude::__tracing_subscriber_field_MakeExt, EnvFilter};

#[derive(Debug, Parser)]
pub struct Config {
    /// Cluster holding the service whose tasks consume the queues.
    #[clap(long, env)]
    pub cluster_name: String,
    /// Service whose running task count divides the backlog.
    #[clap(long, env)]
    pub service_name: String,
    /// Metric namespace for the emitted documents.
    #[clap(long, env)]
    pub namespace: String,
    /// Comma-separated queue names, emitted in this order.
    #[clap(long, env, value_delimiter = ',', required = true)]
    pub queue_names: Vec<String>,
    #[clap(long, env, default_value = "http://localhost:9400")]
    pub orchestration_url: String,
    #[clap(long, env, default_value = "http://localhost:9324")]
    pub queue_api_url: String,
}

pub fn configure_tracing() {
    let formatter =
        format::debug_fn(|writer, field, value| write!(writer, "{}={:?}", field, value))
            .delimited(" ");

    // Logs go to stderr; stdout carries only the metric documents.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .fmt_fields(formatter)
        .init();
}
