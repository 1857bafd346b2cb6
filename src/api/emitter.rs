use std::io::Write;

use tracing::info;

use crate::domain::entity::QueueBacklog;
use crate::domain::error::Result;
use crate::domain::metric::MetricDocument;

/// Writes one embedded-metric-format line per backlog to the given sink.
/// The binary hands it a locked stdout; tests hand it a byte buffer.
#[derive(Debug)]
pub struct MetricEmitter<W: Write> {
    namespace: String,
    writer: W,
}

impl<W: Write> MetricEmitter<W> {
    pub fn new(namespace: String, writer: W) -> Self {
        Self { namespace, writer }
    }

    pub fn emit(&mut self, timestamp_millis: i64, backlog: &QueueBacklog) -> Result<()> {
        let doc = MetricDocument::new(&self.namespace, timestamp_millis, backlog);

        let line = serde_json::to_string(&doc)?;
        writeln!(self.writer, "{line}")?;

        info!(
            queue_name = %backlog.queue_name,
            backlog_per_task = backlog.backlog_per_task,
            "Emitted metric"
        );

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
