// This holds the backlog signal core:
// - Entities: the target service identity, resolved queue handles, and the
//   per-queue backlog value.
// - Client contracts for the orchestration API and the queue-service API,
//   so the service logic can be driven by fakes in tests.
// - The embedded metric format document shape emitted per queue.

pub mod client;
pub mod entity;
pub mod error;
pub mod metric;
