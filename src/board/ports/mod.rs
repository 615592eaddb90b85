//! Port contracts for board state synchronization.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod notifier;
pub mod remote;

pub use notifier::{BoardNotice, BoardNotifier, NoticeKind};
pub use remote::{RemoteTaskError, RemoteTaskGateway, RemoteTaskResult};
