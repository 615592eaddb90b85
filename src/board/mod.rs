//! Board state synchronization for Kahn.
//!
//! This module implements the task board core: the authoritative in-memory
//! task store, the derived filtered column view, deterministic drag-and-drop
//! reindexing, and the controller that keeps local and remote state
//! consistent under the optimistic-update discipline. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
