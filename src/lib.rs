//! Kahn: kanban board state-synchronization engine.
//!
//! This crate provides the core of a browser-based task board: the canonical
//! in-memory task collection, the derived filtered view, the drag-and-drop
//! reordering protocol, and the optimistic-update-then-persist discipline
//! that keeps local state, visible state, and remote storage consistent.
//!
//! # Architecture
//!
//! Kahn follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (remote gateway, notifier)
//!
//! # Modules
//!
//! - [`board`]: Task store, view projection, drag-and-drop, and board control

pub mod board;
