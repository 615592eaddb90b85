//! Application services for board orchestration.

mod controller;

pub use controller::{BoardService, BoardServiceError, BoardServiceResult};
