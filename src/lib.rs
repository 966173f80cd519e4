//! Interactive in-memory task tracker driven by a numbered text menu.

pub mod config;
pub mod console;
pub mod error;
pub mod operations;
pub mod session;
pub mod store;
pub mod task;
pub mod validators;

pub use config::SessionConfig;
pub use error::{SessionError, TaskError};
pub use session::Session;
pub use store::TaskStore;
pub use task::{Difficulty, DueDate, Status, Task};
