pub mod config;
pub mod error;
pub mod storage;
pub mod task;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use task::{Direction, Task, TaskList};
