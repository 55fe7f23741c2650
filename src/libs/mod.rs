//! Core library modules: the task record, configuration, messages and rendering.
//!
//! ```rust
//! use tudu::libs::todo::{Priority, Todo};
//!
//! let todo = Todo::builder("Buy milk", "Home").priority("3").build()?;
//! assert_eq!(todo.priority, Priority::Low);
//! # Ok::<(), tudu::libs::error::TodoError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod stats;
pub mod todo;
pub mod view;
