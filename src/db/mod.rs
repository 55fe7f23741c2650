//! Database layer.
//!
//! A single SQLite table holds every todo. [`db::Db`] opens connections and
//! scopes them to one operation; [`todos::Todos`] implements the operations
//! on the table and keeps positions contiguous.
//!
//! ```rust,no_run
//! use tudu::db::todos::Todos;
//!
//! let todos = Todos::new()?;
//! for todo in todos.get_all() {
//!     println!("{}", todo);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection opening and the scoped-connection helper.
pub mod db;

/// Todo table schema, CRUD, filtering and reindexing.
pub mod todos;
