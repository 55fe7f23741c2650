//! # Tudu - a local todo-list manager
//!
//! Keeps an ordered list of todos with categories, priorities, statuses and
//! due dates in a SQLite database, driven from the command line.
//!
//! ## Features
//!
//! - **Ordered List**: Every todo has a dense, zero-based position
//! - **Validation**: Empty tasks and out-of-range priorities are rejected
//! - **Filtering**: List by status, category or priority
//! - **Statistics**: Totals per status plus overdue count
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
