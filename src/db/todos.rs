//! Persistence of todos with dense positional ordering.
//!
//! Every stored todo carries a `position`; across the table these positions
//! always form `0..count`. Inserts append at `count`, deletes close the gap
//! by rewriting the remaining positions in one transaction.
//!
//! ## Failure policy
//!
//! Reads degrade to an empty result and writes to `false` when SQLite
//! fails; the failure is logged with `tracing::warn!`. Validation errors
//! (`TodoError::Validation`) are always returned. Use [`Todos::fetch`] when a
//! read must distinguish "no rows" from "storage fault".
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::db::todos::Todos;
//! use tudu::libs::todo::Todo;
//!
//! let todos = Todos::open("todos.db")?;
//! let mut todo = Todo::builder("Draft proposal", "Work").priority(1).build()?;
//! todos.insert(&mut todo)?;
//! assert_eq!(todo.position, Some(0));
//! todos.delete(0);
//! # Ok::<(), tudu::libs::error::TodoError>(())
//! ```

use super::db::Db;
use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::todo::{now_timestamp, Priority, Todo, TodoChanges, TodoStatus};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SCHEMA_TODOS: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT NOT NULL,
    category TEXT NOT NULL,
    date_added TEXT NOT NULL,
    date_completed TEXT,
    status INTEGER NOT NULL,
    position INTEGER,
    due_date TEXT,
    priority INTEGER NOT NULL,
    CONSTRAINT status_check CHECK (status IN (1, 2, 3)),
    CONSTRAINT priority_check CHECK (priority IN (1, 2, 3))
)";
const INDEXES_TODOS: &str = "
CREATE INDEX IF NOT EXISTS idx_todos_status ON todos(status);
CREATE INDEX IF NOT EXISTS idx_todos_category ON todos(category);
CREATE INDEX IF NOT EXISTS idx_todos_position ON todos(position);
";
const INSERT_TODO: &str = "INSERT INTO todos (task, category, date_added, date_completed, status, position, due_date, priority) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const COUNT_TODOS: &str = "SELECT COUNT(*) FROM todos";
const SELECT_TODOS: &str = "SELECT id, task, category, date_added, date_completed, status, position, due_date, priority FROM todos";
const WHERE_POSITION: &str = "WHERE position = ?1";
const WHERE_STATUS: &str = "WHERE status = ?1";
const WHERE_CATEGORY: &str = "WHERE category = ?1";
const WHERE_PRIORITY: &str = "WHERE priority = ?1";
const ORDER_BY_POSITION: &str = "ORDER BY position";
const DELETE_TODO: &str = "DELETE FROM todos WHERE position = ?1";
const SELECT_IDS_BY_POSITION: &str = "SELECT id FROM todos ORDER BY position";
const UPDATE_POSITION: &str = "UPDATE todos SET position = ?1 WHERE id = ?2";
const COMPLETE_TODO: &str = "UPDATE todos SET status = ?1, date_completed = ?2 WHERE position = ?3";
const PROGRESS_TODO: &str = "UPDATE todos SET status = ?1 WHERE position = ?2";
const PING: &str = "SELECT 1";

impl ToSql for TodoStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(self.as_code())))
    }
}

impl FromSql for TodoStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = i64::column_result(value)?;
        TodoStatus::from_code(code).ok_or(FromSqlError::OutOfRange(code))
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(self.as_code())))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = i64::column_result(value)?;
        Priority::from_code(code).ok_or(FromSqlError::OutOfRange(code))
    }
}

/// Row selection for [`Todos::fetch`]. Results are always ordered by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoFilter {
    All,
    Status(TodoStatus),
    Category(String),
    Priority(Priority),
}

fn todo_from_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        task: row.get(1)?,
        category: row.get(2)?,
        date_added: row.get(3)?,
        date_completed: row.get(4)?,
        status: row.get(5)?,
        position: row.get(6)?,
        due_date: row.get(7)?,
        priority: row.get(8)?,
    })
}

/// Rewrites positions to `0..n` keeping the current relative order.
fn reindex(conn: &Connection) -> Result<usize> {
    let ids: Vec<i64> = {
        let mut stmt = conn.prepare(SELECT_IDS_BY_POSITION)?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect::<rusqlite::Result<_>>()?
    };

    let mut stmt = conn.prepare(UPDATE_POSITION)?;
    for (position, id) in ids.iter().enumerate() {
        stmt.execute(params![position as i64, id])?;
    }
    Ok(ids.len())
}

/// Handle to the todo table in one database file.
///
/// Holds only the path: each operation opens its own connection through
/// [`Db::scoped`] and closes it before returning.
#[derive(Debug, Clone)]
pub struct Todos {
    path: PathBuf,
}

impl Todos {
    /// Opens the database configured for the current user.
    pub fn new() -> anyhow::Result<Todos> {
        let path = Config::read()?.db_path()?;
        Ok(Todos::open(path)?)
    }

    /// Opens (creating if needed) the database at `path` and ensures the schema.
    pub fn open(path: impl Into<PathBuf>) -> Result<Todos> {
        let todos = Todos { path: path.into() };
        todos.initialize()?;
        Ok(todos)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the table and its indexes if absent. Safe to call repeatedly.
    pub fn initialize(&self) -> Result<()> {
        Db::scoped(&self.path, |conn| {
            conn.execute(SCHEMA_TODOS, [])?;
            conn.execute_batch(INDEXES_TODOS)?;
            Ok(())
        })
    }

    /// Appends `todo` at the end of the list.
    ///
    /// On success the assigned `id` and `position` are written back into
    /// `todo`. An empty task is rejected before storage is touched; storage
    /// failures are logged and reported as `Ok(false)`.
    pub fn insert(&self, todo: &mut Todo) -> Result<bool> {
        todo.validate()?;

        let inserted = Db::scoped(&self.path, |conn| {
            let tx = conn.transaction()?;
            let position: u32 = tx.query_row(COUNT_TODOS, [], |row| row.get(0))?;
            tx.execute(
                INSERT_TODO,
                params![
                    todo.task,
                    todo.category,
                    todo.date_added,
                    todo.date_completed,
                    todo.status,
                    position,
                    todo.due_date,
                    todo.priority
                ],
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;
            Ok((id, position))
        });

        match self.degrade("insert", inserted.map(Some), None) {
            Some((id, position)) => {
                todo.id = Some(id);
                todo.position = Some(position);
                debug!(id, position, "todo inserted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fallible read used by every list operation.
    pub fn fetch(&self, filter: &TodoFilter) -> Result<Vec<Todo>> {
        Db::scoped(&self.path, |conn| {
            let (clause, value): (&str, Option<&dyn ToSql>) = match filter {
                TodoFilter::All => ("", None),
                TodoFilter::Status(status) => (WHERE_STATUS, Some(status as &dyn ToSql)),
                TodoFilter::Category(category) => (WHERE_CATEGORY, Some(category as &dyn ToSql)),
                TodoFilter::Priority(priority) => (WHERE_PRIORITY, Some(priority as &dyn ToSql)),
            };
            let sql = format!("{} {} {}", SELECT_TODOS, clause, ORDER_BY_POSITION);

            let mut stmt = conn.prepare(&sql)?;
            let todo_iter = stmt.query_map(params_from_iter(value), todo_from_row)?;
            let mut todos = Vec::new();
            for todo in todo_iter {
                todos.push(todo?);
            }
            Ok(todos)
        })
    }

    pub fn get_all(&self) -> Vec<Todo> {
        self.degrade("get_all", self.fetch(&TodoFilter::All), Vec::new())
    }

    pub fn get_by_status(&self, status: TodoStatus) -> Vec<Todo> {
        self.degrade("get_by_status", self.fetch(&TodoFilter::Status(status)), Vec::new())
    }

    pub fn get_by_category(&self, category: &str) -> Vec<Todo> {
        self.degrade("get_by_category", self.fetch(&TodoFilter::Category(category.to_string())), Vec::new())
    }

    pub fn get_by_priority(&self, priority: Priority) -> Vec<Todo> {
        self.degrade("get_by_priority", self.fetch(&TodoFilter::Priority(priority)), Vec::new())
    }

    /// The todo at `position`, or `None` when there is none.
    pub fn get(&self, position: u32) -> Option<Todo> {
        let found = Db::scoped(&self.path, |conn| {
            let sql = format!("{} {}", SELECT_TODOS, WHERE_POSITION);
            Ok(conn.query_row(&sql, params![position], todo_from_row).optional()?)
        });
        self.degrade("get", found, None)
    }

    /// Number of stored todos, 0 when the store cannot be read.
    pub fn count(&self) -> usize {
        let count = Db::scoped(&self.path, |conn| Ok(conn.query_row(COUNT_TODOS, [], |row| row.get::<_, i64>(0))?));
        self.degrade("count", count, 0).max(0) as usize
    }

    /// Removes the todo at `position` and closes the gap it leaves.
    ///
    /// Delete and reindex share one transaction, so no reader ever sees a
    /// gap. Returns `false` when nothing was at `position` or the store
    /// failed; in both cases nothing is committed.
    pub fn delete(&self, position: u32) -> bool {
        let deleted = Db::scoped(&self.path, |conn| {
            let tx = conn.transaction()?;
            if tx.execute(DELETE_TODO, params![position])? == 0 {
                return Ok(false);
            }
            let remaining = reindex(&tx)?;
            tx.commit()?;
            debug!(position, remaining, "todo deleted and positions reindexed");
            Ok(true)
        });
        self.degrade("delete", deleted, false)
    }

    /// Applies the supplied fields of `changes` to the todo at `position`.
    ///
    /// Absent fields are left as they are. An empty change set does nothing
    /// and returns `Ok(false)`. Returns whether a todo matched.
    pub fn update(&self, position: u32, changes: &TodoChanges) -> Result<bool> {
        changes.validate()?;
        if changes.is_empty() {
            return Ok(false);
        }

        let updated = Db::scoped(&self.path, |conn| {
            let mut columns: Vec<&str> = Vec::new();
            let mut values: Vec<&dyn ToSql> = Vec::new();
            if let Some(task) = &changes.task {
                columns.push("task");
                values.push(task);
            }
            if let Some(category) = &changes.category {
                columns.push("category");
                values.push(category);
            }
            if let Some(priority) = &changes.priority {
                columns.push("priority");
                values.push(priority);
            }
            if let Some(due_date) = &changes.due_date {
                columns.push("due_date");
                values.push(due_date);
            }
            if let Some(status) = &changes.status {
                columns.push("status");
                values.push(status);
            }

            let assignments: Vec<String> = columns.iter().enumerate().map(|(i, column)| format!("{} = ?{}", column, i + 1)).collect();
            values.push(&position);
            let sql = format!("UPDATE todos SET {} WHERE position = ?{}", assignments.join(", "), values.len());

            Ok(conn.execute(&sql, params_from_iter(values))? > 0)
        });

        let updated = self.degrade("update", updated, false);
        if updated {
            debug!(position, ?changes, "todo updated");
        }
        Ok(updated)
    }

    /// Marks the todo at `position` completed and stamps `date_completed`.
    pub fn complete(&self, position: u32) -> bool {
        let completed = Db::scoped(&self.path, |conn| {
            Ok(conn.execute(COMPLETE_TODO, params![TodoStatus::Completed, now_timestamp(), position])? > 0)
        });
        self.degrade("complete", completed, false)
    }

    /// Marks the todo at `position` in progress; `date_completed` is kept.
    pub fn mark_in_progress(&self, position: u32) -> bool {
        let marked = Db::scoped(&self.path, |conn| Ok(conn.execute(PROGRESS_TODO, params![TodoStatus::InProgress, position])? > 0));
        self.degrade("mark_in_progress", marked, false)
    }

    /// Whether the database can be opened and queried.
    pub fn test_connection(&self) -> bool {
        let ping = Db::scoped(&self.path, |conn| Ok(conn.query_row(PING, [], |row| row.get::<_, i64>(0))?));
        self.degrade("test_connection", ping.map(|_| true), false)
    }

    fn degrade<T>(&self, operation: &'static str, result: Result<T>, fallback: T) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                warn!(operation, path = %self.path.display(), error = %err, "todo store operation failed");
                fallback
            }
        }
    }
}
