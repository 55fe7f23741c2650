//! In-memory task record and the field rules that keep it valid.
//!
//! A [`Todo`] is always constructed through [`Todo::new`] or
//! [`Todo::builder`], both of which reject empty task text and out-of-range
//! priorities. Status and priority are closed enums with explicit integer
//! codes (1/2/3) that match the persisted schema.
//!
//! ## Usage
//!
//! ```rust
//! use tudu::libs::todo::{Priority, Todo};
//!
//! let mut todo = Todo::builder("Draft proposal", "Work").priority(1).build()?;
//! assert_eq!(todo.priority, Priority::High);
//!
//! todo.mark_completed();
//! assert!(todo.is_completed());
//! # Ok::<(), tudu::libs::error::TodoError>(())
//! ```

use super::error::{Result, TodoError};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format of every timestamp the application writes (`date_added`,
/// `date_completed`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Formats accepted when reading a due date for the overdue check.
const DUE_DATETIME_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

const PRIORITY_RANGE_ERROR: &str = "Priority must be 1 (High), 2 (Medium), or 3 (Low)";
const PRIORITY_TYPE_ERROR: &str = "Priority must be an integer, string (digit), or priority level";
const EMPTY_TASK_ERROR: &str = "Task cannot be empty";

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a due date as either a full datetime or a plain date (midnight).
///
/// Returns `None` for anything else; due dates are stored unvalidated.
pub fn parse_due_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DUE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| NaiveDate::parse_from_str(value, DUE_DATE_FORMAT).ok().and_then(|date| date.and_hms_opt(0, 0, 0)))
}

fn validate_task(task: &str) -> Result<()> {
    if task.trim().is_empty() {
        return Err(TodoError::validation(EMPTY_TASK_ERROR));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TodoStatus {
    Todo,
    InProgress,
    Completed,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 3] = [TodoStatus::Todo, TodoStatus::InProgress, TodoStatus::Completed];

    /// Persisted code of the status.
    pub fn as_code(self) -> u8 {
        match self {
            TodoStatus::Todo => 1,
            TodoStatus::InProgress => 2,
            TodoStatus::Completed => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(TodoStatus::Todo),
            2 => Some(TodoStatus::InProgress),
            3 => Some(TodoStatus::Completed),
            _ => None,
        }
    }

    /// Name used on the command line to filter by this status.
    pub fn filter_name(self) -> &'static str {
        match self {
            TodoStatus::Todo => "todo",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Completed => "done",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TodoStatus::Todo => "⏳",
            TodoStatus::InProgress => "🔄",
            TodoStatus::Completed => "✅",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TodoStatus::Todo => "Todo",
            TodoStatus::InProgress => "In Progress",
            TodoStatus::Completed => "Completed",
        })
    }
}

impl FromStr for TodoStatus {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        TodoStatus::ALL.into_iter().find(|status| status.filter_name() == name).ok_or_else(|| {
            let names: Vec<&str> = TodoStatus::ALL.iter().map(|status| status.filter_name()).collect();
            TodoError::validation(format!("Invalid status '{}'. Use: {}", s, names.join(", ")))
        })
    }
}

impl From<TodoStatus> for u8 {
    fn from(status: TodoStatus) -> Self {
        status.as_code()
    }
}

impl TryFrom<u8> for TodoStatus {
    type Error = TodoError;

    fn try_from(code: u8) -> Result<Self> {
        TodoStatus::from_code(i64::from(code)).ok_or_else(|| TodoError::validation(format!("Invalid status code: {}", code)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Persisted code of the priority; lower is more urgent.
    pub fn as_code(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Priority::High),
            2 => Some(Priority::Medium),
            3 => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        })
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        PriorityInput::from(s).resolve()
    }
}

impl TryFrom<i64> for Priority {
    type Error = TodoError;

    fn try_from(code: i64) -> Result<Self> {
        Priority::from_code(code).ok_or_else(|| TodoError::validation(PRIORITY_RANGE_ERROR))
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.as_code()
    }
}

impl TryFrom<u8> for Priority {
    type Error = TodoError;

    fn try_from(code: u8) -> Result<Self> {
        Priority::try_from(i64::from(code))
    }
}

/// Any of the forms a priority may be supplied in before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorityInput {
    Level(Priority),
    Code(i64),
    Text(String),
}

impl PriorityInput {
    /// Normalizes the input into a [`Priority`].
    ///
    /// Integers and digit strings must be 1, 2 or 3. Text that is not made
    /// of digits is rejected as the wrong kind of value.
    pub fn resolve(self) -> Result<Priority> {
        match self {
            PriorityInput::Level(priority) => Ok(priority),
            PriorityInput::Code(code) => Priority::try_from(code),
            PriorityInput::Text(text) => {
                let digits = text.trim();
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(TodoError::validation(PRIORITY_TYPE_ERROR));
                }
                // Digit strings too long for i64 are out of range as well.
                let code = digits.parse::<i64>().map_err(|_| TodoError::validation(PRIORITY_RANGE_ERROR))?;
                Priority::try_from(code)
            }
        }
    }
}

impl From<Priority> for PriorityInput {
    fn from(priority: Priority) -> Self {
        PriorityInput::Level(priority)
    }
}

impl From<i64> for PriorityInput {
    fn from(code: i64) -> Self {
        PriorityInput::Code(code)
    }
}

impl From<i32> for PriorityInput {
    fn from(code: i32) -> Self {
        PriorityInput::Code(i64::from(code))
    }
}

impl From<u8> for PriorityInput {
    fn from(code: u8) -> Self {
        PriorityInput::Code(i64::from(code))
    }
}

impl From<&str> for PriorityInput {
    fn from(text: &str) -> Self {
        PriorityInput::Text(text.to_string())
    }
}

impl From<String> for PriorityInput {
    fn from(text: String) -> Self {
        PriorityInput::Text(text)
    }
}

/// A single todo item.
///
/// Serializes through [`TodoRecord`], so status and priority travel as their
/// integer codes and deserialization re-runs every construction rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TodoRecord", try_from = "TodoRecord")]
pub struct Todo {
    /// Row id assigned by the store. Never shown to users.
    pub id: Option<i64>,
    pub task: String,
    pub category: String,
    pub date_added: String,
    pub date_completed: Option<String>,
    pub status: TodoStatus,
    /// Zero-based rank; `None` until the record is inserted.
    pub position: Option<u32>,
    pub due_date: Option<String>,
    pub priority: Priority,
}

impl Todo {
    /// Creates a todo with default status, priority and creation time.
    pub fn new(task: &str, category: &str) -> Result<Self> {
        Todo::builder(task, category).build()
    }

    pub fn builder(task: impl Into<String>, category: impl Into<String>) -> TodoBuilder {
        TodoBuilder {
            id: None,
            task: task.into(),
            category: category.into(),
            date_added: None,
            date_completed: None,
            status: None,
            position: None,
            due_date: None,
            priority: None,
        }
    }

    /// Re-checks the rules that public field access could have broken.
    pub fn validate(&self) -> Result<()> {
        validate_task(&self.task)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }

    /// True when the due date lies strictly in the past and the todo is not
    /// completed. Unparseable due dates are never overdue.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Local::now().naive_local())
    }

    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        if self.is_completed() {
            return false;
        }
        match self.due_date.as_deref().and_then(parse_due_date) {
            Some(due) => due < now,
            None => false,
        }
    }

    pub fn mark_completed(&mut self) {
        self.status = TodoStatus::Completed;
        self.date_completed = Some(now_timestamp());
    }

    /// Leaves `date_completed` as it was.
    pub fn mark_in_progress(&mut self) {
        self.status = TodoStatus::InProgress;
    }

    pub fn update_priority(&mut self, priority: impl Into<PriorityInput>) -> Result<()> {
        self.priority = priority.into().resolve()?;
        Ok(())
    }

    pub fn to_record(&self) -> TodoRecord {
        TodoRecord::from(self.clone())
    }

    pub fn from_record(record: TodoRecord) -> Result<Self> {
        Todo::try_from(record)
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {} - Priority: {}", self.task, self.category, self.status, self.priority)
    }
}

/// Step-by-step construction of a [`Todo`] with optional fields.
#[derive(Debug, Clone)]
pub struct TodoBuilder {
    id: Option<i64>,
    task: String,
    category: String,
    date_added: Option<String>,
    date_completed: Option<String>,
    status: Option<TodoStatus>,
    position: Option<u32>,
    due_date: Option<String>,
    priority: Option<PriorityInput>,
}

impl TodoBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn date_added(mut self, date_added: impl Into<String>) -> Self {
        self.date_added = Some(date_added.into());
        self
    }

    pub fn date_completed(mut self, date_completed: impl Into<String>) -> Self {
        self.date_completed = Some(date_completed.into());
        self
    }

    pub fn status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn priority(mut self, priority: impl Into<PriorityInput>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn build(self) -> Result<Todo> {
        validate_task(&self.task)?;
        let priority = match self.priority {
            Some(input) => input.resolve()?,
            None => Priority::default(),
        };
        let date_added = self.date_added.filter(|date| !date.is_empty()).unwrap_or_else(now_timestamp);

        Ok(Todo {
            id: self.id,
            task: self.task,
            category: self.category,
            date_added,
            date_completed: self.date_completed,
            status: self.status.unwrap_or(TodoStatus::Todo),
            position: self.position,
            due_date: self.due_date,
            priority,
        })
    }
}

/// Plain key/value form of a [`Todo`] with enums as integer codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub task: String,
    pub category: String,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub date_completed: Option<String>,
    #[serde(default)]
    pub status: Option<u8>,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Option<u8>,
}

impl From<Todo> for TodoRecord {
    fn from(todo: Todo) -> Self {
        TodoRecord {
            id: todo.id,
            task: todo.task,
            category: todo.category,
            date_added: Some(todo.date_added),
            date_completed: todo.date_completed,
            status: Some(todo.status.as_code()),
            position: todo.position,
            due_date: todo.due_date,
            priority: Some(todo.priority.as_code()),
        }
    }
}

impl TryFrom<TodoRecord> for Todo {
    type Error = TodoError;

    fn try_from(record: TodoRecord) -> Result<Self> {
        let mut builder = Todo::builder(record.task, record.category);
        if let Some(id) = record.id {
            builder = builder.id(id);
        }
        if let Some(date_added) = record.date_added {
            builder = builder.date_added(date_added);
        }
        if let Some(date_completed) = record.date_completed {
            builder = builder.date_completed(date_completed);
        }
        if let Some(code) = record.status {
            builder = builder.status(TodoStatus::try_from(code)?);
        }
        if let Some(position) = record.position {
            builder = builder.position(position);
        }
        if let Some(due_date) = record.due_date {
            builder = builder.due_date(due_date);
        }
        if let Some(code) = record.priority {
            builder = builder.priority(code);
        }
        builder.build()
    }
}

/// Partial update applied by the store; `None` fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub task: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
    pub status: Option<TodoStatus>,
}

impl TodoChanges {
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.category.is_none() && self.priority.is_none() && self.due_date.is_none() && self.status.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        match &self.task {
            Some(task) => validate_task(task),
            None => Ok(()),
        }
    }

    pub fn task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }
}
