//! Aggregate counts over a list of todos, shown by the `stats` command.

use super::todo::{Todo, TodoStatus};
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub todo: usize,
    pub overdue: usize,
}

impl TodoStats {
    pub fn collect(todos: &[Todo]) -> Self {
        Self::collect_at(todos, chrono::Local::now().naive_local())
    }

    /// Same as [`TodoStats::collect`] with an explicit clock for the overdue count.
    pub fn collect_at(todos: &[Todo], now: NaiveDateTime) -> Self {
        todos.iter().fold(TodoStats::default(), |mut stats, todo| {
            stats.total += 1;
            match todo.status {
                TodoStatus::Todo => stats.todo += 1,
                TodoStatus::InProgress => stats.in_progress += 1,
                TodoStatus::Completed => stats.completed += 1,
            }
            if todo.is_overdue_at(now) {
                stats.overdue += 1;
            }
            stats
        })
    }

    /// Share of completed todos in percent, 0 for an empty list.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 * 100.0 / self.total as f64
    }
}
