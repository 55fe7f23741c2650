use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdding => "Adding new task...".to_string(),
            Message::TaskCreated => "Task added successfully!".to_string(),
            Message::TaskCreateFailed => "Failed to add task".to_string(),
            Message::TaskDeleted => "Task deleted successfully!".to_string(),
            Message::TaskDeleteFailed(position) => format!("Could not delete task {}", position),
            Message::TaskNotFound(position) => format!("Task {} not found", position),
            Message::TaskUpdated => "Task updated successfully!".to_string(),
            Message::TaskCompleted => "Task marked as complete!".to_string(),
            Message::TaskMarkedInProgress => "Task marked as in progress!".to_string(),
            Message::ConfirmDeleteTask(position, task) => format!("Are you sure you want to delete task {} ({})?", position, task),
            Message::NoChangesDetected => "No changes supplied. Use --task, --category, --priority, --due or --status.".to_string(),

            // === LISTING MESSAGES ===
            Message::FetchingTasks => "Fetching tasks...".to_string(),
            Message::TasksFound(count) => format!("Found {} tasks", count),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TasksHeader => "Todos".to_string(),
            Message::TasksByStatusHeader(status) => format!("Tasks - {}", status.to_uppercase()),
            Message::TasksByCategoryHeader(category) => format!("Tasks in category: {}", category),
            Message::TasksByPriorityHeader(priority) => format!("Tasks with {} priority", priority),
            Message::StatsHeader => "Todo Statistics".to_string(),

            // === VALIDATION MESSAGES ===
            Message::ValidationFailed(reason) => format!("Error: {}", reason),
            Message::InvalidPriority(value) => format!("Invalid priority level '{}'. Use 1 (High), 2 (Medium), or 3 (Low)", value),

            // === DATABASE MESSAGES ===
            Message::DbConnectionSuccessful => "Database connection successful!".to_string(),
            Message::DbConnectionFailed => "Database connection failed!".to_string(),
            Message::DbOpenFailed(error) => format!("Failed to open the todo database: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDbPath(path) => format!("Todos are stored in {}", path),
            Message::PromptDbPath => "Enter the path of the todo database".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),
        };
        write!(f, "{}", text)
    }
}
