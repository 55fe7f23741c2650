/// Every message the command line shows to the user.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdding,
    TaskCreated,
    TaskCreateFailed,
    TaskDeleted,
    TaskDeleteFailed(u32), // user-facing position
    TaskNotFound(u32),     // user-facing position
    TaskUpdated,
    TaskCompleted,
    TaskMarkedInProgress,
    ConfirmDeleteTask(u32, String), // position, task text
    NoChangesDetected,

    // === LISTING MESSAGES ===
    FetchingTasks,
    TasksFound(usize),
    NoTasksFound,
    TasksHeader,
    TasksByStatusHeader(String),
    TasksByCategoryHeader(String),
    TasksByPriorityHeader(String),
    StatsHeader,

    // === VALIDATION MESSAGES ===
    ValidationFailed(String),
    InvalidPriority(String),

    // === DATABASE MESSAGES ===
    DbConnectionSuccessful,
    DbConnectionFailed,
    DbOpenFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDbPath(String),
    PromptDbPath,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
