#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::db::todos::{TodoFilter, Todos};
    use tudu::libs::error::TodoError;
    use tudu::libs::todo::{Priority, Todo, TodoChanges, TodoStatus};

    struct StoreTestContext {
        temp_dir: TempDir,
        todos: Todos,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let todos = Todos::open(temp_dir.path().join("todos.db")).unwrap();
            StoreTestContext { temp_dir, todos }
        }
    }

    impl StoreTestContext {
        fn add(&self, task: &str, category: &str, priority: u8) -> Todo {
            let mut todo = Todo::builder(task, category).priority(priority).build().unwrap();
            assert!(self.todos.insert(&mut todo).unwrap());
            todo
        }

        fn raw(&self) -> Connection {
            Connection::open(self.todos.path()).unwrap()
        }

        fn tasks(&self) -> Vec<String> {
            self.todos.get_all().into_iter().map(|todo| todo.task).collect()
        }
    }

    fn assert_contiguous(todos: &Todos) {
        let positions: Vec<u32> = todos.get_all().iter().map(|todo| todo.position.unwrap()).collect();
        let expected: Vec<u32> = (0..positions.len() as u32).collect();
        assert_eq!(positions, expected);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_appends_at_end(ctx: &mut StoreTestContext) {
        let first = ctx.add("Draft proposal", "Work", 1);
        let second = ctx.add("Buy milk", "Home", 3);

        assert_eq!(first.position, Some(0));
        assert_eq!(second.position, Some(1));
        assert!(first.id.is_some());
        assert_ne!(first.id, second.id);
        assert_eq!(ctx.todos.count(), 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_then_get_round_trip(ctx: &mut StoreTestContext) {
        let mut todo = Todo::builder("Study Linear Algebra", "Mathematics")
            .priority(Priority::Medium)
            .due_date("2030-05-01")
            .status(TodoStatus::InProgress)
            .build()
            .unwrap();
        assert!(ctx.todos.insert(&mut todo).unwrap());

        let stored = ctx.todos.get(todo.position.unwrap()).unwrap();
        assert_eq!(stored, todo);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_rejects_empty_task(ctx: &mut StoreTestContext) {
        let mut todo = Todo::new("Placeholder", "Misc").unwrap();
        todo.task = "   ".to_string();

        let result = ctx.todos.insert(&mut todo);
        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert_eq!(todo.position, None);
        assert_eq!(ctx.todos.count(), 0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_initialize_is_idempotent(ctx: &mut StoreTestContext) {
        let schema_objects = |conn: &Connection| -> i64 {
            conn.query_row("SELECT COUNT(*) FROM sqlite_master WHERE tbl_name = 'todos'", [], |row| row.get(0)).unwrap()
        };
        let before = schema_objects(&ctx.raw());

        ctx.todos.initialize().unwrap();
        ctx.todos.initialize().unwrap();

        assert_eq!(before, 4); // table plus three indexes
        assert_eq!(schema_objects(&ctx.raw()), before);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_positions_stay_contiguous(ctx: &mut StoreTestContext) {
        for i in 1..=6 {
            ctx.add(&format!("Task {}", i), "Work", 3);
            assert_contiguous(&ctx.todos);
        }

        for position in [2, 0, 3] {
            assert!(ctx.todos.delete(position));
            assert_contiguous(&ctx.todos);
        }
        assert_eq!(ctx.tasks(), vec!["Task 2", "Task 4", "Task 5"]);

        ctx.add("Task 7", "Home", 2);
        assert_contiguous(&ctx.todos);
        assert!(ctx.todos.delete(1));
        assert_contiguous(&ctx.todos);
        assert_eq!(ctx.tasks(), vec!["Task 2", "Task 5", "Task 7"]);

        assert!(!ctx.todos.delete(99));
        assert_contiguous(&ctx.todos);
        assert_eq!(ctx.todos.count(), 3);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_rolls_back_on_reindex_fault(ctx: &mut StoreTestContext) {
        ctx.add("a", "Misc", 3);
        ctx.add("b", "Misc", 3);
        ctx.add("c", "Misc", 3);
        ctx.raw()
            .execute_batch(
                "CREATE TRIGGER fail_reindex BEFORE UPDATE OF position ON todos
                 WHEN NEW.position = 1
                 BEGIN SELECT RAISE(ABORT, 'reindex rejected'); END;",
            )
            .unwrap();

        assert!(!ctx.todos.delete(0));
        assert_eq!(ctx.todos.count(), 3);
        assert_contiguous(&ctx.todos);
        assert_eq!(ctx.tasks(), vec!["a", "b", "c"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_get_all_orders_by_position(ctx: &mut StoreTestContext) {
        ctx.add("A", "Work", 3);
        ctx.add("B", "Work", 3);
        ctx.add("C", "Work", 3);

        let conn = ctx.raw();
        conn.execute("UPDATE todos SET position = 2 WHERE task = 'A'", []).unwrap();
        conn.execute("UPDATE todos SET position = 0 WHERE task = 'C'", []).unwrap();
        drop(conn);

        assert_eq!(ctx.tasks(), vec!["C", "B", "A"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_complete_then_progress_keeps_completion_date(ctx: &mut StoreTestContext) {
        ctx.add("Write report", "Work", 2);

        assert!(ctx.todos.complete(0));
        let completed = ctx.todos.get(0).unwrap();
        assert_eq!(completed.status, TodoStatus::Completed);
        assert!(completed.is_completed());
        assert!(completed.date_completed.is_some());

        assert!(ctx.todos.mark_in_progress(0));
        let in_progress = ctx.todos.get(0).unwrap();
        assert_eq!(in_progress.status, TodoStatus::InProgress);
        assert!(!in_progress.is_completed());
        assert_eq!(in_progress.date_completed, completed.date_completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_and_complete_scenario(ctx: &mut StoreTestContext) {
        ctx.add("Draft proposal", "Work", 1);
        ctx.add("Buy milk", "Home", 3);

        let all = ctx.todos.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!((all[0].task.as_str(), all[0].position), ("Draft proposal", Some(0)));
        assert_eq!((all[1].task.as_str(), all[1].position), ("Buy milk", Some(1)));

        assert!(ctx.todos.delete(0));
        let all = ctx.todos.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!((all[0].task.as_str(), all[0].position), ("Buy milk", Some(0)));

        assert!(ctx.todos.complete(0));
        let todo = ctx.todos.get(0).unwrap();
        assert_eq!(todo.status, TodoStatus::Completed);
        assert!(todo.date_completed.is_some());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_partial_update(ctx: &mut StoreTestContext) {
        ctx.add("Buy milk", "Home", 3);

        let changes = TodoChanges::default().category("Errands");
        assert!(ctx.todos.update(0, &changes).unwrap());

        let todo = ctx.todos.get(0).unwrap();
        assert_eq!(todo.category, "Errands");
        assert_eq!(todo.task, "Buy milk");
        assert_eq!(todo.priority, Priority::Low);
        assert_eq!(todo.due_date, None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_every_field(ctx: &mut StoreTestContext) {
        ctx.add("Old task", "Old", 3);

        let changes = TodoChanges::default()
            .task("New task")
            .category("New")
            .priority(Priority::High)
            .due_date("2031-01-31")
            .status(TodoStatus::InProgress);
        assert!(ctx.todos.update(0, &changes).unwrap());

        let todo = ctx.todos.get(0).unwrap();
        assert_eq!(todo.task, "New task");
        assert_eq!(todo.category, "New");
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.due_date.as_deref(), Some("2031-01-31"));
        assert_eq!(todo.status, TodoStatus::InProgress);
        assert_eq!(todo.position, Some(0));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_without_changes_is_noop(ctx: &mut StoreTestContext) {
        let before = ctx.add("Buy milk", "Home", 3);

        assert!(!ctx.todos.update(0, &TodoChanges::default()).unwrap());
        assert_eq!(ctx.todos.get(0).unwrap(), before);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_rejects_empty_task(ctx: &mut StoreTestContext) {
        ctx.add("Buy milk", "Home", 3);

        let result = ctx.todos.update(0, &TodoChanges::default().task(" "));
        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert_eq!(ctx.todos.get(0).unwrap().task, "Buy milk");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_position_reports_false(ctx: &mut StoreTestContext) {
        ctx.add("Only task", "Misc", 3);

        assert!(ctx.todos.get(5).is_none());
        assert!(!ctx.todos.update(5, &TodoChanges::default().category("X")).unwrap());
        assert!(!ctx.todos.complete(5));
        assert!(!ctx.todos.mark_in_progress(5));
        assert!(!ctx.todos.delete(5));
        assert_eq!(ctx.todos.get(0).unwrap().category, "Misc");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_filter_by_priority(ctx: &mut StoreTestContext) {
        ctx.add("First high", "Work", 1);
        ctx.add("Medium", "Work", 2);
        ctx.add("Second high", "Home", 1);

        let high = ctx.todos.get_by_priority(Priority::High);
        let tasks: Vec<&str> = high.iter().map(|todo| todo.task.as_str()).collect();
        assert_eq!(tasks, vec!["First high", "Second high"]);
        assert_eq!(high[0].position, Some(0));
        assert_eq!(high[1].position, Some(2));
        assert!(ctx.todos.get_by_priority(Priority::Low).is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_filter_by_status_and_category(ctx: &mut StoreTestContext) {
        ctx.add("Draft proposal", "Work", 1);
        ctx.add("Buy milk", "Home", 3);
        ctx.add("Review PR", "Work", 2);
        ctx.todos.complete(2);
        ctx.todos.mark_in_progress(1);

        let done = ctx.todos.get_by_status(TodoStatus::Completed);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].task, "Review PR");
        assert_eq!(ctx.todos.get_by_status(TodoStatus::InProgress)[0].task, "Buy milk");
        assert_eq!(ctx.todos.get_by_status(TodoStatus::Todo)[0].task, "Draft proposal");

        let work: Vec<String> = ctx.todos.get_by_category("Work").into_iter().map(|todo| todo.task).collect();
        assert_eq!(work, vec!["Draft proposal", "Review PR"]);
        assert!(ctx.todos.get_by_category("work").is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_unknown_status_code_fails_read(ctx: &mut StoreTestContext) {
        ctx.add("Valid", "Misc", 3);

        let conn = ctx.raw();
        conn.execute_batch("PRAGMA ignore_check_constraints = ON;").unwrap();
        conn.execute(
            "INSERT INTO todos (task, category, date_added, status, position, priority) VALUES ('Broken', 'Misc', '2024-01-01', 7, 1, 1)",
            [],
        )
        .unwrap();
        drop(conn);

        assert!(ctx.todos.fetch(&TodoFilter::All).is_err());
        assert!(ctx.todos.get_all().is_empty());
        assert!(ctx.todos.get(1).is_none());
        assert_eq!(ctx.todos.get(0).unwrap().task, "Valid");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_storage_faults_degrade(ctx: &mut StoreTestContext) {
        ctx.add("Doomed", "Misc", 3);
        ctx.raw().execute_batch("DROP TABLE todos;").unwrap();

        let mut todo = Todo::new("Another", "Misc").unwrap();
        assert!(!ctx.todos.insert(&mut todo).unwrap());
        assert_eq!(todo.position, None);
        assert!(ctx.todos.get_all().is_empty());
        assert!(ctx.todos.get(0).is_none());
        assert_eq!(ctx.todos.count(), 0);
        assert!(!ctx.todos.delete(0));
        assert!(!ctx.todos.complete(0));
        assert!(!ctx.todos.mark_in_progress(0));
        assert!(!ctx.todos.update(0, &TodoChanges::default().category("X")).unwrap());

        // The connection itself is still fine.
        assert!(ctx.todos.test_connection());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_connection_check(ctx: &mut StoreTestContext) {
        assert!(ctx.todos.test_connection());

        let nested = ctx.temp_dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        let todos = Todos::open(nested.join("todos.db")).unwrap();
        std::fs::remove_dir_all(&nested).unwrap();

        assert!(!todos.test_connection());
        assert!(Todos::open(nested.join("todos.db")).is_err());
    }
}
