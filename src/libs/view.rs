use super::stats::TodoStats;
use super::todo::{Priority, Todo};
use prettytable::{format, row, Cell, Row, Table};

const NO_DUE_DATE: &str = "No due date";

pub struct View {}

impl View {
    /// Renders todos with 1-based numbering, matching the positions users type.
    pub fn todos(todos: &[Todo]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row![bFb => "#", "Task", "Category", "Priority", "Status", "Due Date"]);

        for (index, todo) in todos.iter().enumerate() {
            let due_date = todo.due_date.as_deref().unwrap_or(NO_DUE_DATE);
            let due_style = if todo.is_overdue() { "Fr" } else { "" };

            table.add_row(Row::new(vec![
                Cell::new(&(index + 1).to_string()),
                Cell::new(&todo.task),
                Cell::new(&todo.category).style_spec("Fc"),
                Cell::new(&todo.priority.to_string()).style_spec(Self::priority_style(todo.priority)),
                Cell::new(&format!("{} {}", todo.status.icon(), todo.status)),
                Cell::new(due_date).style_spec(due_style),
            ]));
        }

        table
    }

    pub fn stats(stats: &TodoStats) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(row!["Total Tasks", r->stats.total]);
        table.add_row(row!["Completed", r->stats.completed]);
        table.add_row(row!["In Progress", r->stats.in_progress]);
        table.add_row(row!["Todo", r->stats.todo]);
        table.add_row(row![Fr->"Overdue", Frr->stats.overdue]);
        table.add_row(row![b->"Completion", br->format!("{:.0}%", stats.completion_rate())]);

        table
    }

    fn priority_style(priority: Priority) -> &'static str {
        match priority {
            Priority::High => "Fr",
            Priority::Medium => "Fy",
            Priority::Low => "Fg",
        }
    }
}
