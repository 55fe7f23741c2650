//! `update` subcommand. Named `edit` to keep it apart from the store's
//! `update` operation it calls.

use super::{show, PositionArgs};
use crate::{
    db::todos::Todos,
    libs::{
        messages::Message,
        todo::{Priority, TodoChanges, TodoStatus},
    },
    msg_error, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    target: PositionArgs,
    /// New task description
    #[arg(long)]
    task: Option<String>,
    /// New category
    #[arg(long)]
    category: Option<String>,
    /// New priority level (1=High, 2=Medium, 3=Low)
    #[arg(long)]
    priority: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(long = "due")]
    due_date: Option<String>,
    /// New status (todo/in-progress/done)
    #[arg(long)]
    status: Option<String>,
}

impl UpdateArgs {
    fn changes(&self) -> crate::libs::error::Result<TodoChanges> {
        Ok(TodoChanges {
            task: self.task.clone(),
            category: self.category.clone(),
            priority: self.priority.as_deref().map(str::parse::<Priority>).transpose()?,
            due_date: self.due_date.clone(),
            status: self.status.as_deref().map(str::parse::<TodoStatus>).transpose()?,
        })
    }
}

pub fn cmd(args: UpdateArgs) -> Result<()> {
    let changes = match args.changes() {
        Ok(changes) => changes,
        Err(err) => {
            msg_error!(Message::ValidationFailed(err.to_string()));
            return Ok(());
        }
    };
    if changes.is_empty() {
        msg_warning!(Message::NoChangesDetected);
        return Ok(());
    }

    let todos = Todos::new()?;
    match todos.update(args.target.store_position(), &changes) {
        Ok(true) => {
            msg_success!(Message::TaskUpdated);
            show::render(&todos.get_all(), Message::TasksHeader);
        }
        Ok(false) => msg_error!(Message::TaskNotFound(args.target.position)),
        Err(err) => msg_error!(Message::ValidationFailed(err.to_string())),
    }
    Ok(())
}
