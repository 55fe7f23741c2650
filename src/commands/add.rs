use super::show;
use crate::{
    db::todos::Todos,
    libs::{messages::Message, todo::Todo},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    task: String,
    /// Task category
    category: String,
    /// Priority: 1=High, 2=Medium, 3=Low
    #[arg(short, long, default_value = "3")]
    priority: String,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long = "due")]
    due_date: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut builder = Todo::builder(args.task, args.category).priority(args.priority);
    if let Some(due_date) = args.due_date {
        builder = builder.due_date(due_date);
    }
    let mut todo = match builder.build() {
        Ok(todo) => todo,
        Err(err) => {
            msg_error!(Message::ValidationFailed(err.to_string()));
            return Ok(());
        }
    };

    msg_info!(Message::TaskAdding);
    let todos = Todos::new()?;
    match todos.insert(&mut todo) {
        Ok(true) => {
            msg_success!(Message::TaskCreated);
            show::render(&todos.get_all(), Message::TasksHeader);
        }
        Ok(false) => msg_error!(Message::TaskCreateFailed),
        Err(err) => msg_error!(Message::ValidationFailed(err.to_string())),
    }
    Ok(())
}
