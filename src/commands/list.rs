use super::show;
use crate::{
    db::todos::Todos,
    libs::{
        messages::Message,
        todo::{Priority, TodoStatus},
    },
    msg_error,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Status filter (todo/in-progress/done)
    status: String,
}

#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Category to list
    category: String,
}

#[derive(Debug, Args)]
pub struct PriorityArgs {
    /// Priority level: 1=High, 2=Medium, 3=Low
    priority: String,
}

pub fn by_status(args: StatusArgs) -> Result<()> {
    let status = match args.status.parse::<TodoStatus>() {
        Ok(status) => status,
        Err(err) => {
            msg_error!(Message::ValidationFailed(err.to_string()));
            return Ok(());
        }
    };

    let todos = Todos::new()?.get_by_status(status);
    show::render(&todos, Message::TasksByStatusHeader(status.filter_name().to_string()));
    Ok(())
}

pub fn by_category(args: CategoryArgs) -> Result<()> {
    let todos = Todos::new()?.get_by_category(&args.category);
    show::render(&todos, Message::TasksByCategoryHeader(args.category));
    Ok(())
}

pub fn by_priority(args: PriorityArgs) -> Result<()> {
    let Ok(priority) = args.priority.parse::<Priority>() else {
        msg_error!(Message::InvalidPriority(args.priority));
        return Ok(());
    };

    let todos = Todos::new()?.get_by_priority(priority);
    show::render(&todos, Message::TasksByPriorityHeader(priority.to_string()));
    Ok(())
}
