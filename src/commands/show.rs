use crate::{
    db::todos::Todos,
    libs::{messages::Message, todo::Todo, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Print the todos as a JSON array instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let todos = Todos::new()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&todos.get_all())?);
        return Ok(());
    }

    msg_info!(Message::FetchingTasks);
    let all = todos.get_all();
    msg_info!(Message::TasksFound(all.len()));
    render(&all, Message::TasksHeader);
    Ok(())
}

/// Prints `todos` under `title`, or a notice when there are none.
pub fn render(todos: &[Todo], title: Message) {
    if todos.is_empty() {
        msg_warning!(Message::NoTasksFound);
        return;
    }

    msg_print!(title, true);
    View::todos(todos).printstd();
}
