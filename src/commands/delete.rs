use super::{show, PositionArgs};
use crate::{db::todos::Todos, libs::messages::Message, msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    target: PositionArgs,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let todos = Todos::new()?;
    let position = args.target.store_position();

    let Some(todo) = todos.get(position) else {
        msg_error!(Message::TaskNotFound(args.target.position));
        return Ok(());
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(args.target.position, todo.task).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if todos.delete(position) {
        msg_success!(Message::TaskDeleted);
        show::render(&todos.get_all(), Message::TasksHeader);
    } else {
        msg_error!(Message::TaskDeleteFailed(args.target.position));
    }
    Ok(())
}
