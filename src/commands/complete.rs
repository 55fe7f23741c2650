use super::{show, PositionArgs};
use crate::{db::todos::Todos, libs::messages::Message, msg_error, msg_success};
use anyhow::Result;

pub fn cmd(args: PositionArgs) -> Result<()> {
    let todos = Todos::new()?;
    if todos.complete(args.store_position()) {
        msg_success!(Message::TaskCompleted);
        show::render(&todos.get_all(), Message::TasksHeader);
    } else {
        msg_error!(Message::TaskNotFound(args.position));
    }
    Ok(())
}
