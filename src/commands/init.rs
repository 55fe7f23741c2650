//! Configures where todos are stored and creates the schema there.

use crate::{
    db::todos::Todos,
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Use this database file without prompting
    #[arg(long)]
    db_path: Option<PathBuf>,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = match init_args.db_path {
        Some(db_path) => Config { db_path: Some(db_path) },
        None => Config::init()?,
    };
    config.save()?;
    msg_success!(Message::ConfigSaved);

    let path = config.db_path()?;
    if let Err(err) = Todos::open(&path) {
        msg_bail_anyhow!(Message::DbOpenFailed(err.to_string()));
    }
    msg_info!(Message::ConfigDbPath(path.display().to_string()));
    Ok(())
}
