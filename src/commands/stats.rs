use crate::{
    db::todos::Todos,
    libs::{messages::Message, stats::TodoStats, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Print the statistics as a JSON object instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let todos = Todos::new()?.get_all();
    let stats = TodoStats::collect(&todos);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    msg_print!(Message::StatsHeader, true);
    View::stats(&stats).printstd();
    Ok(())
}
