//! Command-line interface: one module per subcommand.
//!
//! Users address todos by 1-based position as shown in the tables; every
//! handler converts to the store's 0-based positions through
//! [`PositionArgs::store_position`].

pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod progress;
pub mod show;
pub mod stats;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

/// Position argument shared by the commands that target one todo.
#[derive(Debug, Args)]
pub struct PositionArgs {
    /// Position of the task as shown by `show` (starting at 1)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub position: u32,
}

impl PositionArgs {
    pub fn store_position(&self) -> u32 {
        self.position.saturating_sub(1)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new todo item")]
    Add(add::AddArgs),
    #[command(about = "Delete a todo item by position")]
    Delete(delete::DeleteArgs),
    #[command(about = "Update a todo item's details")]
    Update(edit::UpdateArgs),
    #[command(about = "Mark a todo item as complete")]
    Complete(PositionArgs),
    #[command(about = "Mark a todo item as in progress")]
    Progress(PositionArgs),
    #[command(about = "List todos filtered by status (todo/in-progress/done)")]
    ListByStatus(list::StatusArgs),
    #[command(about = "List todos filtered by category")]
    ListByCategory(list::CategoryArgs),
    #[command(about = "List todos filtered by priority level (1/2/3)")]
    ListByPriority(list::PriorityArgs),
    #[command(about = "Display all todo items")]
    Show(show::ShowArgs),
    #[command(about = "Show todo statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Test database connection")]
    Test,
    #[command(about = "Configure the database location and create the schema")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Update(args) => edit::cmd(args),
            Commands::Complete(args) => complete::cmd(args),
            Commands::Progress(args) => progress::cmd(args),
            Commands::ListByStatus(args) => list::by_status(args),
            Commands::ListByCategory(args) => list::by_category(args),
            Commands::ListByPriority(args) => list::by_priority(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Test => test::cmd(),
            Commands::Init(args) => init::cmd(args),
        }
    }
}
