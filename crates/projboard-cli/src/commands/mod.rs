//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::DEFAULT_URL;

pub mod project;
pub mod serve;

/// Project Board - drag projects between active and finished
#[derive(Parser)]
#[command(name = "projboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// URL of a running board server
    #[arg(long, global = true, env = "PROJBOARD_URL", default_value = DEFAULT_URL)]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the board web server
    Serve(serve::ServeArgs),

    /// Add a project to the board
    Add(project::AddArgs),

    /// Move a project to another list
    Move(project::MoveArgs),

    /// Show both lists
    List,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Add(args) => project::add(args, &self.url).await,
            Commands::Move(args) => project::move_project(args, &self.url).await,
            Commands::List => project::list(&self.url).await,
        }
    }
}
