//! Project commands against a running board server.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::client::{BoardClient, Submission};
use crate::output;
use projboard_core::ProjectStatus;

#[derive(Args)]
pub struct AddArgs {
    /// Project title
    pub title: String,

    /// Project description (at least 5 characters)
    #[arg(short, long)]
    pub description: String,

    /// Number of people (1-5)
    #[arg(short, long)]
    pub people: String,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Project ID
    pub project_id: String,

    /// Target list (active, finished)
    #[arg(value_parser = parse_status)]
    pub status: ProjectStatus,
}

fn parse_status(s: &str) -> Result<ProjectStatus, String> {
    ProjectStatus::parse(s).map_err(|e| e.to_string())
}

pub async fn add(args: AddArgs, url: &str) -> Result<()> {
    let client = BoardClient::new(url)?;
    match client.add(&args.title, &args.description, &args.people).await? {
        Submission::Created(id) => println!(
            "{} Created project: {} ({})",
            "✓".green().bold(),
            args.title.cyan(),
            id.to_string().dimmed()
        ),
        Submission::Rejected(message) => {
            anyhow::bail!(message);
        }
    }
    Ok(())
}

pub async fn move_project(args: MoveArgs, url: &str) -> Result<()> {
    let client = BoardClient::new(url)?;
    if client.move_project(&args.project_id, args.status).await? {
        println!(
            "{} Moved project {} to {}",
            "✓".green().bold(),
            output::short_id(&args.project_id).dimmed(),
            args.status.as_str().cyan()
        );
    } else {
        println!(
            "{} No project {} on the board",
            "!".yellow().bold(),
            args.project_id.dimmed()
        );
    }
    Ok(())
}

pub async fn list(url: &str) -> Result<()> {
    let client = BoardClient::new(url)?;
    let projects = client.list().await?;
    output::print_board(&projects);
    Ok(())
}
