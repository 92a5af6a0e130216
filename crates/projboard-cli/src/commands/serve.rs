//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use projboard_web::ServerConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides the config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (implies --log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    /// Config file values, overridden by flags.
    pub fn resolve_config(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config.validate()?;
        Ok(config)
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.resolve_config()?;

    println!();
    println!(
        "  {} {}",
        "Project Board".cyan().bold(),
        "Web Server".bold()
    );
    println!();
    println!(
        "  {}      http://{}",
        "Board".green(),
        config.bind_addr()
    );
    println!(
        "  {}        http://{}/api/projects",
        "API".green(),
        config.bind_addr()
    );
    println!(
        "  {}  ws://{}/ws",
        "WebSocket".green(),
        config.bind_addr()
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    projboard_web::run_server(config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::commands::{Cli, Commands};

    fn serve_args(argv: &[&str]) -> ServeArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Serve(args) => args,
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = serve_args(&["projboard", "serve"]).resolve_config().unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let config = serve_args(&["projboard", "serve", "--port", "8080", "--host", "0.0.0.0"])
            .resolve_config()
            .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_config_file_fails() {
        let args = serve_args(&["projboard", "serve", "--config", "/nonexistent/board.toml"]);
        assert!(args.resolve_config().is_err());
    }
}
