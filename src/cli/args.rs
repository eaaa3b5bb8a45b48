//! Command line argument parsing
//!
//! This module handles CLI argument parsing with subcommands:
//! - `interactive`: Line-oriented task scheduling session
//! - `run`: Queue a task list file and execute it in schedule order
//! - `demo`: Walk through a scripted add/execute/reorder scenario
//! - `show-config`: Show configuration discovery information

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug)]
pub enum ExecutionMode {
    Interactive(InteractiveConfig),
    Batch(BatchConfig),
    Demo,
    ShowConfig,
}

#[derive(Debug)]
pub struct InteractiveConfig {
    pub config_override: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug)]
pub struct BatchConfig {
    pub task_file: PathBuf,
    pub config_override: Option<PathBuf>,
    pub verbose: bool,
    pub dry_run: bool,
}

#[derive(Debug, Parser)]
#[command(name = "tsched")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Keep tasks ordered by priority and deadline and execute the top one")]
#[command(long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run an interactive scheduling session
    Interactive {
        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
    /// Queue every task in a TOML or JSON task list and execute them in order
    Run {
        /// Path to the task list
        file: PathBuf,
        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
        /// Show the ordered queue without executing
        #[arg(short = 'n', long = "dry-run")]
        dry_run: bool,
    },
    /// Walk through a scripted scheduling scenario
    Demo,
    /// Show configuration discovery information
    ShowConfig,
}

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn mode(&self) -> Result<ExecutionMode, String> {
        match &self.command {
            Some(Commands::Interactive { verbose }) => {
                Ok(ExecutionMode::Interactive(InteractiveConfig {
                    config_override: self.config.clone(),
                    verbose: *verbose,
                }))
            }
            Some(Commands::Run {
                file,
                verbose,
                dry_run,
            }) => Ok(ExecutionMode::Batch(BatchConfig {
                task_file: file.clone(),
                config_override: self.config.clone(),
                verbose: *verbose,
                dry_run: *dry_run,
            })),
            Some(Commands::Demo) => Ok(ExecutionMode::Demo),
            Some(Commands::ShowConfig) => Ok(ExecutionMode::ShowConfig),
            None => Err(
                "No command specified. Use 'tsched --help' to see available commands.".to_string(),
            ),
        }
    }
}
