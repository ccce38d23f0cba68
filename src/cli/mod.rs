pub mod completions;
pub mod init;
pub mod sprites;

use clap::{Parser, Subcommand};

/// CLI tool with handy commands for Odyc.js developers
#[derive(Parser, Debug)]
#[command(name = "odyc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show debug output (per-image and per-colour details)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate code from sprites directory
    Sprites(sprites::SpritesArgs),

    /// Initialize an odyc project (generates odyc.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
