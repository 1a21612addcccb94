//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "openrouter-probe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level for logs on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Environment file to merge instead of searching for `.env`
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `send`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Send the prompt file to the chat-completions API and print the JSON response.
    ///
    /// Reads OPENROUTER_API_KEY, OPENROUTER_MODEL and OPENROUTER_PROMPT_FILE from the
    /// environment or a local .env file.
    Send,

    /// Compare the two captured completion outputs
    Compare(CompareArgs),

    /// Print the captured quoted completion as plain paragraphs
    Paragraphs,
}

#[derive(Parser, Debug, PartialEq, Eq)]
pub struct CompareArgs {
    /// Hide the character-level (whitespace) section
    #[arg(long)]
    pub no_whitespace: bool,
}

impl Cli {
    /// The command to run, `send` when none was given.
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Send)
    }
}
