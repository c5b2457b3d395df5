use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "journalkeeper")]
#[command(about = "Keep a personal, dated journal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the JournalKeeper API URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new account
    Signup,
    /// Sign in and remember the token
    Signin,
    /// Forget the stored token
    Signout,
    /// Show whether a token is stored
    Status,
    /// Show the signed-in user's profile
    Profile,
    /// Manage journal entries
    #[command(subcommand)]
    Entries(EntriesCommand),
}

#[derive(Subcommand)]
pub enum EntriesCommand {
    /// List entries, newest first
    List,
    /// Write a new entry
    Add,
    /// Edit an existing entry
    Edit {
        /// Entry id
        id: i64,
    },
    /// Delete an entry
    Delete {
        /// Entry id
        id: i64,
    },
}
