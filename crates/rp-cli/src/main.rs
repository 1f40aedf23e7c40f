//! CLI frontend for the Riddlepath riddle-sequence player.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "riddlepath",
    about = "Riddlepath — play narrated riddle sequences in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a library file with the starter sequences
    Init {
        /// Library file to create
        #[arg(short, long, default_value = "library.json")]
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List the sequences in the library
    List {
        /// Library file to read
        #[arg(short, long, default_value = "library.json")]
        file: PathBuf,
    },

    /// Play a sequence interactively
    Play {
        /// Sequence title (fuzzy matched; optional when the library has one entry)
        title: Option<String>,

        /// Library file to read and update
        #[arg(short, long, default_value = "library.json")]
        file: PathBuf,
    },

    /// Show accumulated play statistics
    Stats {
        /// Library file to read
        #[arg(short, long, default_value = "library.json")]
        file: PathBuf,
    },

    /// Validate the library's authored content
    Check {
        /// Library file to read
        #[arg(short, long, default_value = "library.json")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { file, force } => commands::init::run(&file, force),
        Commands::List { file } => commands::list::run(&file),
        Commands::Play { title, file } => commands::play::run(&file, title.as_deref()),
        Commands::Stats { file } => commands::stats::run(&file),
        Commands::Check { file } => commands::check::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
