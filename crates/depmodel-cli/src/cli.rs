//! CLI argument definitions for depmodel.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depmodel",
    version,
    about = "Build and inspect application dependency models",
    long_about = "depmodel assembles an application's resolved dependencies and the \
                  class-loading classifications contributed by its extensions into a \
                  single frozen dependency model."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the dependency model and print or write it
    Build {
        /// Model descriptor (defaults to the nearest depmodel.toml)
        descriptor: Option<PathBuf>,
        /// Extension properties file to apply (repeatable)
        #[arg(short = 'e', long = "extension-properties")]
        extension_properties: Vec<PathBuf>,
        /// Output format: json or toml (defaults to the global config)
        #[arg(short, long)]
        format: Option<String>,
        /// Write the model to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Disable pretty-printing
        #[arg(long)]
        compact: bool,
    },

    /// List the dependencies of the built model
    Deps {
        /// Model descriptor (defaults to the nearest depmodel.toml)
        descriptor: Option<PathBuf>,
        /// Extension properties file to apply (repeatable)
        #[arg(short = 'e', long = "extension-properties")]
        extension_properties: Vec<PathBuf>,
        /// Which dependencies to list: all, runtime, deployment
        #[arg(long, default_value = "all")]
        view: String,
        /// Show classification markers next to each dependency
        #[arg(long)]
        flags: bool,
    },

    /// Validate extension properties files
    CheckProperties {
        /// Properties files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
