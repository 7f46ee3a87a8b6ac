pub mod commands;
pub mod config;
pub mod utils;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use crate::{
    commands::{generate::GenerateCmd, init::InitCmd},
    config::Config,
};

#[derive(Parser)]
#[command(name = "schema2ts")]
#[command(version)]
#[command(about = "Generate TypeScript types from JSON Schema")]
#[command(
    long_about = "schema2ts turns a JSON Schema document into TypeScript interfaces, one per object shape, \
and union types for every enum it finds. Options come from a JSON config file and can be overridden with flags."
)]
#[command(after_help = "EXAMPLES:\n  \
    schema2ts init\n  \
    schema2ts generate schema.json -o types.ts\n  \
    cat schema.json | schema2ts generate --no-semi --ignore-key password\n\
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path, defaults to ./schema2ts.json
    #[arg(long, short = 'c', global = true, default_value_t = Config::default_path())]
    pub config: Utf8PathBuf,

    /// No logging except for errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Verbose logging (-v) or trace logging (-vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    #[allow(clippy::missing_errors_doc)]
    pub fn handle(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Init(cmd) => {
                cmd.handle(&self.config)?;
            }
            Commands::Generate(cmd) => cmd.handle(Config::load_or_default(&self.config)?)?,
        }

        Ok(())
    }
}

#[derive(Debug, Subcommand)]
#[command(styles=utils::styles::get_styles())]
pub enum Commands {
    /// Generate TypeScript declarations from a schema
    #[command(
        long_about = "Read a JSON Schema from a file (or stdin) and write the generated TypeScript \
declarations to a file (or stdout)."
    )]
    Generate(GenerateCmd),

    /// Write a config file with the default options
    #[command(long_about = "Initialize schema2ts.json with every option set to its default.")]
    Init(InitCmd),
}
