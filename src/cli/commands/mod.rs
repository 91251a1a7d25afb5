//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod archetypes;
pub mod calculate;
pub mod config;
pub mod settings;
pub mod skills;
pub mod talents;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate character sheets from character files
    Calculate(calculate::CalculateArgs),

    /// List the archetypes of a setting
    Archetypes(archetypes::ArchetypesArgs),

    /// List the skills of a setting
    Skills(skills::SkillsArgs),

    /// List the talents of a setting
    Talents(talents::TalentsArgs),

    /// List settings found in the data directory
    Settings(settings::SettingsArgs),

    /// Show the effective configuration
    Config(config::ConfigArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Calculate(args) => calculate::run(ctx, args),
        Commands::Archetypes(args) => archetypes::run(ctx, args),
        Commands::Skills(args) => skills::run(ctx, args),
        Commands::Talents(args) => talents::run(ctx, args),
        Commands::Settings(args) => settings::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}
