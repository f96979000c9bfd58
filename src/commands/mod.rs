//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;

use clap::ArgMatches;

use crate::exif::errors::ExifResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct ExifkitCommandFactory;

impl ExifkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ExifkitCommandFactory
    }
}

impl Default for ExifkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ExifkitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
    ) -> ExifResult<Box<dyn Command + 'a>> {
        // Analysis is the only operation; writing EXIF is not supported
        Ok(Box::new(AnalyzeCommand::new(args, logger)?))
    }
}
