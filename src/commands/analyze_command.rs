//! EXIF structure analysis command
//!
//! This module implements the command for decoding and displaying
//! the EXIF metadata of an image file.

use clap::ArgMatches;
use log::{debug, info};
use std::collections::HashMap;

use crate::commands::command_traits::Command;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::ifd::IfdTag;
use crate::exif::reader::{ExifReader, ReadOptions};
use crate::utils::logger::Logger;

/// Command for analyzing the EXIF metadata of a file
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Halt IFD decoding once this tag has been read
    stop_tag: Option<String>,
    /// Fail on unknown field types
    strict: bool,
    /// Skip MakerNote and UserComment for faster processing
    quick: bool,
    /// Only display tags whose key contains this text
    tag_filter: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| ExifError::GenericError("Missing input file".to_string()))?
            .clone();

        Ok(AnalyzeCommand {
            input_file,
            verbose: args.get_flag("verbose"),
            stop_tag: args.get_one::<String>("stop-tag").cloned(),
            strict: args.get_flag("strict"),
            quick: args.get_flag("quick"),
            tag_filter: args.get_one::<String>("tag").cloned(),
            logger,
        })
    }

    /// Display the decoded tags in key order
    ///
    /// # Arguments
    /// * `tags` - The decoded tag map
    fn display_tags(&self, tags: &HashMap<String, IfdTag>) -> ExifResult<()> {
        let mut keys: Vec<&String> = tags.keys().collect();
        keys.sort();

        let mut rows = Vec::new();
        for key in keys {
            if let Some(filter) = &self.tag_filter {
                if !key.contains(filter.as_str()) {
                    continue;
                }
            }

            let tag = &tags[key];
            info!("{}: {}", key, tag);
            rows.push((key.clone(), tag.to_string()));
        }

        if rows.is_empty() {
            info!("No tags matched");
        }

        self.logger.print_tag_listing(&rows)?;
        Ok(())
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        info!("Analyzing file: {}", self.input_file);

        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let options = ReadOptions {
            stop_tag: self.stop_tag.clone(),
            detailed: !self.quick,
            strict: self.strict,
        };

        let mut reader = ExifReader::new(options);
        let tags = reader.load(&self.input_file)?;

        if tags.is_empty() {
            info!("No EXIF data found in {}", self.input_file);
            return Ok(());
        }

        info!("Decoded {} tags", tags.len());
        self.display_tags(&tags)?;

        debug!("Analysis completed successfully");
        self.logger.log("Analysis completed successfully")?;

        Ok(())
    }
}
