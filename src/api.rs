//! High-level library interface

use log::info;
use std::collections::HashMap;

use crate::exif::errors::ExifResult;
use crate::exif::ifd::IfdTag;
use crate::exif::reader::{ExifReader, ReadOptions};
use crate::utils::logger::Logger;

/// Main interface to the ExifKit library
pub struct ExifKit {
    logger: Logger,
}

impl ExifKit {
    /// Create a new ExifKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "exifkit.log"
    ///
    /// # Returns
    /// An ExifKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ExifResult<Self> {
        let log_path = log_file.unwrap_or("exifkit.log");
        let logger = Logger::new(log_path)?;
        Ok(ExifKit { logger })
    }

    /// Decode a file's EXIF metadata and return a formatted summary
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file to analyze
    ///
    /// # Returns
    /// String containing one line per decoded tag, or an error
    pub fn analyze(&self, input_path: &str) -> ExifResult<String> {
        let tags = self.read_tags(input_path, &ReadOptions::default())?;

        let mut result = String::from("EXIF Analysis Results:\n");
        result.push_str(&format!("  Tags found: {}\n", tags.len()));

        let mut keys: Vec<&String> = tags.keys().collect();
        keys.sort();
        for key in keys {
            result.push_str(&format!("  {}: {}\n", key, tags[key]));
        }

        self.logger.log(&format!("Analyzed {}", input_path))?;
        Ok(result)
    }

    /// Decode a file's EXIF metadata into a tag map
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file to read
    /// * `options` - Parse options (stop tag, detail, strictness)
    ///
    /// # Returns
    /// Decoded tags keyed by "<IFD name> <tag name>"; empty when the file
    /// carries no EXIF data
    pub fn read_tags(
        &self,
        input_path: &str,
        options: &ReadOptions,
    ) -> ExifResult<HashMap<String, IfdTag>> {
        info!("Reading EXIF tags from {}", input_path);
        let mut reader = ExifReader::new(options.clone());
        reader.load(input_path)
    }
}
