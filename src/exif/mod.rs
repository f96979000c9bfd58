//! EXIF metadata parsing module
//!
//! This module provides structures and functions for locating and
//! decoding EXIF metadata in JPEG and TIFF files.

pub mod errors;
pub mod ifd;
pub mod rational;
pub mod reader;
pub mod envelope;
pub mod tags;
pub mod makernote;
pub mod constants;
#[cfg(test)]
mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use errors::{ExifError, ExifResult};
pub use ifd::IfdTag;
pub use rational::Rational;
pub use reader::{ExifReader, ExifReaderBuilder, ReadOptions};
