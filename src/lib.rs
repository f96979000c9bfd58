pub mod io;
pub mod exif;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::ExifKit;

pub use exif::{ExifError, ExifReader, ExifReaderBuilder, ExifResult, IfdTag, Rational, ReadOptions};
pub use io::byte_order::ByteOrder;
