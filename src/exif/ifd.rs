//! Decoded IFD tag records
//!
//! Each entry in an Image File Directory decodes into an `IfdTag` carrying
//! the raw values, a printable rendering and provenance fields describing
//! where in the TIFF block the value bytes came from.

use std::fmt;

use crate::exif::constants::FIELD_TYPES;

/// A single decoded IFD entry
#[derive(Debug, Clone)]
pub struct IfdTag {
    /// Tag ID number
    pub tag: u16,
    /// Field type as an index into the field type table
    pub field_type: u16,
    /// Byte offset of the value data within the TIFF block,
    /// after indirection for out-of-line storage
    pub field_offset: i64,
    /// Length of the value data in bytes
    pub field_length: u64,
    /// Decoded values, one string per element (a single string for ASCII)
    pub values: Vec<String>,
    /// Printable rendering of the values
    pub printable: String,
}

impl fmt::Display for IfdTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(0x{:04X}) {}={} @ {}",
            self.tag,
            FIELD_TYPES[self.field_type as usize].name,
            self.printable,
            self.field_offset
        )
    }
}
