//! EXIF format constants
//!
//! This module defines constants used throughout the EXIF processing code,
//! making the code more readable and maintainable by replacing magic numbers
//! with descriptive names.

/// A TIFF field type: byte size per element, abbreviation, full name
#[derive(Debug, Clone, Copy)]
pub struct FieldType {
    pub size: u64,
    pub code: &'static str,
    pub name: &'static str,
}

/// Field type descriptions indexed by the on-wire type code.
/// Index 0 has no meaning in the TIFF specification.
pub const FIELD_TYPES: [FieldType; 11] = [
    FieldType { size: 0, code: "X", name: "Proprietary" },
    FieldType { size: 1, code: "B", name: "Byte" },
    FieldType { size: 1, code: "A", name: "ASCII" },
    FieldType { size: 2, code: "S", name: "Short" },
    FieldType { size: 4, code: "L", name: "Long" },
    FieldType { size: 8, code: "R", name: "Ratio" },
    FieldType { size: 1, code: "SB", name: "Signed Byte" },
    FieldType { size: 1, code: "U", name: "Undefined" },
    FieldType { size: 2, code: "SS", name: "Signed Short" },
    FieldType { size: 4, code: "SL", name: "Signed Long" },
    FieldType { size: 8, code: "SR", name: "Signed Ratio" },
];

/// Field types as defined in the TIFF spec
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
}

/// Container markers used by the envelope locator
pub mod markers {
    /// "II*\0" magic of a little-endian TIFF file
    pub const TIFF_INTEL: [u8; 4] = *b"II*\x00";

    /// "MM\0*" magic of a big-endian TIFF file
    pub const TIFF_MOTOROLA: [u8; 4] = *b"MM\x00*";

    /// JPEG start-of-image marker
    pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

    /// APP segment signatures skipped while hunting for the EXIF block
    pub const SKIPPABLE_APP_SIGNATURES: [[u8; 4]; 4] = [*b"JFIF", *b"JFXX", *b"OLYM", *b"Phot"];

    /// Signature of the APP1 segment that carries EXIF
    pub const EXIF_SIGNATURE: [u8; 4] = *b"Exif";
}

/// Tags skipped when quick (non-detailed) processing is requested:
/// 0x9286 is UserComment, 0x927C is MakerNote
pub const IGNORED_TAGS: [u16; 2] = [0x9286, 0x927C];

/// Hard cap on IFD chain length, protecting against corrupt next-IFD links
pub const MAX_IFDS: usize = 16;

/// Offset correction for synthesised JPEG envelopes: the length of the
/// "\xFF\x00Exif\0\0" prefix plus the endian and magic words
pub const FAKE_EXIF_ADJUST: i64 = 18;

/// Entries with this many values or more are dropped unless the tag is
/// MakerNote, whose payload legitimately runs long
pub const LARGE_COUNT_LIMIT: i64 = 1000;
