//! Byte order handling for EXIF/TIFF data
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when reading TIFF data.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Error, ErrorKind, Result};

use crate::io::seekable::SeekableReader;

/// Represents the byte order of a TIFF block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order ('I', Intel)
    LittleEndian,
    /// Big-endian byte order ('M', Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Classifies the endian marker byte at the start of a TIFF block
    pub fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            b'I' => Some(ByteOrder::LittleEndian), // "Intel"
            b'M' => Some(ByteOrder::BigEndian),    // "Motorola"
            _ => None,
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (Intel)",
            ByteOrder::BigEndian => "Big Endian (Motorola)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u16 value
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16>;

    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32>;

    /// Read an unsigned integer of 1, 2, 4 or 8 bytes
    fn read_sized(&self, reader: &mut dyn SeekableReader, size: u64) -> Result<u64>;

    /// Read a rational value (two u32 values as numerator/denominator)
    fn read_rational(&self, reader: &mut dyn SeekableReader) -> Result<(u32, u32)>;

    /// Read a signed rational value (two i32 values as numerator/denominator)
    fn read_srational(&self, reader: &mut dyn SeekableReader) -> Result<(i32, i32)>;
}

/// Sign-extends a value that was read as `size` bytes of unsigned data
pub fn sign_extend(value: u64, size: u64) -> i64 {
    if size >= 8 {
        return value as i64;
    }
    let msb = 1u64 << (8 * size - 1);
    if value & msb != 0 {
        (value as i64) - ((msb << 1) as i64)
    } else {
        value as i64
    }
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn read_sized(&self, reader: &mut dyn SeekableReader, size: u64) -> Result<u64> {
        match size {
            1 => Ok(reader.read_u8()? as u64),
            2 => Ok(reader.read_u16::<LittleEndian>()? as u64),
            4 => Ok(reader.read_u32::<LittleEndian>()? as u64),
            8 => reader.read_u64::<LittleEndian>(),
            _ => Err(Error::new(ErrorKind::InvalidInput, format!("unsupported read size: {}", size))),
        }
    }

    fn read_rational(&self, reader: &mut dyn SeekableReader) -> Result<(u32, u32)> {
        let numerator = reader.read_u32::<LittleEndian>()?;
        let denominator = reader.read_u32::<LittleEndian>()?;
        Ok((numerator, denominator))
    }

    fn read_srational(&self, reader: &mut dyn SeekableReader) -> Result<(i32, i32)> {
        let numerator = reader.read_i32::<LittleEndian>()?;
        let denominator = reader.read_i32::<LittleEndian>()?;
        Ok((numerator, denominator))
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn read_sized(&self, reader: &mut dyn SeekableReader, size: u64) -> Result<u64> {
        match size {
            1 => Ok(reader.read_u8()? as u64),
            2 => Ok(reader.read_u16::<BigEndian>()? as u64),
            4 => Ok(reader.read_u32::<BigEndian>()? as u64),
            8 => reader.read_u64::<BigEndian>(),
            _ => Err(Error::new(ErrorKind::InvalidInput, format!("unsupported read size: {}", size))),
        }
    }

    fn read_rational(&self, reader: &mut dyn SeekableReader) -> Result<(u32, u32)> {
        let numerator = reader.read_u32::<BigEndian>()?;
        let denominator = reader.read_u32::<BigEndian>()?;
        Ok((numerator, denominator))
    }

    fn read_srational(&self, reader: &mut dyn SeekableReader) -> Result<(i32, i32)> {
        let numerator = reader.read_i32::<BigEndian>()?;
        let denominator = reader.read_i32::<BigEndian>()?;
        Ok((numerator, denominator))
    }
}
