//! Envelope location for EXIF data
//!
//! Classifies an input as TIFF or JPEG, skips the JPEG APP segments that
//! may come before the EXIF APP1 block, and records where the TIFF block
//! starts along with its byte order.

use log::debug;
use std::io::SeekFrom;

use crate::exif::constants::markers;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::byte_order::ByteOrder;
use crate::io::seekable::SeekableReader;

/// Where the TIFF block lives within the input
#[derive(Debug, Clone, Copy)]
pub struct Envelope {
    /// Absolute file position at which the TIFF block begins
    pub base_offset: i64,
    /// Byte order of the TIFF block
    pub byte_order: ByteOrder,
    /// True when APP segments were skipped and the header had to be
    /// synthesised while scanning
    pub fake_exif: bool,
}

/// Locates the TIFF block inside the input.
///
/// Returns `None` when the input carries no EXIF data or the container
/// format is not recognised; neither case is an error.
pub fn locate(reader: &mut dyn SeekableReader) -> ExifResult<Option<Envelope>> {
    let mut data = [0u8; 12];
    reader.read_exact(&mut data)?;

    if data[0..4] == markers::TIFF_INTEL || data[0..4] == markers::TIFF_MOTOROLA {
        debug!("TIFF container");
        reader.seek(SeekFrom::Start(0))?;
        let byte_order = read_endian_marker(reader)?;
        return Ok(Some(Envelope {
            base_offset: 0,
            byte_order,
            fake_exif: false,
        }));
    }

    if data[0..2] == markers::JPEG_SOI {
        debug!("JPEG container");
        let mut fake_exif = false;

        // Skip APP segments (JFIF preview data and friends) until the
        // segment under the cursor is no longer one of them. Each pass
        // reconstructs the 12-byte view as FF 00 || next 10 bytes.
        while data[2] == 0xFF && is_skippable_signature(&data[6..10]) {
            let length = u16::from_be_bytes([data[4], data[5]]) as i64;
            debug!("skipping APP segment, length {}", length);
            reader.seek(SeekFrom::Current(length - 8))?;

            let mut jump = [0u8; 10];
            reader.read_exact(&mut jump)?;
            data[0] = 0xFF;
            data[1] = 0x00;
            data[2..12].copy_from_slice(&jump);
            fake_exif = true;
        }

        if data[2] == 0xFF && data[6..10] == markers::EXIF_SIGNATURE {
            let base_offset = reader.seek(SeekFrom::Current(0))? as i64;
            let byte_order = read_endian_marker(reader)?;
            debug!("EXIF block at offset {} ({})", base_offset, byte_order.name());
            return Ok(Some(Envelope {
                base_offset,
                byte_order,
                fake_exif,
            }));
        }

        debug!("JPEG has no EXIF segment");
        return Ok(None);
    }

    debug!("container format not recognised");
    Ok(None)
}

fn read_endian_marker(reader: &mut dyn SeekableReader) -> ExifResult<ByteOrder> {
    let mut endian = [0u8; 1];
    reader.read_exact(&mut endian)?;
    ByteOrder::from_marker(endian[0]).ok_or_else(|| {
        ExifError::GenericError(format!("invalid endian marker 0x{:02X}", endian[0]))
    })
}

fn is_skippable_signature(signature: &[u8]) -> bool {
    markers::SKIPPABLE_APP_SIGNATURES
        .iter()
        .any(|s| signature == *s)
}
