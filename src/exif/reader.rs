//! EXIF reader implementation
//!
//! This module implements the reader that locates the TIFF block inside a
//! JPEG or TIFF container, walks the chain of Image File Directories, and
//! decodes every directory entry into the output tag map. Sub-IFDs (EXIF,
//! Interoperability, GPS) are followed with their own dictionaries.

use log::{debug, info, trace, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, SeekFrom};
use std::path::Path;

use crate::exif::constants::{
    field_types, FAKE_EXIF_ADJUST, FIELD_TYPES, IGNORED_TAGS, LARGE_COUNT_LIMIT, MAX_IFDS,
};
use crate::exif::envelope;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::ifd::IfdTag;
use crate::exif::makernote;
use crate::exif::rational::Rational;
use crate::exif::tags::{TagSpec, EXIF_TAGS, GPS_TAGS, INTEROP_TAGS};
use crate::io::byte_order::{sign_extend, ByteOrderHandler};
use crate::io::seekable::SeekableReader;
use crate::utils::string_utils;

/// Options controlling a single parse
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Stop decoding the current IFD once a tag with this name has been
    /// read. Empty and "UNDEF" mean "decode everything".
    pub stop_tag: Option<String>,
    /// When false, UserComment and MakerNote entries are skipped
    pub detailed: bool,
    /// When true, unknown field types abort the parse instead of
    /// skipping the entry
    pub strict: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            stop_tag: None,
            detailed: true,
            strict: false,
        }
    }
}

/// Builder for ExifReader
///
/// Provides a clean way to construct an ExifReader with various configurations.
pub struct ExifReaderBuilder {
    options: ReadOptions,
}

impl ExifReaderBuilder {
    /// Create a new ExifReaderBuilder
    pub fn new() -> Self {
        ExifReaderBuilder {
            options: ReadOptions::default(),
        }
    }

    /// Halt IFD decoding once the named tag has been read
    pub fn stop_tag(mut self, tag: &str) -> Self {
        self.options.stop_tag = Some(tag.to_string());
        self
    }

    /// Include MakerNote and UserComment entries
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.options.detailed = detailed;
        self
    }

    /// Fail on unknown field types instead of skipping them
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Build the ExifReader
    pub fn build(self) -> ExifReader {
        ExifReader::new(self.options)
    }
}

impl Default for ExifReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reader for EXIF metadata in JPEG and TIFF files
pub struct ExifReader {
    /// Options for this parse
    options: ReadOptions,
    /// Current byte order handler
    byte_order_handler: Option<Box<dyn ByteOrderHandler>>,
    /// Absolute file position at which the TIFF block begins
    base_offset: i64,
    /// Whether the JPEG envelope had to be synthesised
    fake_exif: bool,
    /// Decoded tags keyed by "<IFD name> <tag name>"
    tags: HashMap<String, IfdTag>,
}

impl ExifReader {
    /// Creates a new EXIF reader
    pub fn new(options: ReadOptions) -> Self {
        ExifReader {
            options,
            byte_order_handler: None,
            base_offset: 0,
            fake_exif: false,
            tags: HashMap::new(),
        }
    }

    /// Loads EXIF metadata from the file at the given path
    ///
    /// This is the main entry point for processing a file on disk.
    /// It opens the file and delegates to the read() method.
    pub fn load(&mut self, filepath: &str) -> ExifResult<HashMap<String, IfdTag>> {
        info!("Loading image file: {}", filepath);

        let path = Path::new(filepath);
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(64 * 1024, file);

        self.read(&mut reader)
    }

    /// Reads EXIF metadata from the given byte source
    ///
    /// The source must start with either a JPEG SOI marker or a TIFF
    /// header. An unrecognised container, or a JPEG without an EXIF
    /// segment, yields an empty map rather than an error.
    pub fn read(&mut self, reader: &mut dyn SeekableReader) -> ExifResult<HashMap<String, IfdTag>> {
        let envelope = match envelope::locate(reader)? {
            Some(e) => e,
            None => {
                info!("no EXIF data found");
                return Ok(HashMap::new());
            }
        };

        self.base_offset = envelope.base_offset;
        self.fake_exif = envelope.fake_exif;
        self.byte_order_handler = Some(envelope.byte_order.create_handler());
        self.tags = HashMap::new();

        let stop_tag = match &self.options.stop_tag {
            Some(s) if !s.is_empty() && s != "UNDEF" => Some(s.clone()),
            _ => None,
        };
        let stop_tag = stop_tag.as_deref();

        let ifds = self.list_ifds(reader)?;
        info!("found {} IFDs in EXIF block", ifds.len());

        for (number, &ifd) in ifds.iter().enumerate() {
            let ifd_name = match number {
                0 => "Image".to_string(),
                1 => "Thumbnail".to_string(),
                n => format!("IFD {}", n),
            };
            debug!("IFD {} ({}) at offset {}", number, ifd_name, ifd);
            self.dump_ifd(reader, ifd, &ifd_name, &EXIF_TAGS, 0, stop_tag)?;

            if let Some(exif_off) = self.tag_offset(&format!("{} ExifOffset", ifd_name))? {
                debug!("EXIF sub-IFD at offset {}", exif_off);
                self.dump_ifd(reader, exif_off, "EXIF", &EXIF_TAGS, 0, stop_tag)?;

                // Interoperability IFD contained in the EXIF IFD
                if let Some(interop_off) = self.tag_offset("EXIF InteroperabilityOffset")? {
                    debug!("Interoperability sub-IFD at offset {}", interop_off);
                    self.dump_ifd(
                        reader,
                        interop_off,
                        "EXIF Interoperability",
                        &INTEROP_TAGS,
                        0,
                        stop_tag,
                    )?;
                }
            }

            if let Some(gps_off) = self.tag_offset(&format!("{} GPSInfo", ifd_name))? {
                debug!("GPS sub-IFD at offset {}", gps_off);
                self.dump_ifd(reader, gps_off, "GPS", &GPS_TAGS, 0, stop_tag)?;
            }
        }

        self.probe_extras();

        Ok(std::mem::take(&mut self.tags))
    }

    /// Decodes the entries of one IFD into the tag map
    ///
    /// `relative` selects the relative-offset scheme for out-of-line
    /// values; it is zero everywhere except Nikon type-3 MakerNote
    /// sub-IFDs, whose pointers count from the note itself.
    pub fn dump_ifd(
        &mut self,
        reader: &mut dyn SeekableReader,
        ifd: i64,
        ifd_name: &str,
        dict: &HashMap<u16, TagSpec>,
        relative: i64,
        stop_tag: Option<&str>,
    ) -> ExifResult<()> {
        let entries = self.read_int(reader, ifd, 2, false)?;

        for i in 0..entries {
            let entry = ifd + 2 + 12 * i;
            let tag = self.read_int(reader, entry, 2, false)? as u16;
            let tag_spec = dict.get(&tag);
            let tag_name = match tag_spec {
                Some(spec) => spec.name.to_string(),
                None => format!("Tag 0x{:04X}", tag),
            };

            if self.options.detailed || !IGNORED_TAGS.contains(&tag) {
                let field_type = self.read_int(reader, entry + 2, 2, false)? as u16;
                if !(1..=10).contains(&field_type) {
                    if self.options.strict {
                        return Err(ExifError::UnknownFieldType(field_type, tag));
                    }
                    continue;
                }

                let type_size = FIELD_TYPES[field_type as usize].size;
                let count = self.read_int(reader, entry + 4, 4, false)?;

                // Past the tag id, type and count the entry holds either
                // the value itself or a pointer to it.
                let mut offset = entry + 8;
                if count * type_size as i64 > 4 {
                    let pointer = self.read_int(reader, offset, 4, false)?;
                    offset = if relative > 0 {
                        let mut adjusted = pointer + ifd - 8;
                        if self.fake_exif {
                            adjusted += FAKE_EXIF_ADJUST;
                        }
                        adjusted
                    } else {
                        pointer
                    };
                }

                let field_offset = offset;
                let values =
                    self.read_entry_values(reader, field_type, count, offset, &tag_name)?;
                let printable = render_printable(&values, count, field_type, tag_spec)?;

                if tag_spec.is_some() {
                    let stored = IfdTag {
                        tag,
                        field_type,
                        field_offset,
                        field_length: count as u64 * type_size,
                        values,
                        printable,
                    };
                    debug!("  {}: {}", tag_name, stored);
                    self.tags.insert(format!("{} {}", ifd_name, tag_name), stored);
                } else {
                    trace!("  unknown tag 0x{:04X} not stored", tag);
                }
            }

            if Some(tag_name.as_str()) == stop_tag {
                debug!("reached stop tag {}, leaving IFD", tag_name);
                break;
            }
        }

        Ok(())
    }

    /// Extracts the values of one entry as strings
    fn read_entry_values(
        &self,
        reader: &mut dyn SeekableReader,
        field_type: u16,
        count: i64,
        offset: i64,
        tag_name: &str,
    ) -> ExifResult<Vec<String>> {
        // Null-terminated ASCII string, decoded as a single value
        if field_type == field_types::ASCII {
            if count > 0 && count < (1i64 << 31) {
                self.seek_to(reader, offset)?;
                let mut buffer = vec![0u8; count as usize];
                reader.read_exact(&mut buffer)?;
                return Ok(vec![string_utils::cut_at_nul(&buffer)]);
            }
            return Ok(vec![String::new()]);
        }

        let signed = matches!(
            field_type,
            field_types::SBYTE | field_types::SSHORT | field_types::SLONG | field_types::SRATIONAL
        );
        let type_size = FIELD_TYPES[field_type as usize].size;

        // Oversized counts are almost always a malformed entry; MakerNote
        // is the one tag whose payload legitimately runs that long.
        if count >= LARGE_COUNT_LIMIT && tag_name != "MakerNote" {
            debug!("dropping {} values of large tag {}", count, tag_name);
            return Ok(Vec::new());
        }

        let handler = self.handler()?;
        self.seek_to(reader, offset)?;

        let mut values = Vec::with_capacity(count as usize);
        for _ in 0..count {
            match field_type {
                field_types::RATIONAL => {
                    let (num, den) = handler.read_rational(reader)?;
                    values.push(Rational::new(num as i64, den as i64).to_string());
                }
                field_types::SRATIONAL => {
                    let (num, den) = handler.read_srational(reader)?;
                    values.push(Rational::new(num as i64, den as i64).to_string());
                }
                _ => {
                    let raw = handler.read_sized(reader, type_size)?;
                    let value = if signed {
                        sign_extend(raw, type_size)
                    } else {
                        raw as i64
                    };
                    values.push(value.to_string());
                }
            }
        }

        Ok(values)
    }

    /// Returns the IFD0 offset from the TIFF header
    fn first_ifd(&self, reader: &mut dyn SeekableReader) -> ExifResult<i64> {
        self.read_int(reader, 4, 4, false)
    }

    /// Returns the offset of the IFD following the one at `ifd`
    fn next_ifd(&self, reader: &mut dyn SeekableReader, ifd: i64) -> ExifResult<i64> {
        let entries = self.read_int(reader, ifd, 2, false)?;
        self.read_int(reader, ifd + 2 + 12 * entries, 4, false)
    }

    /// Lists the offsets of all IFDs in the chain
    ///
    /// A well-formed chain ends with a zero link; corrupt links are caught
    /// by the revisit check and the hard cap.
    fn list_ifds(&self, reader: &mut dyn SeekableReader) -> ExifResult<Vec<i64>> {
        let mut offsets: Vec<i64> = Vec::new();
        let mut ifd = self.first_ifd(reader)?;

        while ifd > 0 {
            if offsets.contains(&ifd) {
                warn!("IFD chain loops back to offset {}, stopping", ifd);
                break;
            }
            if offsets.len() >= MAX_IFDS {
                warn!("IFD chain exceeds {} directories, stopping", MAX_IFDS);
                break;
            }
            offsets.push(ifd);
            ifd = self.next_ifd(reader, ifd)?;
        }

        Ok(offsets)
    }

    /// Looks up a stored tag and re-reads its first value as an offset
    fn tag_offset(&self, key: &str) -> ExifResult<Option<i64>> {
        match self.tags.get(key) {
            Some(tag) => {
                let value = tag
                    .values
                    .first()
                    .ok_or_else(|| ExifError::MalformedInteger(key.to_string()))?;
                let offset = value
                    .parse::<i64>()
                    .map_err(|_| ExifError::MalformedInteger(value.clone()))?;
                Ok(Some(offset))
            }
            None => Ok(None),
        }
    }

    /// Reads an integer of `size` bytes at `offset` within the TIFF block
    fn read_int(
        &self,
        reader: &mut dyn SeekableReader,
        offset: i64,
        size: u64,
        signed: bool,
    ) -> ExifResult<i64> {
        self.seek_to(reader, offset)?;
        let raw = self.handler()?.read_sized(reader, size)?;
        if signed {
            Ok(sign_extend(raw, size))
        } else {
            Ok(raw as i64)
        }
    }

    /// Seeks to an offset relative to the start of the TIFF block
    fn seek_to(&self, reader: &mut dyn SeekableReader, offset: i64) -> ExifResult<()> {
        let position = self.base_offset + offset;
        if position < 0 {
            return Err(ExifError::GenericError(format!(
                "seek before start of file: {}",
                position
            )));
        }
        reader.seek(SeekFrom::Start(position as u64))?;
        Ok(())
    }

    /// Returns the byte order handler, with proper error handling for None case
    fn handler(&self) -> ExifResult<&dyn ByteOrderHandler> {
        self.byte_order_handler
            .as_deref()
            .ok_or_else(|| ExifError::GenericError("byte order not yet determined".to_string()))
    }

    /// Logs thumbnails and vendor notes present in the parsed map.
    /// Extracting thumbnail bytes and decoding vendor notes are left to
    /// collaborators outside this reader.
    fn probe_extras(&self) {
        if let Some(compression) = self.tags.get("Thumbnail Compression") {
            if compression.printable == "Uncompressed TIFF" {
                debug!("uncompressed TIFF thumbnail present, not extracted");
            }
        }

        if self.tags.contains_key("Thumbnail JPEGInterchangeFormat")
            && self.tags.contains_key("Thumbnail JPEGInterchangeFormatLength")
        {
            debug!("JPEG thumbnail present, not extracted");
        }

        if self.options.detailed && self.tags.contains_key("EXIF MakerNote") {
            if let Some(make) = self.tags.get("Image Make") {
                let make_name = make.values.first().map(String::as_str).unwrap_or("");
                match makernote::tables_for_make(make_name) {
                    Some(_) => debug!("MakerNote schema known for {}, not decoded", make_name),
                    None => debug!("MakerNote present but no schema for {}", make_name),
                }
            }
        }
    }
}

/// Renders the printable form of an entry's values
fn render_printable(
    values: &[String],
    count: i64,
    field_type: u16,
    tag_spec: Option<&TagSpec>,
) -> ExifResult<String> {
    let mut printable = if count == 1 && field_type != field_types::ASCII {
        values[0].clone()
    } else if count > 50 && values.len() > 20 {
        format!("[{}, ... ]", values[..20].join(", "))
    } else {
        let joined = values.join(", ");
        if field_type == field_types::ASCII {
            format!("{:?}", joined)
        } else {
            joined
        }
    };

    if let Some(spec) = tag_spec {
        if let Some(transform) = spec.transform {
            printable = transform(values);
        } else if let Some(value_names) = &spec.values {
            printable = String::new();
            for value in values {
                let code = value
                    .parse::<i64>()
                    .map_err(|_| ExifError::MalformedInteger(value.clone()))?;
                match value_names.get(&code) {
                    Some(name) => printable.push_str(name),
                    None => printable.push_str(value),
                }
            }
        }
    }

    Ok(printable)
}
