use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::collections::HashMap;

/// Serialized value of a fixture entry
pub enum Value {
    /// Raw payload bytes (ASCII and UNDEFINED fields)
    Bytes(Vec<u8>),
    Shorts(Vec<u16>),
    Longs(Vec<u32>),
    SShorts(Vec<i16>),
    Rationals(Vec<(u32, u32)>),
    SRationals(Vec<(i32, i32)>),
    /// LONG pointer to another fixture directory
    SubIfd(usize),
}

/// One IFD entry of a fixture directory
pub struct Entry {
    pub tag: u16,
    pub field_type: u16,
    pub count: u32,
    pub value: Value,
}

impl Entry {
    pub fn new(tag: u16, field_type: u16, count: u32, value: Value) -> Self {
        Entry { tag, field_type, count, value }
    }

    pub fn ascii(tag: u16, text: &[u8]) -> Self {
        Entry::new(tag, 2, text.len() as u32, Value::Bytes(text.to_vec()))
    }

    pub fn undefined(tag: u16, bytes: &[u8]) -> Self {
        Entry::new(tag, 7, bytes.len() as u32, Value::Bytes(bytes.to_vec()))
    }

    pub fn short(tag: u16, value: u16) -> Self {
        Entry::new(tag, 3, 1, Value::Shorts(vec![value]))
    }

    pub fn shorts(tag: u16, values: Vec<u16>) -> Self {
        Entry::new(tag, 3, values.len() as u32, Value::Shorts(values))
    }

    pub fn rational(tag: u16, num: u32, den: u32) -> Self {
        Entry::new(tag, 5, 1, Value::Rationals(vec![(num, den)]))
    }

    pub fn sub_ifd(tag: u16, dir: usize) -> Self {
        Entry::new(tag, 4, 1, Value::SubIfd(dir))
    }
}

/// Builds TIFF blocks (and JPEG envelopes around them) in memory
///
/// Directories are laid out after the 8-byte header in the order they
/// were added; out-of-line values land in a data region after the last
/// directory and entry slots receive pointers to them.
pub struct TiffFixture {
    big_endian: bool,
    dirs: Vec<Vec<Entry>>,
    chain: Vec<usize>,
}

impl TiffFixture {
    pub fn new(big_endian: bool) -> Self {
        TiffFixture {
            big_endian,
            dirs: Vec::new(),
            chain: Vec::new(),
        }
    }

    /// Adds a directory to the IFD0 chain, returning its index
    pub fn add_chained_dir(&mut self, entries: Vec<Entry>) -> usize {
        let index = self.add_dir(entries);
        self.chain.push(index);
        index
    }

    /// Adds a directory reachable only through a SubIfd pointer
    pub fn add_dir(&mut self, entries: Vec<Entry>) -> usize {
        self.dirs.push(entries);
        self.dirs.len() - 1
    }

    fn put_u16(&self, buf: &mut Vec<u8>, value: u16) {
        if self.big_endian {
            buf.write_u16::<BigEndian>(value).unwrap();
        } else {
            buf.write_u16::<LittleEndian>(value).unwrap();
        }
    }

    fn put_u32(&self, buf: &mut Vec<u8>, value: u32) {
        if self.big_endian {
            buf.write_u32::<BigEndian>(value).unwrap();
        } else {
            buf.write_u32::<LittleEndian>(value).unwrap();
        }
    }

    fn put_i16(&self, buf: &mut Vec<u8>, value: i16) {
        if self.big_endian {
            buf.write_i16::<BigEndian>(value).unwrap();
        } else {
            buf.write_i16::<LittleEndian>(value).unwrap();
        }
    }

    fn put_i32(&self, buf: &mut Vec<u8>, value: i32) {
        if self.big_endian {
            buf.write_i32::<BigEndian>(value).unwrap();
        } else {
            buf.write_i32::<LittleEndian>(value).unwrap();
        }
    }

    fn payload(&self, value: &Value) -> Vec<u8> {
        let mut buf = Vec::new();
        match value {
            Value::Bytes(bytes) => buf.extend_from_slice(bytes),
            Value::Shorts(values) => {
                for v in values {
                    self.put_u16(&mut buf, *v);
                }
            }
            Value::Longs(values) => {
                for v in values {
                    self.put_u32(&mut buf, *v);
                }
            }
            Value::SShorts(values) => {
                for v in values {
                    self.put_i16(&mut buf, *v);
                }
            }
            Value::Rationals(values) => {
                for (num, den) in values {
                    self.put_u32(&mut buf, *num);
                    self.put_u32(&mut buf, *den);
                }
            }
            Value::SRationals(values) => {
                for (num, den) in values {
                    self.put_i32(&mut buf, *num);
                    self.put_i32(&mut buf, *den);
                }
            }
            Value::SubIfd(_) => {}
        }
        buf
    }

    /// Serializes the fixture as a standalone TIFF file
    pub fn build(&self) -> Vec<u8> {
        // First pass: directory offsets, then data region offsets
        let mut dir_offsets = Vec::with_capacity(self.dirs.len());
        let mut cursor = 8usize;
        for dir in &self.dirs {
            dir_offsets.push(cursor);
            cursor += 2 + 12 * dir.len() + 4;
        }

        let mut data_offsets: HashMap<(usize, usize), usize> = HashMap::new();
        for (d, dir) in self.dirs.iter().enumerate() {
            for (e, entry) in dir.iter().enumerate() {
                if matches!(entry.value, Value::SubIfd(_)) {
                    continue;
                }
                let bytes = self.payload(&entry.value);
                if bytes.len() > 4 {
                    data_offsets.insert((d, e), cursor);
                    cursor += bytes.len();
                }
            }
        }

        // Second pass: serialize header, directories and data region
        let mut buf = Vec::with_capacity(cursor);
        buf.extend_from_slice(if self.big_endian { b"MM" } else { b"II" });
        self.put_u16(&mut buf, 42);
        let first = self.chain.first().map(|&i| dir_offsets[i]).unwrap_or(0);
        self.put_u32(&mut buf, first as u32);

        for (d, dir) in self.dirs.iter().enumerate() {
            self.put_u16(&mut buf, dir.len() as u16);
            for (e, entry) in dir.iter().enumerate() {
                self.put_u16(&mut buf, entry.tag);
                self.put_u16(&mut buf, entry.field_type);
                self.put_u32(&mut buf, entry.count);
                match &entry.value {
                    Value::SubIfd(target) => {
                        self.put_u32(&mut buf, dir_offsets[*target] as u32);
                    }
                    value => {
                        let bytes = self.payload(value);
                        if bytes.len() > 4 {
                            self.put_u32(&mut buf, data_offsets[&(d, e)] as u32);
                        } else {
                            let mut slot = bytes;
                            slot.resize(4, 0);
                            buf.extend_from_slice(&slot);
                        }
                    }
                }
            }

            let next = self
                .chain
                .iter()
                .position(|&i| i == d)
                .and_then(|p| self.chain.get(p + 1))
                .map(|&i| dir_offsets[i])
                .unwrap_or(0);
            self.put_u32(&mut buf, next as u32);
        }

        for (d, dir) in self.dirs.iter().enumerate() {
            for (e, entry) in dir.iter().enumerate() {
                if data_offsets.contains_key(&(d, e)) {
                    buf.extend_from_slice(&self.payload(&entry.value));
                }
            }
        }

        buf
    }

    /// Serializes the fixture as a JPEG with the TIFF block in APP1,
    /// optionally preceded by an APP0 JFIF segment
    pub fn build_jpeg(&self, with_jfif: bool) -> Vec<u8> {
        let tiff = self.build();
        let mut buf = vec![0xFF, 0xD8];

        if with_jfif {
            buf.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
            buf.extend_from_slice(b"JFIF\x00");
            buf.extend_from_slice(&[0x01, 0x02, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
        }

        buf.extend_from_slice(&[0xFF, 0xE1]);
        buf.write_u16::<BigEndian>((tiff.len() + 8) as u16).unwrap();
        buf.extend_from_slice(b"Exif\x00\x00");
        buf.extend_from_slice(&tiff);
        buf
    }
}
