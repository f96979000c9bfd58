//! Tests for the IFD walker and entry decoder

use std::collections::HashMap;
use std::io::Cursor;

use crate::exif::errors::ExifError;
use crate::exif::ifd::IfdTag;
use crate::exif::reader::{ExifReader, ExifReaderBuilder, ReadOptions};
use crate::exif::tests::test_utils::{Entry, TiffFixture, Value};

fn read_fixture(fixture: &TiffFixture, options: ReadOptions) -> HashMap<String, IfdTag> {
    let mut cursor = Cursor::new(fixture.build());
    ExifReader::new(options).read(&mut cursor).unwrap()
}

fn read_default(fixture: &TiffFixture) -> HashMap<String, IfdTag> {
    read_fixture(fixture, ReadOptions::default())
}

#[test]
fn test_orientation_enum_rendering() {
    let mut fixture = TiffFixture::new(true);
    fixture.add_chained_dir(vec![Entry::short(0x0112, 6)]);

    let tags = read_default(&fixture);
    let orientation = &tags["Image Orientation"];
    assert_eq!(orientation.printable, "Rotated 90 CW");
    assert_eq!(orientation.values, vec!["6".to_string()]);
    assert_eq!(orientation.field_length, 2);
}

#[test]
fn test_xresolution_rational() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::rational(0x011A, 72, 1)]);

    let tags = read_default(&fixture);
    let xres = &tags["Image XResolution"];
    assert_eq!(xres.values[0], "72");
    assert_eq!(xres.printable, "72");
    // single-entry IFD: 8-byte header + 18-byte directory
    assert_eq!(xres.field_offset, 26);
    assert_eq!(xres.field_length, 8);
}

#[test]
fn test_srational_values() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::new(
        0x9204,
        10,
        1,
        Value::SRationals(vec![(-1, 3)]),
    )]);

    let tags = read_default(&fixture);
    assert_eq!(tags["Image ExposureBiasValue"].values[0], "-1/3");
}

#[test]
fn test_ascii_cleanup_stops_at_nul() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::ascii(0x010F, b"Hello\x00garbage")]);

    let tags = read_default(&fixture);
    let make = &tags["Image Make"];
    assert_eq!(make.values, vec!["Hello".to_string()]);
    assert_eq!(make.printable, "\"Hello\"");
}

#[test]
fn test_inline_ascii_value() {
    // two bytes fit in the entry slot, no indirection
    let mut fixture = TiffFixture::new(false);
    let gps = fixture.add_dir(vec![Entry::ascii(0x0001, b"N\x00")]);
    fixture.add_chained_dir(vec![Entry::sub_ifd(0x8825, gps)]);

    let tags = read_default(&fixture);
    assert_eq!(tags["GPS GPSLatitudeRef"].values[0], "N");
}

#[test]
fn test_multi_value_join() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::shorts(0x0102, vec![8, 8, 8])]);

    let tags = read_default(&fixture);
    assert_eq!(tags["Image BitsPerSample"].printable, "8, 8, 8");
    assert_eq!(tags["Image BitsPerSample"].values.len(), 3);
}

#[test]
fn test_long_list_rendering_is_truncated() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::shorts(0x012D, vec![7; 60])]);

    let tags = read_default(&fixture);
    let printable = &tags["Image TransferFunction"].printable;
    assert!(printable.starts_with("[7, 7,"));
    assert!(printable.ends_with(", ... ]"));
    assert_eq!(printable.matches('7').count(), 20);
}

#[test]
fn test_large_count_values_are_dropped() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::new(
        0x012D,
        3,
        1000,
        Value::Shorts(vec![0; 10]),
    )]);

    let tags = read_default(&fixture);
    let tf = &tags["Image TransferFunction"];
    assert!(tf.values.is_empty());
    assert_eq!(tf.field_length, 2000);
}

#[test]
fn test_signed_short_value() {
    let mut fixture = TiffFixture::new(true);
    fixture.add_chained_dir(vec![Entry::new(
        0x828F,
        8,
        1,
        Value::SShorts(vec![-1]),
    )]);

    let tags = read_default(&fixture);
    assert_eq!(tags["Image BatteryLevel"].values[0], "-1");
}

#[test]
fn test_enum_falls_back_to_literal() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::short(0x0112, 42)]);

    let tags = read_default(&fixture);
    assert_eq!(tags["Image Orientation"].printable, "42");
}

#[test]
fn test_unknown_tag_is_not_stored() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![
        Entry::short(0xDEAD, 1),
        Entry::short(0x0112, 1),
    ]);

    let tags = read_default(&fixture);
    assert_eq!(tags.len(), 1);
    assert!(tags.contains_key("Image Orientation"));
}

#[test]
fn test_unknown_field_type_is_skipped_when_lenient() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![
        Entry::new(0x0112, 99, 1, Value::Bytes(vec![0, 0, 0, 0])),
        Entry::short(0x0128, 2),
    ]);

    let tags = read_default(&fixture);
    assert!(!tags.contains_key("Image Orientation"));
    assert_eq!(tags["Image ResolutionUnit"].printable, "Pixels/Inch");
}

#[test]
fn test_unknown_field_type_fails_when_strict() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::new(
        0x0112,
        99,
        1,
        Value::Bytes(vec![0, 0, 0, 0]),
    )]);

    let mut cursor = Cursor::new(fixture.build());
    let mut reader = ExifReaderBuilder::new().strict(true).build();
    let result = reader.read(&mut cursor);
    assert!(matches!(result, Err(ExifError::UnknownFieldType(99, 0x0112))));
}

#[test]
fn test_exif_sub_ifd_is_followed() {
    let mut fixture = TiffFixture::new(false);
    let exif = fixture.add_dir(vec![Entry::ascii(0x9003, b"2010:11:28 16:42:18\x00")]);
    fixture.add_chained_dir(vec![
        Entry::ascii(0x010F, b"Canon\x00"),
        Entry::sub_ifd(0x8769, exif),
    ]);

    let tags = read_default(&fixture);
    assert_eq!(tags["Image Make"].values[0], "Canon");
    assert_eq!(tags["EXIF DateTimeOriginal"].values[0], "2010:11:28 16:42:18");
}

#[test]
fn test_interoperability_sub_ifd_is_followed() {
    let mut fixture = TiffFixture::new(false);
    let interop = fixture.add_dir(vec![Entry::ascii(0x0001, b"R98\x00")]);
    let exif = fixture.add_dir(vec![Entry::sub_ifd(0xA005, interop)]);
    fixture.add_chained_dir(vec![Entry::sub_ifd(0x8769, exif)]);

    let tags = read_default(&fixture);
    assert!(tags.contains_key("EXIF InteroperabilityOffset"));
    assert_eq!(
        tags["EXIF Interoperability InteroperabilityIndex"].values[0],
        "R98"
    );
}

#[test]
fn test_gps_sub_ifd_uses_gps_dictionary() {
    let mut fixture = TiffFixture::new(false);
    let gps = fixture.add_dir(vec![
        Entry::ascii(0x0001, b"N\x00"),
        Entry::new(0x0002, 5, 3, Value::Rationals(vec![(43, 1), (28, 1), (281, 100)])),
    ]);
    fixture.add_chained_dir(vec![Entry::sub_ifd(0x8825, gps)]);

    let tags = read_default(&fixture);
    assert_eq!(tags["GPS GPSLatitudeRef"].values[0], "N");
    assert_eq!(tags["GPS GPSLatitude"].printable, "43, 28, 281/100");
}

#[test]
fn test_thumbnail_offsets_are_recorded() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::short(0x0112, 1)]);
    fixture.add_chained_dir(vec![
        Entry::new(0x0201, 4, 1, Value::Longs(vec![1024])),
        Entry::new(0x0202, 4, 1, Value::Longs(vec![2048])),
    ]);

    let tags = read_default(&fixture);
    assert_eq!(tags["Thumbnail JPEGInterchangeFormat"].values[0], "1024");
    assert_eq!(tags["Thumbnail JPEGInterchangeFormatLength"].printable, "2048");
}

#[test]
fn test_thumbnail_ifd_name_for_second_directory() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::short(0x0112, 1)]);
    fixture.add_chained_dir(vec![Entry::short(0x0103, 6)]);

    let tags = read_default(&fixture);
    assert!(tags.contains_key("Image Orientation"));
    assert_eq!(tags["Thumbnail Compression"].printable, "JPEG (old-style)");
}

#[test]
fn test_stop_tag_halts_current_ifd_but_not_sub_ifds() {
    let mut fixture = TiffFixture::new(false);
    let exif = fixture.add_dir(vec![Entry::ascii(0x9003, b"2010:11:28 16:42:18\x00")]);
    fixture.add_chained_dir(vec![
        Entry::ascii(0x010F, b"Canon\x00"),
        Entry::sub_ifd(0x8769, exif),
        Entry::ascii(0x0132, b"2010:11:28 16:42:18\x00"),
        Entry::ascii(0x0110, b"Canon EOS 1000D\x00"),
    ]);

    let mut cursor = Cursor::new(fixture.build());
    let mut reader = ExifReaderBuilder::new().stop_tag("DateTime").build();
    let tags = reader.read(&mut cursor).unwrap();

    assert!(tags.contains_key("Image Make"));
    assert!(tags.contains_key("Image DateTime"));
    assert!(!tags.contains_key("Image Model"));
    assert!(tags.contains_key("EXIF DateTimeOriginal"));
}

#[test]
fn test_ignore_list_respected_when_not_detailed() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![
        Entry::ascii(0x010F, b"Canon\x00"),
        Entry::undefined(0x927C, b"maker note bytes"),
        Entry::undefined(0x9286, b"ASCII\x00\x00\x00Hi"),
    ]);

    let quick = read_fixture(
        &fixture,
        ReadOptions {
            detailed: false,
            ..ReadOptions::default()
        },
    );
    assert!(quick.contains_key("Image Make"));
    assert!(!quick.contains_key("Image MakerNote"));
    assert!(!quick.contains_key("Image UserComment"));

    let detailed = read_default(&fixture);
    assert!(detailed.contains_key("Image MakerNote"));
    assert!(detailed.contains_key("Image UserComment"));
}

#[test]
fn test_exif_version_transform_uses_first_value() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::undefined(0x9000, b"0220")]);

    let tags = read_default(&fixture);
    let version = &tags["Image ExifVersion"];
    // Undefined bytes decode to one decimal string per byte; the
    // transform renders the first of them
    assert_eq!(version.values[0], "48");
    assert_eq!(version.printable, "48");
}

#[test]
fn test_field_length_matches_count_times_size() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![
        Entry::ascii(0x010F, b"Canon\x00"),
        Entry::shorts(0x0102, vec![8, 8, 8]),
        Entry::rational(0x011A, 300, 4),
    ]);

    let tags = read_default(&fixture);
    assert_eq!(tags["Image Make"].field_length, 6);
    assert_eq!(tags["Image BitsPerSample"].field_length, 6);
    assert_eq!(tags["Image XResolution"].field_length, 8);
    assert_eq!(tags["Image XResolution"].printable, "75");
}

#[test]
fn test_empty_tiff_without_ifds() {
    let fixture = TiffFixture::new(false);
    let tags = read_default(&fixture);
    assert!(tags.is_empty());
}

#[test]
fn test_display_format_of_stored_tag() {
    let mut fixture = TiffFixture::new(false);
    fixture.add_chained_dir(vec![Entry::short(0x0112, 6)]);

    let tags = read_default(&fixture);
    let rendered = tags["Image Orientation"].to_string();
    assert_eq!(rendered, "(0x0112) Short=Rotated 90 CW @ 18");
}
