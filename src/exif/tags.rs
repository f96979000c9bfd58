//! EXIF tag dictionaries
//!
//! Static mappings from 16-bit tag ids to tag descriptions for the main
//! EXIF, GPS and Interoperability IFDs. A description carries the tag
//! name and at most one of a value enumeration or a printable transform.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Describes a known tag
pub struct TagSpec {
    /// Human-readable tag name
    pub name: &'static str,
    /// Names for enumerated values
    pub values: Option<HashMap<i64, &'static str>>,
    /// Transform producing the printable form from the raw values
    pub transform: Option<fn(&[String]) -> String>,
}

impl TagSpec {
    pub(crate) fn plain(name: &'static str) -> Self {
        TagSpec { name, values: None, transform: None }
    }

    pub(crate) fn with_values(name: &'static str, values: &[(i64, &'static str)]) -> Self {
        TagSpec {
            name,
            values: Some(values.iter().cloned().collect()),
            transform: None,
        }
    }

    pub(crate) fn with_transform(name: &'static str, transform: fn(&[String]) -> String) -> Self {
        TagSpec { name, values: None, transform: Some(transform) }
    }
}

/// Removes non-printing characters from the first value.
/// Falls back to the original text when nothing printable remains.
pub fn make_string(values: &[String]) -> String {
    let first = match values.first() {
        Some(v) => v,
        None => return String::new(),
    };
    let out: String = first
        .chars()
        .filter(|c| (32..256).contains(&(*c as u32)))
        .collect();
    if out.is_empty() {
        first.clone()
    } else {
        out
    }
}

/// UserComment variant of `make_string`: the first 8 bytes encode the
/// character set (ASCII vs. JIS vs. Unicode) and are stripped before
/// cleaning the remainder.
pub fn make_string_uc(values: &[String]) -> String {
    let first = match values.first() {
        Some(v) => v,
        None => return String::new(),
    };
    let rest = match first.get(8..) {
        Some(rest) => rest.to_string(),
        None => String::new(),
    };
    make_string(&[rest])
}

lazy_static! {
    /// Main EXIF tag dictionary, also used for the EXIF sub-IFD
    pub static ref EXIF_TAGS: HashMap<u16, TagSpec> = {
        let mut m = HashMap::new();
        m.insert(0x0100, TagSpec::plain("ImageWidth"));
        m.insert(0x0101, TagSpec::plain("ImageLength"));
        m.insert(0x0102, TagSpec::plain("BitsPerSample"));
        m.insert(0x0103, TagSpec::with_values("Compression", &[
            (1, "Uncompressed"),
            (2, "CCITT 1D"),
            (3, "T4/Group 3 Fax"),
            (4, "T6/Group 4 Fax"),
            (5, "LZW"),
            (6, "JPEG (old-style)"),
            (7, "JPEG"),
            (8, "Adobe Deflate"),
            (9, "JBIG B&W"),
            (10, "JBIG Color"),
            (32766, "Next"),
            (32769, "Epson ERF Compressed"),
            (32771, "CCIRLEW"),
            (32773, "PackBits"),
            (32809, "Thunderscan"),
            (32895, "IT8CTPAD"),
            (32896, "IT8LW"),
            (32897, "IT8MP"),
            (32898, "IT8BL"),
            (32908, "PixarFilm"),
            (32909, "PixarLog"),
            (32946, "Deflate"),
            (32947, "DCS"),
            (34661, "JBIG"),
            (34676, "SGILog"),
            (34677, "SGILog24"),
            (34712, "JPEG 2000"),
            (34713, "Nikon NEF Compressed"),
            (65000, "Kodak DCR Compressed"),
            (65535, "Pentax PEF Compressed"),
        ]));
        m.insert(0x0106, TagSpec::plain("PhotometricInterpretation"));
        m.insert(0x0107, TagSpec::plain("Thresholding"));
        m.insert(0x010A, TagSpec::plain("FillOrder"));
        m.insert(0x010D, TagSpec::plain("DocumentName"));
        m.insert(0x010E, TagSpec::plain("ImageDescription"));
        m.insert(0x010F, TagSpec::plain("Make"));
        m.insert(0x0110, TagSpec::plain("Model"));
        m.insert(0x0111, TagSpec::plain("StripOffsets"));
        m.insert(0x0112, TagSpec::with_values("Orientation", &[
            (1, "Horizontal (normal)"),
            (2, "Mirrored horizontal"),
            (3, "Rotated 180"),
            (4, "Mirrored vertical"),
            (5, "Mirrored horizontal then rotated 90 CCW"),
            (6, "Rotated 90 CW"),
            (7, "Mirrored horizontal then rotated 90 CW"),
            (8, "Rotated 90 CCW"),
        ]));
        m.insert(0x0115, TagSpec::plain("SamplesPerPixel"));
        m.insert(0x0116, TagSpec::plain("RowsPerStrip"));
        m.insert(0x0117, TagSpec::plain("StripByteCounts"));
        m.insert(0x011A, TagSpec::plain("XResolution"));
        m.insert(0x011B, TagSpec::plain("YResolution"));
        m.insert(0x011C, TagSpec::plain("PlanarConfiguration"));
        m.insert(0x011D, TagSpec::with_transform("PageName", make_string));
        m.insert(0x0128, TagSpec::with_values("ResolutionUnit", &[
            (1, "Not Absolute"),
            (2, "Pixels/Inch"),
            (3, "Pixels/Centimeter"),
        ]));
        m.insert(0x012D, TagSpec::plain("TransferFunction"));
        m.insert(0x0131, TagSpec::plain("Software"));
        m.insert(0x0132, TagSpec::plain("DateTime"));
        m.insert(0x013B, TagSpec::plain("Artist"));
        m.insert(0x013E, TagSpec::plain("WhitePoint"));
        m.insert(0x013F, TagSpec::plain("PrimaryChromaticities"));
        m.insert(0x0156, TagSpec::plain("TransferRange"));
        m.insert(0x0200, TagSpec::plain("JPEGProc"));
        m.insert(0x0201, TagSpec::plain("JPEGInterchangeFormat"));
        m.insert(0x0202, TagSpec::plain("JPEGInterchangeFormatLength"));
        m.insert(0x0211, TagSpec::plain("YCbCrCoefficients"));
        m.insert(0x0212, TagSpec::plain("YCbCrSubSampling"));
        m.insert(0x0213, TagSpec::with_values("YCbCrPositioning", &[
            (1, "Centered"),
            (2, "Co-sited"),
        ]));
        m.insert(0x0214, TagSpec::plain("ReferenceBlackWhite"));
        m.insert(0x4746, TagSpec::plain("Rating"));
        m.insert(0x828D, TagSpec::plain("CFARepeatPatternDim"));
        m.insert(0x828E, TagSpec::plain("CFAPattern"));
        m.insert(0x828F, TagSpec::plain("BatteryLevel"));
        m.insert(0x8298, TagSpec::plain("Copyright"));
        m.insert(0x829A, TagSpec::plain("ExposureTime"));
        m.insert(0x829D, TagSpec::plain("FNumber"));
        m.insert(0x83BB, TagSpec::plain("IPTC/NAA"));
        m.insert(0x8769, TagSpec::plain("ExifOffset"));
        m.insert(0x8773, TagSpec::plain("InterColorProfile"));
        m.insert(0x8822, TagSpec::with_values("ExposureProgram", &[
            (0, "Unidentified"),
            (1, "Manual"),
            (2, "Program Normal"),
            (3, "Aperture Priority"),
            (4, "Shutter Priority"),
            (5, "Program Creative"),
            (6, "Program Action"),
            (7, "Portrait Mode"),
            (8, "Landscape Mode"),
        ]));
        m.insert(0x8824, TagSpec::plain("SpectralSensitivity"));
        m.insert(0x8825, TagSpec::plain("GPSInfo"));
        m.insert(0x8827, TagSpec::plain("ISOSpeedRatings"));
        m.insert(0x8828, TagSpec::plain("OECF"));
        m.insert(0x9000, TagSpec::with_transform("ExifVersion", make_string));
        m.insert(0x9003, TagSpec::plain("DateTimeOriginal"));
        m.insert(0x9004, TagSpec::plain("DateTimeDigitized"));
        m.insert(0x9101, TagSpec::with_values("ComponentsConfiguration", &[
            (0, ""),
            (1, "Y"),
            (2, "Cb"),
            (3, "Cr"),
            (4, "Red"),
            (5, "Green"),
            (6, "Blue"),
        ]));
        m.insert(0x9102, TagSpec::plain("CompressedBitsPerPixel"));
        m.insert(0x9201, TagSpec::plain("ShutterSpeedValue"));
        m.insert(0x9202, TagSpec::plain("ApertureValue"));
        m.insert(0x9203, TagSpec::plain("BrightnessValue"));
        m.insert(0x9204, TagSpec::plain("ExposureBiasValue"));
        m.insert(0x9205, TagSpec::plain("MaxApertureValue"));
        m.insert(0x9206, TagSpec::plain("SubjectDistance"));
        m.insert(0x9207, TagSpec::with_values("MeteringMode", &[
            (0, "Unidentified"),
            (1, "Average"),
            (2, "CenterWeightedAverage"),
            (3, "Spot"),
            (4, "MultiSpot"),
            (5, "Pattern"),
        ]));
        m.insert(0x9208, TagSpec::with_values("LightSource", &[
            (0, "Unknown"),
            (1, "Daylight"),
            (2, "Fluorescent"),
            (3, "Tungsten"),
            (9, "Fine Weather"),
            (10, "Flash"),
            (11, "Shade"),
            (12, "Daylight Fluorescent"),
            (13, "Day White Fluorescent"),
            (14, "Cool White Fluorescent"),
            (15, "White Fluorescent"),
            (17, "Standard Light A"),
            (18, "Standard Light B"),
            (19, "Standard Light C"),
            (20, "D55"),
            (21, "D65"),
            (22, "D75"),
            (255, "Other"),
        ]));
        m.insert(0x9209, TagSpec::with_values("Flash", &[
            (0, "No"),
            (1, "Fired"),
            (5, "Fired (?)"), // no return sensed
            (7, "Fired (!)"), // return sensed
            (9, "Fill Fired"),
            (13, "Fill Fired (?)"),
            (15, "Fill Fired (!)"),
            (16, "Off"),
            (24, "Auto Off"),
            (25, "Auto Fired"),
            (29, "Auto Fired (?)"),
            (31, "Auto Fired (!)"),
            (32, "Not Available"),
        ]));
        m.insert(0x920A, TagSpec::plain("FocalLength"));
        m.insert(0x9214, TagSpec::plain("SubjectArea"));
        m.insert(0x927C, TagSpec::plain("MakerNote"));
        m.insert(0x9286, TagSpec::with_transform("UserComment", make_string_uc));
        m.insert(0x9290, TagSpec::plain("SubSecTime"));
        m.insert(0x9291, TagSpec::plain("SubSecTimeOriginal"));
        m.insert(0x9292, TagSpec::plain("SubSecTimeDigitized"));
        // used by Windows Explorer
        m.insert(0x9C9B, TagSpec::plain("XPTitle"));
        m.insert(0x9C9C, TagSpec::plain("XPComment"));
        m.insert(0x9C9D, TagSpec::plain("XPAuthor")); // ignored by Windows Explorer if Artist exists
        m.insert(0x9C9E, TagSpec::plain("XPKeywords"));
        m.insert(0x9C9F, TagSpec::plain("XPSubject"));
        m.insert(0xA000, TagSpec::with_transform("FlashPixVersion", make_string));
        m.insert(0xA001, TagSpec::with_values("ColorSpace", &[
            (1, "sRGB"),
            (2, "Adobe RGB"),
            (65535, "Uncalibrated"),
        ]));
        m.insert(0xA002, TagSpec::plain("ExifImageWidth"));
        m.insert(0xA003, TagSpec::plain("ExifImageLength"));
        m.insert(0xA005, TagSpec::plain("InteroperabilityOffset"));
        m.insert(0xA20B, TagSpec::plain("FlashEnergy"));              // 0x920B in TIFF/EP
        m.insert(0xA20C, TagSpec::plain("SpatialFrequencyResponse")); // 0x920C
        m.insert(0xA20E, TagSpec::plain("FocalPlaneXResolution"));    // 0x920E
        m.insert(0xA20F, TagSpec::plain("FocalPlaneYResolution"));    // 0x920F
        m.insert(0xA210, TagSpec::plain("FocalPlaneResolutionUnit")); // 0x9210
        m.insert(0xA214, TagSpec::plain("SubjectLocation"));          // 0x9214
        m.insert(0xA215, TagSpec::plain("ExposureIndex"));            // 0x9215
        m.insert(0xA217, TagSpec::with_values("SensingMethod", &[     // 0x9217
            (1, "Not defined"),
            (2, "One-chip color area"),
            (3, "Two-chip color area"),
            (4, "Three-chip color area"),
            (5, "Color sequential area"),
            (7, "Trilinear"),
            (8, "Color sequential linear"),
        ]));
        m.insert(0xA300, TagSpec::with_values("FileSource", &[
            (1, "Film Scanner"),
            (2, "Reflection Print Scanner"),
            (3, "Digital Camera"),
        ]));
        m.insert(0xA301, TagSpec::with_values("SceneType", &[
            (1, "Directly Photographed"),
        ]));
        m.insert(0xA302, TagSpec::plain("CVAPattern"));
        m.insert(0xA401, TagSpec::with_values("CustomRendered", &[
            (0, "Normal"),
            (1, "Custom"),
        ]));
        m.insert(0xA402, TagSpec::with_values("ExposureMode", &[
            (0, "Auto Exposure"),
            (1, "Manual Exposure"),
            (2, "Auto Bracket"),
        ]));
        m.insert(0xA403, TagSpec::with_values("WhiteBalance", &[
            (0, "Auto"),
            (1, "Manual"),
        ]));
        m.insert(0xA404, TagSpec::plain("DigitalZoomRatio"));
        m.insert(0xA405, TagSpec::plain("FocalLengthIn35mmFilm"));
        m.insert(0xA406, TagSpec::with_values("SceneCaptureType", &[
            (0, "Standard"),
            (1, "Landscape"),
            (2, "Portrait"),
            (3, "Night)"),
        ]));
        m.insert(0xA407, TagSpec::with_values("GainControl", &[
            (0, "None"),
            (1, "Low gain up"),
            (2, "High gain up"),
            (3, "Low gain down"),
            (4, "High gain down"),
        ]));
        m.insert(0xA408, TagSpec::with_values("Contrast", &[
            (0, "Normal"),
            (1, "Soft"),
            (2, "Hard"),
        ]));
        m.insert(0xA409, TagSpec::with_values("Saturation", &[
            (0, "Normal"),
            (1, "Soft"),
            (2, "Hard"),
        ]));
        m.insert(0xA40A, TagSpec::with_values("Sharpness", &[
            (0, "Normal"),
            (1, "Soft"),
            (2, "Hard"),
        ]));
        m.insert(0xA40B, TagSpec::plain("DeviceSettingDescription"));
        m.insert(0xA40C, TagSpec::plain("SubjectDistanceRange"));
        m.insert(0xA500, TagSpec::plain("Gamma"));
        m.insert(0xC4A5, TagSpec::plain("PrintIM"));
        m.insert(0xEA1C, TagSpec::plain("Padding"));
        m
    };

    /// Interoperability tags
    pub static ref INTEROP_TAGS: HashMap<u16, TagSpec> = {
        let mut m = HashMap::new();
        m.insert(0x0001, TagSpec::plain("InteroperabilityIndex"));
        m.insert(0x0002, TagSpec::plain("InteroperabilityVersion"));
        m.insert(0x1000, TagSpec::plain("RelatedImageFileFormat"));
        m.insert(0x1001, TagSpec::plain("RelatedImageWidth"));
        m.insert(0x1002, TagSpec::plain("RelatedImageLength"));
        m
    };

    /// GPS tags
    pub static ref GPS_TAGS: HashMap<u16, TagSpec> = {
        let mut m = HashMap::new();
        m.insert(0x0000, TagSpec::plain("GPSVersionID"));
        m.insert(0x0001, TagSpec::plain("GPSLatitudeRef"));
        m.insert(0x0002, TagSpec::plain("GPSLatitude"));
        m.insert(0x0003, TagSpec::plain("GPSLongitudeRef"));
        m.insert(0x0004, TagSpec::plain("GPSLongitude"));
        m.insert(0x0005, TagSpec::plain("GPSAltitudeRef"));
        m.insert(0x0006, TagSpec::plain("GPSAltitude"));
        m.insert(0x0007, TagSpec::plain("GPSTimeStamp"));
        m.insert(0x0008, TagSpec::plain("GPSSatellites"));
        m.insert(0x0009, TagSpec::plain("GPSStatus"));
        m.insert(0x000A, TagSpec::plain("GPSMeasureMode"));
        m.insert(0x000B, TagSpec::plain("GPSDOP"));
        m.insert(0x000C, TagSpec::plain("GPSSpeedRef"));
        m.insert(0x000D, TagSpec::plain("GPSSpeed"));
        m.insert(0x000E, TagSpec::plain("GPSTrackRef"));
        m.insert(0x000F, TagSpec::plain("GPSTrack"));
        m.insert(0x0010, TagSpec::plain("GPSImgDirectionRef"));
        m.insert(0x0011, TagSpec::plain("GPSImgDirection"));
        m.insert(0x0012, TagSpec::plain("GPSMapDatum"));
        m.insert(0x0013, TagSpec::plain("GPSDestLatitudeRef"));
        m.insert(0x0014, TagSpec::plain("GPSDestLatitude"));
        m.insert(0x0015, TagSpec::plain("GPSDestLongitudeRef"));
        m.insert(0x0016, TagSpec::plain("GPSDestLongitude"));
        m.insert(0x0017, TagSpec::plain("GPSDestBearingRef"));
        m.insert(0x0018, TagSpec::plain("GPSDestBearing"));
        m.insert(0x0019, TagSpec::plain("GPSDestDistanceRef"));
        m.insert(0x001A, TagSpec::plain("GPSDestDistance"));
        m.insert(0x001D, TagSpec::plain("GPSDate"));
        m
    };
}
