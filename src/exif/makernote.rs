//! Vendor MakerNote tag tables
//!
//! MakerNote (tag 0x927C) contents use a camera-maker-specific schema.
//! The tables here describe the Canon layout; a vendor decoder would walk
//! the note's sub-IFD with `tables_for_make` and render element blocks
//! with the per-offset tables. Decoding itself is not performed.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::exif::tags::TagSpec;

lazy_static! {
    /// Canon MakerNote tags
    pub static ref CANON_TAGS: HashMap<u16, TagSpec> = {
        let mut m = HashMap::new();
        m.insert(0x0006, TagSpec::plain("ImageType"));
        m.insert(0x0007, TagSpec::plain("FirmwareVersion"));
        m.insert(0x0008, TagSpec::plain("ImageNumber"));
        m.insert(0x0009, TagSpec::plain("OwnerName"));
        m
    };

    /// Canon CameraSettings block (tag 0x0001), keyed by element offset
    pub static ref CANON_CAMERA_SETTINGS: HashMap<u16, TagSpec> = {
        let mut m = HashMap::new();
        m.insert(1, TagSpec::with_values("Macromode", &[
            (1, "Macro"),
            (2, "Normal"),
        ]));
        m.insert(2, TagSpec::plain("SelfTimer"));
        m.insert(3, TagSpec::with_values("Quality", &[
            (2, "Normal"),
            (3, "Fine"),
            (5, "Superfine"),
        ]));
        m.insert(4, TagSpec::with_values("FlashMode", &[
            (0, "Flash Not Fired"),
            (1, "Auto"),
            (2, "On"),
            (3, "Red-Eye Reduction"),
            (4, "Slow Synchro"),
            (5, "Auto + Red-Eye Reduction"),
            (6, "On + Red-Eye Reduction"),
            (16, "external flash"),
        ]));
        m.insert(5, TagSpec::with_values("ContinuousDriveMode", &[
            (0, "Single Or Timer"),
            (1, "Continuous"),
        ]));
        m.insert(7, TagSpec::with_values("FocusMode", &[
            (0, "One-Shot"),
            (1, "AI Servo"),
            (2, "AI Focus"),
            (3, "MF"),
            (4, "Single"),
            (5, "Continuous"),
            (6, "MF"),
        ]));
        m.insert(10, TagSpec::with_values("ImageSize", &[
            (0, "Large"),
            (1, "Medium"),
            (2, "Small"),
        ]));
        m.insert(11, TagSpec::with_values("EasyShootingMode", &[
            (0, "Full Auto"),
            (1, "Manual"),
            (2, "Landscape"),
            (3, "Fast Shutter"),
            (4, "Slow Shutter"),
            (5, "Night"),
            (6, "B&W"),
            (7, "Sepia"),
            (8, "Portrait"),
            (9, "Sports"),
            (10, "Macro/Close-Up"),
            (11, "Pan Focus"),
        ]));
        m.insert(12, TagSpec::with_values("DigitalZoom", &[
            (0, "None"),
            (1, "2x"),
            (2, "4x"),
        ]));
        m.insert(13, TagSpec::with_values("Contrast", &[
            (0xFFFF, "Low"),
            (0, "Normal"),
            (1, "High"),
        ]));
        m.insert(14, TagSpec::with_values("Saturation", &[
            (0xFFFF, "Low"),
            (0, "Normal"),
            (1, "High"),
        ]));
        m.insert(15, TagSpec::with_values("Sharpness", &[
            (0xFFFF, "Low"),
            (0, "Normal"),
            (1, "High"),
        ]));
        m.insert(16, TagSpec::with_values("ISO", &[
            (0, "See ISOSpeedRatings Tag"),
            (15, "Auto"),
            (16, "50"),
            (17, "100"),
            (18, "200"),
            (19, "400"),
        ]));
        m.insert(17, TagSpec::with_values("MeteringMode", &[
            (3, "Evaluative"),
            (4, "Partial"),
            (5, "Center-weighted"),
        ]));
        m.insert(18, TagSpec::with_values("FocusType", &[
            (0, "Manual"),
            (1, "Auto"),
            (3, "Close-Up (Macro)"),
            (8, "Locked (Pan Mode)"),
        ]));
        m.insert(19, TagSpec::with_values("AFPointSelected", &[
            (0x3000, "None (MF)"),
            (0x3001, "Auto-Selected"),
            (0x3002, "Right"),
            (0x3003, "Center"),
            (0x3004, "Left"),
        ]));
        m.insert(20, TagSpec::with_values("ExposureMode", &[
            (0, "Easy Shooting"),
            (1, "Program"),
            (2, "Tv-priority"),
            (3, "Av-priority"),
            (4, "Manual"),
            (5, "A-DEP"),
        ]));
        m.insert(23, TagSpec::plain("LongFocalLengthOfLensInFocalUnits"));
        m.insert(24, TagSpec::plain("ShortFocalLengthOfLensInFocalUnits"));
        m.insert(25, TagSpec::plain("FocalUnitsPerMM"));
        m.insert(28, TagSpec::with_values("FlashActivity", &[
            (0, "Did Not Fire"),
            (1, "Fired"),
        ]));
        m.insert(29, TagSpec::with_values("FlashDetails", &[
            (14, "External E-TTL"),
            (13, "Internal Flash"),
            (11, "FP Sync Used"),
            (7, "2nd (\"Rear\")-Curtain Sync Used"),
            (4, "FP Sync Enabled"),
        ]));
        m.insert(32, TagSpec::with_values("FocusMode", &[
            (0, "Single"),
            (1, "Continuous"),
        ]));
        m
    };

    /// Canon ShotInfo block (tag 0x0004), keyed by element offset
    pub static ref CANON_SHOT_INFO: HashMap<u16, TagSpec> = {
        let mut m = HashMap::new();
        m.insert(7, TagSpec::with_values("WhiteBalance", &[
            (0, "Auto"),
            (1, "Sunny"),
            (2, "Cloudy"),
            (3, "Tungsten"),
            (4, "Fluorescent"),
            (5, "Flash"),
            (6, "Custom"),
        ]));
        m.insert(9, TagSpec::plain("SequenceNumber"));
        m.insert(14, TagSpec::plain("AFPointUsed"));
        m.insert(15, TagSpec::with_values("FlashBias", &[
            (0xFFC0, "-2 EV"),
            (0xFFCC, "-1.67 EV"),
            (0xFFD0, "-1.50 EV"),
            (0xFFD4, "-1.33 EV"),
            (0xFFE0, "-1 EV"),
            (0xFFEC, "-0.67 EV"),
            (0xFFF0, "-0.50 EV"),
            (0xFFF4, "-0.33 EV"),
            (0x0000, "0 EV"),
            (0x000C, "0.33 EV"),
            (0x0010, "0.50 EV"),
            (0x0014, "0.67 EV"),
            (0x0020, "1 EV"),
            (0x002C, "1.33 EV"),
            (0x0030, "1.50 EV"),
            (0x0034, "1.67 EV"),
            (0x0040, "2 EV"),
        ]));
        m.insert(19, TagSpec::plain("SubjectDistance"));
        m
    };
}

/// Returns the MakerNote dictionary for a camera make, if one is known
pub fn tables_for_make(make: &str) -> Option<&'static HashMap<u16, TagSpec>> {
    if make.starts_with("Canon") {
        return Some(&CANON_TAGS);
    }
    None
}
