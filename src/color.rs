//! Color intents and the RGB to HSV conversion the hub expects.

use crate::error::{check_range, LightError};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Hue in degrees (0-360), saturation and brightness in percent (0-100).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvColor {
    pub hue: u16,
    pub saturation: u8,
    pub brightness: u8,
}

pub const MAX_HUE: i64 = 360;
pub const MAX_PERCENT: i64 = 100;
pub const DEFAULT_BRIGHTNESS: u8 = 100;

static COLOR_TABLE: [(&str, RgbColor); 12] = [
    ("red", RgbColor::rgb(255, 0, 0)),
    ("green", RgbColor::rgb(0, 255, 0)),
    ("blue", RgbColor::rgb(0, 0, 255)),
    ("yellow", RgbColor::rgb(255, 234, 0)),
    ("cyan", RgbColor::rgb(0, 255, 255)),
    ("magenta", RgbColor::rgb(255, 0, 255)),
    ("pink", RgbColor::rgb(255, 20, 147)),
    ("orange", RgbColor::rgb(255, 165, 0)),
    ("purple", RgbColor::rgb(128, 0, 128)),
    ("white", RgbColor::rgb(255, 255, 255)),
    ("black", RgbColor::rgb(0, 0, 0)),
    ("gray", RgbColor::rgb(128, 128, 128)),
];

impl RgbColor {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> RgbColor {
        RgbColor { red, green, blue }
    }

    /// Builds a color from untrusted channel values, each in 0-255.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<RgbColor, LightError> {
        Ok(RgbColor {
            red: check_range("red", red, 0, 255)? as u8,
            green: check_range("green", green, 0, 255)? as u8,
            blue: check_range("blue", blue, 0, 255)? as u8,
        })
    }

    pub fn to_hsv(self, brightness: u8) -> HsvColor {
        let (hue, saturation) = rgb_to_hsv(self.red, self.green, self.blue);
        HsvColor {
            hue,
            saturation,
            brightness,
        }
    }
}

impl HsvColor {
    pub fn new(hue: i64, saturation: i64, brightness: i64) -> Result<HsvColor, LightError> {
        Ok(HsvColor {
            hue: check_range("hue", hue, 0, MAX_HUE)? as u16,
            saturation: check_range("saturation", saturation, 0, MAX_PERCENT)? as u8,
            brightness: check_range("brightness", brightness, 0, MAX_PERCENT)? as u8,
        })
    }
}

/// Converts an 8-bit RGB triple to (hue degrees, saturation percent).
///
/// Both results are truncated, not rounded. Achromatic inputs give hue 0.
pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> (u16, u8) {
    let r = f64::from(red) / 255.0;
    let g = f64::from(green) / 255.0;
    let b = f64::from(blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let hue = if diff == 0.0 {
        0.0
    } else if max == r {
        (60.0 * ((g - b) / diff) + 360.0).rem_euclid(360.0)
    } else if max == g {
        (60.0 * ((b - r) / diff) + 120.0).rem_euclid(360.0)
    } else {
        (60.0 * ((r - g) / diff) + 240.0).rem_euclid(360.0)
    };

    let saturation = if max == 0.0 { 0.0 } else { diff / max * 100.0 };

    (hue as u16, saturation as u8)
}

pub fn color_names() -> Vec<&'static str> {
    COLOR_TABLE.iter().map(|(name, _)| *name).collect()
}

pub fn resolve_color_name(name: &str) -> Result<RgbColor, LightError> {
    let wanted = name.trim().to_lowercase();

    COLOR_TABLE
        .iter()
        .find(|(known, _)| *known == wanted)
        .map(|(_, rgb)| *rgb)
        .ok_or_else(|| LightError::UnknownColorName {
            name: wanted,
            available: color_names(),
        })
}
