use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$")
        .expect("hex color pattern is valid")
});

/// An sRGB color with straight alpha, stored as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0x00, 0x00, 0x00, 0xFF]);

    pub fn as_index(&self) -> u32 {
        // RGBA order, same as the hex notation.
        u32::from_be_bytes(self.0)
    }

    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha() == 0xFF
    }

    pub fn opacity(&self) -> f32 {
        self.alpha() as f32 / 255.0
    }

    /// `#RRGGBB`, which every SVG renderer understands.
    pub fn to_rgb_hex(&self) -> String {
        format!("#{:06X}", self.as_index() >> 8)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.as_index())
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = HEX_COLOR
            .captures(s.trim())
            .ok_or_else(|| Error::InvalidArgument(format!("color {s:?} is not #RRGGBB or #RRGGBBAA")))?;

        let mut out = [0xFF; 4];
        for (i, channel) in out.iter_mut().enumerate() {
            if let Some(m) = caps.get(i + 1) {
                // the pattern only admits two hex digits per group
                *channel = u8::from_str_radix(m.as_str(), 16)
                    .map_err(|e| Error::InvalidArgument(e.to_string()))?;
            }
        }
        Ok(Rgba(out))
    }
}
