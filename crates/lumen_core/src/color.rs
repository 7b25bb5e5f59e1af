//! Color types and utilities

use serde::{Deserialize, Serialize};

/// RGBA color with f32 components (0.0 to 1.0)
///
/// Serialized as a `#RRGGBB` / `#RRGGBBAA` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_hex(value)),
            8 => Some(Self::from_rgba8(
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            )),
            _ => None,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// Decompose into hue/saturation/brightness/alpha.
    ///
    /// Returns `None` when a component is NaN or infinite; such a color has
    /// no meaningful HSB representation.
    pub fn to_hsba(&self) -> Option<Hsba> {
        if !self.to_array().iter().all(|c| c.is_finite()) {
            return None;
        }
        let r = self.r.clamp(0.0, 1.0);
        let g = self.g.clamp(0.0, 1.0);
        let b = self.b.clamp(0.0, 1.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        let hue = if delta <= f32::EPSILON {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        Some(Hsba {
            hue,
            saturation,
            brightness: max,
            alpha: self.a.clamp(0.0, 1.0),
        })
    }

    pub fn from_hsba(hsba: Hsba) -> Self {
        let Hsba {
            hue,
            saturation,
            brightness,
            alpha,
        } = hsba;
        let s = saturation.clamp(0.0, 1.0);
        let v = brightness.clamp(0.0, 1.0);
        let h = hue.rem_euclid(1.0) * 6.0;

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::rgba(r, g, b, alpha.clamp(0.0, 1.0))
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&value).ok_or_else(|| format!("invalid hex color `{value}`"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

/// Hue, saturation, brightness and alpha, each in 0.0..=1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsba {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_blue_hsba() {
        let hsba = Color::BLUE.to_hsba().unwrap();
        assert!(close(hsba.hue, 2.0 / 3.0));
        assert!(close(hsba.saturation, 1.0));
        assert!(close(hsba.brightness, 1.0));
        assert!(close(hsba.alpha, 1.0));
    }

    #[test]
    fn test_hsba_roundtrip_preserves_components() {
        let original = Color::from_hex(0x2196F3).with_alpha(0.5);
        let back = Color::from_hsba(original.to_hsba().unwrap());
        for (a, b) in original.to_array().iter().zip(back.to_array()) {
            assert!(close(*a, b), "{original:?} vs {back:?}");
        }
    }

    #[test]
    fn test_gray_has_no_saturation() {
        let hsba = Color::rgb(0.4, 0.4, 0.4).to_hsba().unwrap();
        assert_eq!(hsba.saturation, 0.0);
        assert_eq!(hsba.hue, 0.0);
    }

    #[test]
    fn test_non_finite_has_no_hsba() {
        assert!(Color::rgb(f32::NAN, 0.0, 0.0).to_hsba().is_none());
        assert!(Color::rgba(0.0, 0.0, 0.0, f32::INFINITY).to_hsba().is_none());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse_hex("#2196F3"), Some(Color::from_hex(0x2196F3)));
        assert_eq!(
            Color::parse_hex("00000080").map(|c| c.to_rgba8()),
            Some([0, 0, 0, 128])
        );
        assert_eq!(Color::parse_hex("#12345"), None);
        assert_eq!(Color::parse_hex("#GG0000"), None);
        assert_eq!(Color::from_hex(0x2196F3).to_hex_string(), "#2196F3");
    }
}
