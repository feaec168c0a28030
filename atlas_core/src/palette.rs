use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 24-bit color carried through styling and handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Named colors the palette files are allowed to use, alongside
/// `#rrggbb` hex notation.
const NAMED_COLORS: [(&str, Rgb); 10] = [
    ("black", Rgb { r: 0x00, g: 0x00, b: 0x00 }),
    ("white", Rgb { r: 0xff, g: 0xff, b: 0xff }),
    ("gray", Rgb { r: 0x80, g: 0x80, b: 0x80 }),
    ("antiquewhite", Rgb { r: 0xfa, g: 0xeb, b: 0xd7 }),
    ("lightsalmon", Rgb { r: 0xff, g: 0xa0, b: 0x7a }),
    ("sienna", Rgb { r: 0xa0, g: 0x52, b: 0x2d }),
    ("darkred", Rgb { r: 0x8b, g: 0x00, b: 0x00 }),
    ("lightgreen", Rgb { r: 0x90, g: 0xee, b: 0x90 }),
    ("lightslategray", Rgb { r: 0x77, g: 0x88, b: 0x99 }),
    ("darkolivegreen", Rgb { r: 0x55, g: 0x6b, b: 0x2f }),
];

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` hex or one of the supported CSS color names.
    pub fn from_css(raw: &str) -> Result<Self, PaletteError> {
        let trimmed = raw.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() == 6 {
                let parse = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&hex[range], 16)
                        .map_err(|_| PaletteError::BadColor(raw.to_string()))
                };
                return Ok(Self {
                    r: parse(0..2)?,
                    g: parse(2..4)?,
                    b: parse(4..6)?,
                });
            }
            return Err(PaletteError::BadColor(raw.to_string()));
        }
        let lowered = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, color)| *color)
            .ok_or_else(|| PaletteError::BadColor(raw.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_css(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Ordered threshold bucketing: `cutoffs` ascending, `colors` exactly
/// one entry longer. A value lands on the color of the first cutoff
/// strictly greater than it, or on the last color.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    cutoffs: Vec<f64>,
    colors: Vec<Rgb>,
}

impl ThresholdScale {
    pub fn new(cutoffs: Vec<f64>, colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.len() != cutoffs.len() + 1 {
            return Err(PaletteError::RampSize {
                cutoffs: cutoffs.len(),
                colors: colors.len(),
            });
        }
        if cutoffs.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(PaletteError::CutoffsNotAscending);
        }
        Ok(Self { cutoffs, colors })
    }

    pub fn color_for(&self, value: f64) -> Rgb {
        match self.cutoffs.iter().position(|&cutoff| value < cutoff) {
            Some(index) => self.colors[index],
            None => self.colors[self.colors.len() - 1],
        }
    }

    pub fn cutoffs(&self) -> &[f64] {
        &self.cutoffs
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("unrecognized color {0:?}")]
    BadColor(String),
    #[error("color ramp must be one longer than cutoffs ({cutoffs} cutoffs, {colors} colors)")]
    RampSize { cutoffs: usize, colors: usize },
    #[error("threshold cutoffs must be strictly ascending")]
    CutoffsNotAscending,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Vec<Rgb> {
        vec![
            Rgb::new(1, 0, 0),
            Rgb::new(2, 0, 0),
            Rgb::new(3, 0, 0),
            Rgb::new(4, 0, 0),
        ]
    }

    #[test]
    fn bucketing_obeys_the_strict_upper_cutoff_rule() {
        let scale = ThresholdScale::new(vec![10.0, 20.0, 30.0], ramp()).unwrap();
        assert_eq!(scale.color_for(9.9), Rgb::new(1, 0, 0));
        assert_eq!(scale.color_for(10.0), Rgb::new(2, 0, 0));
        assert_eq!(scale.color_for(19.9), Rgb::new(2, 0, 0));
        assert_eq!(scale.color_for(20.0), Rgb::new(3, 0, 0));
        assert_eq!(scale.color_for(30.0), Rgb::new(4, 0, 0));
        assert_eq!(scale.color_for(1_000_000.0), Rgb::new(4, 0, 0));
    }

    #[test]
    fn ramp_size_mismatch_is_rejected() {
        let err = ThresholdScale::new(vec![10.0, 20.0], ramp()).unwrap_err();
        assert_eq!(
            err,
            PaletteError::RampSize {
                cutoffs: 2,
                colors: 4
            }
        );
    }

    #[test]
    fn descending_cutoffs_are_rejected() {
        let err = ThresholdScale::new(vec![20.0, 10.0, 30.0], ramp()).unwrap_err();
        assert_eq!(err, PaletteError::CutoffsNotAscending);
    }

    #[test]
    fn css_colors_parse_from_hex_and_names() {
        assert_eq!(Rgb::from_css("#a04000").unwrap(), Rgb::new(0xa0, 0x40, 0x00));
        assert_eq!(
            Rgb::from_css("DarkOliveGreen").unwrap(),
            Rgb::new(0x55, 0x6b, 0x2f)
        );
        assert!(Rgb::from_css("#12345").is_err());
        assert!(Rgb::from_css("chartreuse-ish").is_err());
    }

    #[test]
    fn rgb_displays_as_hex() {
        assert_eq!(Rgb::new(0xed, 0xbb, 0x99).to_string(), "#edbb99");
    }
}
