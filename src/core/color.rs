use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{0}`")]
pub struct ColorParseError(pub String);

/// Straight (non-premultiplied) RGBA color, alpha in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)`
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        let err = || ColorParseError(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1).ok_or_else(err)?, 16).map_err(|_| err());
            let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2).ok_or_else(err)?, 16).map_err(|_| err());
            return match hex.len() {
                3 => Ok(Rgba::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
                6 => Ok(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
                8 => Ok(Rgba::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)? as f64 / 255.0)),
                _ => Err(err()),
            };
        }

        let (body, want_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(err());
        };
        let body = body.strip_suffix(')').ok_or_else(err)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != if want_alpha { 4 } else { 3 } {
            return Err(err());
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| err());
        let a = if want_alpha {
            let a = parts[3].parse::<f64>().map_err(|_| err())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(err());
            }
            a
        } else {
            1.0
        };
        Ok(Rgba::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
    }

    /// CSS `rgba(...)` string for canvas styles
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Same color with its alpha channel replaced (clamped to [0, 1])
#[inline]
pub fn with_alpha(color: Rgba, alpha: f64) -> Rgba {
    Rgba {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgba::parse(&s)
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Rgba::parse("#000").unwrap(), Rgba::BLACK);
        assert_eq!(Rgba::parse("#334155").unwrap(), Rgba::rgb(51, 65, 85));
        let c = Rgba::parse("#00741dff").unwrap();
        assert_eq!((c.r, c.g, c.b), (0, 0x74, 0x1d));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn parses_functional_forms() {
        assert_eq!(Rgba::parse("rgb(1, 2, 3)").unwrap(), Rgba::rgb(1, 2, 3));
        assert_eq!(
            Rgba::parse("rgba(51, 65, 85, 0.5)").unwrap(),
            Rgba::rgba(51, 65, 85, 0.5)
        );
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#12", "#gggggg", "rgb(1,2)", "rgba(1,2,3,2)", "red"] {
            assert!(Rgba::parse(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn with_alpha_replaces_and_clamps() {
        let c = Rgba::rgba(10, 20, 30, 0.3);
        assert_eq!(with_alpha(c, 0.75).a, 0.75);
        assert_eq!(with_alpha(c, 1.5).a, 1.0);
        assert_eq!(with_alpha(c, -1.0).a, 0.0);
        assert_eq!(with_alpha(c, 0.5).r, 10);
    }

    #[test]
    fn css_round_trips_through_parse() {
        let c = Rgba::rgba(255, 255, 255, 0.25);
        assert_eq!(c.css(), "rgba(255, 255, 255, 0.25)");
        assert_eq!(Rgba::parse(&c.css()).unwrap(), c);
    }
}
