//! Colour type, named colours, and resolution.
//!
//! Colour input never fails: anything that does not resolve to a named colour
//! or a six-digit hex value becomes [`Colour::FALLBACK`].

use std::fmt;
use std::str::FromStr;

use crate::error::{AvatarError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// The fixed named-colour vocabulary, matched case-insensitively.
pub const NAMED_COLOURS: [(&str, &str); 15] = [
    ("red", "#ef4444"),
    ("orange", "#f97316"),
    ("amber", "#f59e0b"),
    ("yellow", "#eab308"),
    ("lime", "#84cc16"),
    ("green", "#22c55e"),
    ("teal", "#14b8a6"),
    ("cyan", "#06b6d4"),
    ("blue", "#3b82f6"),
    ("indigo", "#6366f1"),
    ("purple", "#a855f7"),
    ("pink", "#ec4899"),
    ("gray", "#6b7280"),
    ("black", "#000000"),
    ("white", "#ffffff"),
];

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Returned for any colour input that cannot be resolved.
    pub const FALLBACK: Self = Self::rgb(59, 130, 246);

    /// Parse a strict `#RRGGBB` / `RRGGBB` hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AvatarError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RRGGBB format or a named colour".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }

    /// Resolve a colour spec: a named colour or a hex string.
    ///
    /// Never fails; unresolvable input yields [`Colour::FALLBACK`].
    pub fn resolve(spec: &str) -> Self {
        let hex = named_hex(spec).unwrap_or(spec);
        Self::from_hex(hex).unwrap_or(Self::FALLBACK)
    }

    /// Linear interpolation: `t = 0.0` is `self`, `t = 1.0` is `other`.
    ///
    /// Channels are rounded and clamped independently. Alpha is taken from
    /// `self` since generated pixels are always opaque.
    pub fn interpolate(self, other: Colour, t: f64) -> Colour {
        let lerp = |a: u8, b: u8| -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };

        Colour::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            self.a,
        )
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl FromStr for Colour {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Look up the hex value of a named colour.
pub fn named_hex(name: &str) -> Option<&'static str> {
    NAMED_COLOURS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| AvatarError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
