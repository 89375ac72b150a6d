//! The six canonical avatar resolutions.

use std::fmt;

use crate::error::{AvatarError, Result};

/// A power-of-two avatar size, stored as its exponent (4..=9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution(u8);

impl Resolution {
    pub const MIN_EXPONENT: u8 = 4;
    pub const MAX_EXPONENT: u8 = 9;

    /// Every resolution, smallest first: 16, 32, 64, 128, 256, 512.
    pub const ALL: [Resolution; 6] = [
        Resolution(4),
        Resolution(5),
        Resolution(6),
        Resolution(7),
        Resolution(8),
        Resolution(9),
    ];

    /// The largest resolution (512x512).
    pub const LARGEST: Resolution = Resolution(9);

    /// Validate a size exponent.
    pub fn from_exponent(exponent: u8) -> Result<Self> {
        if (Self::MIN_EXPONENT..=Self::MAX_EXPONENT).contains(&exponent) {
            Ok(Self(exponent))
        } else {
            Err(AvatarError::Validation {
                message: format!("Invalid size exponent: {}", exponent),
                help: Some(format!(
                    "Use an exponent between {} and {} (16 to 512 pixels)",
                    Self::MIN_EXPONENT,
                    Self::MAX_EXPONENT
                )),
            })
        }
    }

    /// Look up the resolution for an edge length in pixels.
    pub fn from_pixels(pixels: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.pixels() == pixels)
    }

    pub fn exponent(self) -> u8 {
        self.0
    }

    /// Edge length in pixels.
    pub fn pixels(self) -> u32 {
        1 << self.0
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.pixels(), self.pixels())
    }
}
