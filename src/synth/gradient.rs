//! Linear gradient between the two colours.
//!
//! Takes no sequence input: output depends only on the colours and angle.

use crate::types::Colour;

use super::PatternSynthesizer;

/// Angle used when none is given: top to bottom.
pub const DEFAULT_ANGLE: f64 = 90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    primary: Colour,
    foreign: Colour,
    direction: (f64, f64),
}

impl Gradient {
    /// `angle` is in degrees; 0 runs left to right, 90 top to bottom.
    pub fn new(primary: Colour, foreign: Colour, angle: f64) -> Self {
        let radians = angle.to_radians();
        Self {
            primary,
            foreign,
            direction: (radians.cos(), radians.sin()),
        }
    }

    /// Interpolation factor at normalized coordinates in `[-1, 1]`.
    pub fn factor(&self, nx: f64, ny: f64) -> f64 {
        let projection = nx * self.direction.0 + ny * self.direction.1;
        ((projection + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

impl PatternSynthesizer for Gradient {
    fn colour_at(&self, x: u32, y: u32, size: u32) -> Colour {
        let nx = normalize(x, size);
        let ny = normalize(y, size);
        self.primary.interpolate(self.foreign, self.factor(nx, ny))
    }
}

/// Map a pixel index onto `[-1, 1]`, endpoints inclusive.
fn normalize(coord: u32, size: u32) -> f64 {
    if size <= 1 {
        return 0.0;
    }
    f64::from(coord) / f64::from(size - 1) * 2.0 - 1.0
}
