//! Interference-wave pattern.
//!
//! Two sine waves (one along each axis) averaged together, plus a radial
//! ripple from the centre. The sign of the sum picks the colour.

use std::f64::consts::{PI, TAU};

use crate::types::Colour;

use super::{PatternSynthesizer, SeededSequence};

/// Parameters drawn from the sequence, in draw order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub frequency_x: f64,
    pub frequency_y: f64,
    pub amplitude_x: f64,
    pub amplitude_y: f64,
    pub phase_x: f64,
    pub phase_y: f64,
}

impl WaveParams {
    pub fn draw(sequence: &mut SeededSequence) -> Self {
        Self {
            frequency_x: sequence.next_in(0.1, 0.3),
            frequency_y: sequence.next_in(0.15, 0.4),
            amplitude_x: sequence.next_in(0.3, 0.7),
            amplitude_y: sequence.next_in(0.2, 0.5),
            phase_x: sequence.next_in(0.0, TAU),
            phase_y: sequence.next_in(0.0, TAU),
        }
    }

    /// The combined field at normalized coordinates. Positive means primary.
    pub fn field(&self, nx: f64, ny: f64) -> f64 {
        let wave_x = (nx * self.frequency_x * TAU + self.phase_x).sin() * self.amplitude_x;
        let wave_y = (ny * self.frequency_y * TAU + self.phase_y).sin() * self.amplitude_y;
        let combined = (wave_x + wave_y) / 2.0;

        let distance = ((nx - 0.5).powi(2) + (ny - 0.5).powi(2)).sqrt();
        let radial = (distance * 4.0 * PI).sin() * 0.3;

        combined + radial
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    primary: Colour,
    foreign: Colour,
    params: WaveParams,
}

impl Wave {
    pub fn new(primary: Colour, foreign: Colour, mut sequence: SeededSequence) -> Self {
        Self {
            primary,
            foreign,
            params: WaveParams::draw(&mut sequence),
        }
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }
}

impl PatternSynthesizer for Wave {
    fn colour_at(&self, x: u32, y: u32, size: u32) -> Colour {
        let size = f64::from(size.max(1));
        let nx = f64::from(x) / size;
        let ny = f64::from(y) / size;

        if self.params.field(nx, ny) > 0.0 {
            self.primary
        } else {
            self.foreign
        }
    }
}
