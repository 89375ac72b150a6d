//! Pattern synthesizers.
//!
//! Each synthesizer is an immutable value mapping `(x, y, size)` to a colour.
//! The closed [`Synthesizer`] enum dispatches between them, and
//! [`GeneratorKind::select`] turns a type tag into a kind.

mod gradient;
mod pixelize;
mod sequence;
mod wave;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, Result};
use crate::types::Colour;

pub use gradient::{Gradient, DEFAULT_ANGLE};
pub use pixelize::{Pixelize, GRID_HALF, GRID_SIZE};
pub use sequence::{string_hash, SeededSequence};
pub use wave::{Wave, WaveParams};

/// Maps pixel coordinates at a given edge length to a colour.
pub trait PatternSynthesizer {
    fn colour_at(&self, x: u32, y: u32, size: u32) -> Colour;
}

/// The available generator algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    #[default]
    Pixelize,
    Wave,
    Gradient,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::Pixelize,
        GeneratorKind::Wave,
        GeneratorKind::Gradient,
    ];

    /// Resolve a type tag, case-insensitively. `None` selects the default.
    pub fn select(tag: Option<&str>) -> Result<Self> {
        let Some(tag) = tag else {
            return Ok(Self::default());
        };

        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(tag))
            .ok_or_else(|| AvatarError::UnsupportedGeneratorType(tag.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Pixelize => "pixelize",
            GeneratorKind::Wave => "wave",
            GeneratorKind::Gradient => "gradient",
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::select(Some(s))
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A ready-to-render synthesizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Synthesizer {
    Pixelize(Pixelize),
    Wave(Wave),
    Gradient(Gradient),
}

impl Synthesizer {
    /// Build the synthesizer for `kind`.
    ///
    /// `sequence` is ignored by the gradient, `angle` by everything else.
    pub fn new(
        kind: GeneratorKind,
        primary: Colour,
        foreign: Colour,
        sequence: SeededSequence,
        angle: f64,
    ) -> Self {
        match kind {
            GeneratorKind::Pixelize => Synthesizer::Pixelize(Pixelize::new(primary, foreign, sequence)),
            GeneratorKind::Wave => Synthesizer::Wave(Wave::new(primary, foreign, sequence)),
            GeneratorKind::Gradient => Synthesizer::Gradient(Gradient::new(primary, foreign, angle)),
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        match self {
            Synthesizer::Pixelize(_) => GeneratorKind::Pixelize,
            Synthesizer::Wave(_) => GeneratorKind::Wave,
            Synthesizer::Gradient(_) => GeneratorKind::Gradient,
        }
    }
}

impl PatternSynthesizer for Synthesizer {
    fn colour_at(&self, x: u32, y: u32, size: u32) -> Colour {
        match self {
            Synthesizer::Pixelize(p) => p.colour_at(x, y, size),
            Synthesizer::Wave(w) => w.colour_at(x, y, size),
            Synthesizer::Gradient(g) => g.colour_at(x, y, size),
        }
    }
}
