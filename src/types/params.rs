//! Generation request parameters and their validation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AvatarError, Result};
use crate::synth::{GeneratorKind, SeededSequence, Synthesizer, DEFAULT_ANGLE};
use crate::types::{Colour, ColourScheme};

/// Longest accepted seed, in UTF-16 code units.
pub const MAX_SEED_LEN: usize = 32;

/// Primary colour when neither a colour nor a scheme is given.
pub const DEFAULT_PRIMARY: &str = "#3b82f6";

/// Foreign colour when neither a colour nor a scheme is given.
pub const DEFAULT_FOREIGN: &str = "#ffffff";

/// A generation request, as received from a caller.
///
/// Field names follow the JSON request contract (`primaryColor`, `type`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_color: Option<String>,

    /// Overrides both colours when it names a scheme of the selected type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Gradient direction in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

impl GenerationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_colours(mut self, primary: impl Into<String>, foreign: impl Into<String>) -> Self {
        self.primary_color = Some(primary.into());
        self.foreign_color = Some(foreign.into());
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = Some(scheme.into());
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Validate the request and return the selected generator kind.
    ///
    /// The type tag is checked first so an unsupported type fails before
    /// anything else is looked at.
    pub fn validate(&self) -> Result<GeneratorKind> {
        let kind = GeneratorKind::select(self.kind.as_deref())?;

        if let Some(seed) = &self.seed {
            // Measured in UTF-16 units, the same units the seed hash consumes.
            let len = seed.encode_utf16().count();
            if len > MAX_SEED_LEN {
                return Err(AvatarError::Validation {
                    message: format!("Seed is {} UTF-16 code units long", len),
                    help: Some(format!("Seeds are limited to {} UTF-16 code units", MAX_SEED_LEN)),
                });
            }
        }

        if let Some(angle) = self.angle {
            if !(0.0..=360.0).contains(&angle) {
                return Err(AvatarError::Validation {
                    message: format!("Angle out of range: {}", angle),
                    help: Some("Use an angle between 0 and 360 degrees".to_string()),
                });
            }
        }

        Ok(kind)
    }

    /// Validate and resolve into a concrete plan.
    pub fn plan(&self) -> Result<GenerationPlan> {
        let kind = self.validate()?;

        let mut primary = Colour::resolve(self.primary_color.as_deref().unwrap_or(DEFAULT_PRIMARY));
        let mut foreign = Colour::resolve(self.foreign_color.as_deref().unwrap_or(DEFAULT_FOREIGN));

        let scheme = match self.color_scheme.as_deref() {
            Some(name) => {
                let found = ColourScheme::find(kind, name);
                if found.is_none() {
                    debug!(scheme = name, %kind, "unknown colour scheme, keeping colours");
                }
                found
            }
            None => None,
        };

        if let Some(scheme) = scheme {
            (primary, foreign) = scheme.colours();
        }

        Ok(GenerationPlan {
            kind,
            primary,
            foreign,
            scheme,
            seed: self.seed.clone(),
            angle: self.angle.unwrap_or(DEFAULT_ANGLE),
        })
    }
}

/// A validated request with every colour resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPlan {
    pub kind: GeneratorKind,
    pub primary: Colour,
    pub foreign: Colour,
    pub scheme: Option<&'static ColourScheme>,
    pub seed: Option<String>,
    pub angle: f64,
}

impl GenerationPlan {
    /// Build the synthesizer. Without a seed, each call draws fresh entropy.
    pub fn synthesizer(&self) -> Synthesizer {
        let sequence = SeededSequence::from_optional_seed(self.seed.as_deref());
        Synthesizer::new(self.kind, self.primary, self.foreign, sequence, self.angle)
    }
}
