//! The generation pipeline: request parameters to encoded avatar images.
//!
//! Everything here is synchronous, pure computation. Persistence lives in
//! [`crate::storage`]; [`crate::service`] combines the two.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::Result;
use crate::render::{
    decode_png, encode_png, render_all, FilterKind, RasterSet, RenderOptions,
};
use crate::synth::GeneratorKind;
use crate::types::{GenerationParams, GenerationPlan, Resolution};

/// PNG bytes keyed by edge length in pixels.
pub type EncodedImages = BTreeMap<u32, Vec<u8>>;

/// Descriptive record stored next to an avatar's images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarMetadata {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: GeneratorKind,
    /// Resolved primary colour as `#rrggbb`.
    pub primary_color: String,
    /// Resolved foreign colour as `#rrggbb`.
    pub foreign_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

impl AvatarMetadata {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>, plan: &GenerationPlan) -> Self {
        Self {
            id: id.into(),
            created_at,
            kind: plan.kind,
            primary_color: plan.primary.to_string(),
            foreign_color: plan.foreign.to_string(),
            color_scheme: plan.scheme.map(|s| s.name.to_string()),
            seed: plan.seed.clone(),
            angle: (plan.kind == GeneratorKind::Gradient).then_some(plan.angle),
        }
    }
}

/// A finished avatar: metadata plus one PNG per canonical size.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedAvatar {
    pub metadata: AvatarMetadata,
    pub images: EncodedImages,
}

impl GeneratedAvatar {
    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.metadata.created_at
    }

    /// PNG bytes for one resolution.
    pub fn image(&self, resolution: Resolution) -> Option<&[u8]> {
        self.images.get(&resolution.pixels()).map(Vec::as_slice)
    }
}

/// Validate `params` and render the raw raster set.
///
/// Validation, including the generator type, completes before any pixel is
/// synthesized.
#[instrument(skip_all, fields(kind = params.kind.as_deref().unwrap_or("default")))]
pub fn render_params(
    params: &GenerationParams,
    options: &RenderOptions,
) -> Result<(GenerationPlan, RasterSet)> {
    let plan = params.plan()?;
    debug!(
        kind = %plan.kind,
        primary = %plan.primary,
        foreign = %plan.foreign,
        seeded = plan.seed.is_some(),
        "resolved generation plan"
    );

    let synth = plan.synthesizer();
    let rasters = render_all(&synth, options)?;
    Ok((plan, rasters))
}

/// Encode every raster in the set as PNG.
pub fn encode_set(rasters: &RasterSet) -> Result<EncodedImages> {
    rasters
        .iter()
        .map(|(resolution, raster)| encode_png(raster).map(|bytes| (resolution.pixels(), bytes)))
        .collect()
}

/// Generate a complete avatar with a fresh id and timestamp.
pub fn generate(params: &GenerationParams, options: &RenderOptions) -> Result<GeneratedAvatar> {
    let (plan, rasters) = render_params(params, options)?;
    let images = encode_set(&rasters)?;

    let metadata = AvatarMetadata::new(Uuid::new_v4().to_string(), Utc::now(), &plan);
    info!(id = %metadata.id, kind = %metadata.kind, "generated avatar");

    Ok(GeneratedAvatar { metadata, images })
}

/// Apply a read-time filter to PNG bytes.
///
/// `None` or an unrecognized filter name returns the input unchanged.
pub fn filter_png(bytes: &[u8], filter: Option<&str>) -> Result<Vec<u8>> {
    let Some(name) = filter else {
        return Ok(bytes.to_vec());
    };

    let Some(kind) = FilterKind::from_name(name) else {
        debug!(filter = name, "unknown filter, returning image unchanged");
        return Ok(bytes.to_vec());
    };

    let raster = decode_png(bytes)?;
    encode_png(&kind.apply(&raster))
}
