//! Post-retrieval filters.
//!
//! Filters work on any decoded raster regardless of which generator produced
//! it, and always return a new raster. Alpha is never touched.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, RgbHue, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, Result};
use crate::types::Colour;

use super::Raster;

/// Sepia lightness multiplier.
const SEPIA_LIGHTNESS: f32 = 1.1;
/// Sepia saturation multiplier.
const SEPIA_SATURATION: f32 = 0.8;
/// Sepia hue rotation in degrees.
const SEPIA_HUE_SHIFT: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Grayscale,
    Sepia,
    Negative,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [FilterKind::Grayscale, FilterKind::Sepia, FilterKind::Negative];

    /// Look up a filter by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "grayscale",
            FilterKind::Sepia => "sepia",
            FilterKind::Negative => "negative",
        }
    }

    /// Transform a single pixel.
    pub fn apply_colour(self, colour: Colour) -> Colour {
        match self {
            FilterKind::Grayscale => grayscale(colour),
            FilterKind::Sepia => sepia(colour),
            FilterKind::Negative => negative(colour),
        }
    }

    pub fn apply(self, raster: &Raster) -> Raster {
        raster.map_pixels(|c| self.apply_colour(c))
    }
}

impl FromStr for FilterKind {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| AvatarError::Parse {
            message: format!("Unknown filter: {}", s),
            help: Some("Available filters: grayscale, sepia, negative".to_string()),
        })
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Apply a filter given by name. Unknown names and `None` return the raster
/// unchanged.
pub fn apply_filter(raster: &Raster, filter: Option<&str>) -> Raster {
    match filter.and_then(FilterKind::from_name) {
        Some(kind) => kind.apply(raster),
        None => raster.clone(),
    }
}

/// Rec. 601 luma.
fn grayscale(c: Colour) -> Colour {
    let luma = 0.299 * f32::from(c.r) + 0.587 * f32::from(c.g) + 0.114 * f32::from(c.b);
    let l = luma.round().clamp(0.0, 255.0) as u8;
    Colour::new(l, l, l, c.a)
}

/// Brighten, desaturate, and rotate the hue in HSL space.
fn sepia(c: Colour) -> Colour {
    let rgb: Srgb<f32> = Srgb::new(
        f32::from(c.r) / 255.0,
        f32::from(c.g) / 255.0,
        f32::from(c.b) / 255.0,
    );

    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness * SEPIA_LIGHTNESS).clamp(0.0, 1.0);
    hsl.saturation = (hsl.saturation * SEPIA_SATURATION).clamp(0.0, 1.0);
    hsl.hue = RgbHue::from_degrees(hsl.hue.into_positive_degrees() + SEPIA_HUE_SHIFT);

    let out: Srgb<f32> = hsl.into_color();
    Colour::new(
        channel(out.red),
        channel(out.green),
        channel(out.blue),
        c.a,
    )
}

fn negative(c: Colour) -> Colour {
    Colour::new(255 - c.r, 255 - c.g, 255 - c.b, c.a)
}

fn channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raster(pixels: &[[u8; 4]]) -> Raster {
        let size = (pixels.len() as f64).sqrt() as u32;
        Raster::from_rgba(size, pixels.concat()).unwrap()
    }

    #[test]
    fn test_from_name() {
        assert_eq!(FilterKind::from_name("SEPIA"), Some(FilterKind::Sepia));
        assert_eq!(FilterKind::from_name("blur"), None);
        assert!("negative".parse::<FilterKind>().is_ok());
        assert!("blur".parse::<FilterKind>().is_err());
    }

    #[test]
    fn test_negative() {
        let c = FilterKind::Negative.apply_colour(Colour::new(10, 200, 255, 77));
        assert_eq!(c, Colour::new(245, 55, 0, 77));
    }

    #[test]
    fn test_negative_twice_is_identity() {
        let c = Colour::rgb(12, 34, 56);
        let f = FilterKind::Negative;
        assert_eq!(f.apply_colour(f.apply_colour(c)), c);
    }

    #[test]
    fn test_grayscale_weights() {
        assert_eq!(FilterKind::Grayscale.apply_colour(Colour::WHITE), Colour::WHITE);
        assert_eq!(FilterKind::Grayscale.apply_colour(Colour::BLACK), Colour::BLACK);
        assert_eq!(
            FilterKind::Grayscale.apply_colour(Colour::rgb(255, 0, 0)),
            Colour::rgb(76, 76, 76)
        );
        assert_eq!(
            FilterKind::Grayscale.apply_colour(Colour::rgb(0, 255, 0)),
            Colour::rgb(150, 150, 150)
        );
    }

    #[test]
    fn test_sepia_keeps_greys_grey() {
        // Zero saturation: hue rotation has no effect, only lightness changes.
        let out = FilterKind::Sepia.apply_colour(Colour::rgb(100, 100, 100));
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
        assert!(out.r > 100);
    }

    #[test]
    fn test_sepia_rotates_red_toward_orange() {
        let out = FilterKind::Sepia.apply_colour(Colour::rgb(200, 0, 0));
        assert!(out.r > out.g && out.g > out.b, "{:?}", out);
    }

    #[test]
    fn test_sepia_preserves_alpha() {
        let out = FilterKind::Sepia.apply_colour(Colour::new(50, 60, 70, 128));
        assert_eq!(out.a, 128);
    }

    #[test]
    fn test_apply_to_raster() {
        let r = raster(&[[0, 0, 0, 255], [255, 255, 255, 255], [10, 20, 30, 255], [1, 1, 1, 255]]);
        let out = FilterKind::Negative.apply(&r);
        assert_eq!(out.get(0, 0), Some(Colour::WHITE));
        assert_eq!(out.get(1, 0), Some(Colour::BLACK));
        // Original is untouched.
        assert_eq!(r.get(0, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{:<10}|", FilterKind::Sepia), "sepia     |");
        assert_eq!(FilterKind::Negative.to_string(), "negative");
    }

    #[test]
    fn test_unknown_filter_passes_through() {
        let r = raster(&[[1, 2, 3, 255]]);
        assert_eq!(apply_filter(&r, Some("vignette")), r);
        assert_eq!(apply_filter(&r, None), r);
        assert_ne!(apply_filter(&r, Some("negative")), r);
    }
}
