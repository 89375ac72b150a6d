//! Raw RGBA rasters and the multi-resolution renderer.
//!
//! Every generation renders the same synthesizer at all six canonical sizes.
//! Sizes are independent, so they can be rendered in parallel; each buffer is
//! owned by the task that fills it until the set is assembled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::error::{AvatarError, Result};
use crate::synth::{PatternSynthesizer, Synthesizer};
use crate::types::{Colour, Resolution};

/// A square RGBA pixel buffer (row-major, 4 bytes per pixel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    size: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Wrap an existing RGBA buffer. The length must be `size * size * 4`.
    pub fn from_rgba(size: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = (size as usize) * (size as usize) * 4;
        if pixels.len() != expected {
            return Err(AvatarError::Codec {
                message: format!(
                    "Buffer for {}x{} raster has {} bytes, expected {}",
                    size,
                    size,
                    pixels.len(),
                    expected
                ),
            });
        }
        Ok(Self { size, pixels })
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn resolution(&self) -> Option<Resolution> {
        Resolution::from_pixels(self.size)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let i = self.offset(x, y);
        let p = &self.pixels[i..i + 4];
        Some(Colour::new(p[0], p[1], p[2], p[3]))
    }

    /// The raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// A new raster with `f` applied to every pixel.
    pub fn map_pixels(&self, f: impl Fn(Colour) -> Colour) -> Raster {
        let pixels = self
            .pixels
            .chunks_exact(4)
            .flat_map(|p| f(Colour::new(p[0], p[1], p[2], p[3])).to_rgba())
            .collect();
        Raster {
            size: self.size,
            pixels,
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.size as usize) + (x as usize)) * 4
    }
}

/// One raster per canonical resolution, smallest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSet {
    rasters: Vec<Raster>,
}

impl RasterSet {
    /// Assemble a set. Rasters must cover [`Resolution::ALL`] in order.
    pub fn new(rasters: Vec<Raster>) -> Result<Self> {
        let sizes: Vec<u32> = rasters.iter().map(Raster::size).collect();
        let expected: Vec<u32> = Resolution::ALL.iter().map(|r| r.pixels()).collect();
        if sizes != expected {
            return Err(AvatarError::Validation {
                message: format!("Raster set has sizes {:?}", sizes),
                help: Some(format!("Expected exactly {:?}", expected)),
            });
        }
        Ok(Self { rasters })
    }

    pub fn get(&self, resolution: Resolution) -> &Raster {
        &self.rasters[(resolution.exponent() - Resolution::MIN_EXPONENT) as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Resolution, &Raster)> {
        Resolution::ALL.into_iter().zip(self.rasters.iter())
    }
}

/// Cooperative cancellation, checked once per rendered row.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that trips once `timeout` has elapsed from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            flag: Arc::default(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Cancel every render sharing this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed) || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Renderer settings.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render the six sizes on the rayon pool instead of sequentially.
    pub parallel: bool,
    pub cancel: CancelToken,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            cancel: CancelToken::new(),
        }
    }
}

/// Render `synth` at every canonical resolution.
///
/// On cancellation every partial buffer is dropped and `Cancelled` returned.
#[instrument(skip_all, fields(kind = %synth.kind(), parallel = options.parallel))]
pub fn render_all(synth: &Synthesizer, options: &RenderOptions) -> Result<RasterSet> {
    let started = Instant::now();

    let rasters: Vec<Raster> = if options.parallel {
        Resolution::ALL
            .par_iter()
            .map(|&r| render_size(synth, r, &options.cancel))
            .collect::<Result<_>>()?
    } else {
        Resolution::ALL
            .iter()
            .map(|&r| render_size(synth, r, &options.cancel))
            .collect::<Result<_>>()?
    };

    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "rendered raster set");
    RasterSet::new(rasters)
}

/// Render a single resolution, row-major, fully opaque.
pub fn render_size(
    synth: &impl PatternSynthesizer,
    resolution: Resolution,
    cancel: &CancelToken,
) -> Result<Raster> {
    let size = resolution.pixels();
    let mut pixels = Vec::with_capacity((size as usize) * (size as usize) * 4);

    for y in 0..size {
        if cancel.is_cancelled() {
            return Err(AvatarError::Cancelled { size });
        }
        for x in 0..size {
            let colour = synth.colour_at(x, y, size);
            pixels.extend_from_slice(&[colour.r, colour.g, colour.b, 255]);
        }
    }

    Ok(Raster { size, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{GeneratorKind, SeededSequence, DEFAULT_ANGLE};

    fn synth(kind: GeneratorKind, seed: &str) -> Synthesizer {
        Synthesizer::new(
            kind,
            Colour::BLACK,
            Colour::WHITE,
            SeededSequence::from_seed(seed),
            DEFAULT_ANGLE,
        )
    }

    #[test]
    fn test_render_all_sizes_and_opacity() {
        let set = render_all(&synth(GeneratorKind::Wave, "w"), &RenderOptions::default()).unwrap();

        for (resolution, raster) in set.iter() {
            let size = resolution.pixels();
            assert_eq!(raster.size(), size);
            assert_eq!(raster.as_bytes().len(), (size * size * 4) as usize);
            assert!(raster.as_bytes().chunks_exact(4).all(|p| p[3] == 255));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let s = synth(GeneratorKind::Pixelize, "par");
        let parallel = render_all(&s, &RenderOptions::default()).unwrap();
        let sequential = render_all(
            &s,
            &RenderOptions {
                parallel: false,
                ..RenderOptions::default()
            },
        )
        .unwrap();
        assert!(parallel == sequential);
    }

    #[test]
    fn test_sizes_share_pattern() {
        for kind in [GeneratorKind::Pixelize, GeneratorKind::Wave] {
            let set = render_all(&synth(kind, "shared"), &RenderOptions::default()).unwrap();
            let small = set.get(Resolution::ALL[0]);
            let large = set.get(Resolution::LARGEST);

            for y in 0..16 {
                for x in 0..16 {
                    assert_eq!(small.get(x, y), large.get(x * 32, y * 32), "{} at ({}, {})", kind, x, y);
                }
            }
        }
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let options = RenderOptions {
            parallel: false,
            cancel: token,
        };

        let err = render_all(&synth(GeneratorKind::Gradient, ""), &options).unwrap_err();
        assert!(matches!(err, AvatarError::Cancelled { size: 16 }));
    }

    #[test]
    fn test_expired_deadline_cancels() {
        let options = RenderOptions {
            parallel: true,
            cancel: CancelToken::with_timeout(Duration::ZERO),
        };
        let err = render_all(&synth(GeneratorKind::Wave, "late"), &options).unwrap_err();
        assert!(matches!(err, AvatarError::Cancelled { .. }));
    }

    #[test]
    fn test_raster_from_rgba_checks_length() {
        assert!(Raster::from_rgba(2, vec![0; 16]).is_ok());
        assert!(Raster::from_rgba(2, vec![0; 15]).is_err());
    }

    #[test]
    fn test_raster_get_bounds() {
        let raster = Raster::from_rgba(1, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(raster.get(0, 0), Some(Colour::new(1, 2, 3, 4)));
        assert_eq!(raster.get(1, 0), None);
    }

    #[test]
    fn test_raster_set_rejects_wrong_sizes() {
        let one = Raster::from_rgba(16, vec![0; 16 * 16 * 4]).unwrap();
        assert!(RasterSet::new(vec![one]).is_err());
    }
}
