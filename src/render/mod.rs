//! Rendering module for pxavatar.
//!
//! Turns a synthesizer into a set of raw rasters, converts rasters to and
//! from PNG, and applies read-time filters.

mod filter;
mod png;
mod raster;

pub use filter::{apply_filter, FilterKind};
pub use png::{decode_png, encode_png, write_png};
pub use raster::{render_all, render_size, CancelToken, Raster, RasterSet, RenderOptions};
