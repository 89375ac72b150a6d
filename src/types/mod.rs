//! Core domain types for pxavatar.
//!
//! - `Colour` - RGBA colour values and colour-spec resolution
//! - `ColourScheme` - Named primary/foreign pairings per generator
//! - `GenerationParams` - A generation request and its validation
//! - `Resolution` - The six canonical avatar sizes

mod colour;
mod params;
mod resolution;
mod scheme;

pub use colour::{named_hex, Colour, NAMED_COLOURS};
pub use params::{
    GenerationParams, GenerationPlan, DEFAULT_FOREIGN, DEFAULT_PRIMARY, MAX_SEED_LEN,
};
pub use resolution::Resolution;
pub use scheme::{ColourScheme, SCHEMES};
