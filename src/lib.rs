//! pxavatar - Identicon-style avatar generator
//!
//! Turns a small set of request parameters (generator type, colours, seed,
//! angle) into a square avatar rendered at six power-of-two sizes, with
//! read-time filters and a file-backed store.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod render;
pub mod service;
pub mod storage;
pub mod synth;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use engine::{filter_png, generate, render_params, AvatarMetadata, EncodedImages, GeneratedAvatar};
pub use error::{AvatarError, Result};
pub use render::{
    apply_filter, decode_png, encode_png, render_all, CancelToken, FilterKind, Raster, RasterSet,
    RenderOptions,
};
pub use service::AvatarService;
pub use storage::{LocalStorage, Storage};
pub use synth::{GeneratorKind, PatternSynthesizer, SeededSequence, Synthesizer};
pub use types::{Colour, ColourScheme, GenerationParams, GenerationPlan, Resolution};
