//! Named colour schemes.
//!
//! Schemes are one shared table. Each row lists the generator kinds that
//! offer it, so the per-generator palettes overlap without being duplicated.

use crate::synth::GeneratorKind::{self, Gradient, Pixelize, Wave};
use crate::types::Colour;

/// A named primary/foreign colour pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourScheme {
    pub name: &'static str,
    pub primary: &'static str,
    pub foreign: &'static str,
    /// Generator kinds that offer this scheme.
    pub kinds: &'static [GeneratorKind],
}

const EVERY: &[GeneratorKind] = &[Pixelize, Wave, Gradient];

/// Every scheme known to any generator.
pub static SCHEMES: &[ColourScheme] = &[
    scheme("ocean", "#0ea5e9", "#e0f2fe", EVERY),
    scheme("sunset", "#f97316", "#fde68a", EVERY),
    scheme("midnight", "#1e1b4b", "#818cf8", EVERY),
    scheme("forest", "#15803d", "#dcfce7", &[Pixelize, Wave]),
    scheme("monochrome", "#111827", "#f9fafb", &[Pixelize, Gradient]),
    scheme("candy", "#ec4899", "#fce7f3", &[Pixelize]),
    scheme("retro", "#b45309", "#fef3c7", &[Pixelize]),
    scheme("lagoon", "#0d9488", "#99f6e4", &[Wave]),
    scheme("storm", "#334155", "#94a3b8", &[Wave]),
    scheme("aurora", "#22c55e", "#a855f7", &[Wave, Gradient]),
    scheme("fire", "#dc2626", "#facc15", &[Gradient]),
    scheme("peach", "#fb923c", "#fda4af", &[Gradient]),
    scheme("twilight", "#7c3aed", "#f472b6", &[Gradient]),
];

const fn scheme(
    name: &'static str,
    primary: &'static str,
    foreign: &'static str,
    kinds: &'static [GeneratorKind],
) -> ColourScheme {
    ColourScheme {
        name,
        primary,
        foreign,
        kinds,
    }
}

impl ColourScheme {
    /// Find a scheme offered by `kind`, matching the name case-insensitively.
    pub fn find(kind: GeneratorKind, name: &str) -> Option<&'static ColourScheme> {
        Self::for_kind(kind).find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// All schemes offered by `kind`, in table order.
    pub fn for_kind(kind: GeneratorKind) -> impl Iterator<Item = &'static ColourScheme> {
        SCHEMES.iter().filter(move |s| s.kinds.contains(&kind))
    }

    /// Resolved (primary, foreign) colours.
    pub fn colours(&self) -> (Colour, Colour) {
        (Colour::resolve(self.primary), Colour::resolve(self.foreign))
    }
}
