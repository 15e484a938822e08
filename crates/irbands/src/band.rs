use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::to_wavelength;

/// how a band arises from the fundamentals
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BandKind {
    /// first harmonic, the fundamental itself
    Fundamental,

    /// harmonic of order 2 or higher
    Overtone,

    /// fundamental + fundamental
    Pair,

    /// fundamental + fundamental + fundamental
    Triplet,
}

impl BandKind {
    pub const ALL: [BandKind; 4] = [
        BandKind::Fundamental,
        BandKind::Overtone,
        BandKind::Pair,
        BandKind::Triplet,
    ];

    /// the height of this kind's bars on the chart
    pub fn level(&self) -> f64 {
        match self {
            BandKind::Fundamental => 1.0,
            BandKind::Overtone => 0.9,
            BandKind::Pair => 0.8,
            BandKind::Triplet => 0.5,
        }
    }

    /// the abbreviated label used on the chart axis
    pub fn short(&self) -> &'static str {
        match self {
            BandKind::Fundamental => "fundamental",
            BandKind::Overtone => "overtone",
            BandKind::Pair => "f + f",
            BandKind::Triplet => "f + f + f",
        }
    }

    /// the kind plotted at `level`, if any
    pub fn from_level(level: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| (k.level() - level).abs() < 1e-6)
    }
}

impl Display for BandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            BandKind::Fundamental => "fundamental",
            BandKind::Overtone => "overtone",
            BandKind::Pair => "pair",
            BandKind::Triplet => "triplet",
        })
    }
}

/// a single absorption band. `wavelength` is always derived from `frequency`,
/// so the only way to build one is through [Band::new]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub label: String,
    pub kind: BandKind,

    /// frequency in cm⁻¹
    pub frequency: f64,

    /// wavelength in microns
    pub wavelength: f64,
}

impl Band {
    pub fn new(label: impl Into<String>, kind: BandKind, frequency: f64) -> Self {
        Self {
            label: label.into(),
            kind,
            frequency,
            wavelength: to_wavelength(frequency),
        }
    }
}

impl Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<12}{:>14}{:>14.1}{:>14.4}",
            self.label,
            self.kind.short(),
            self.frequency,
            self.wavelength
        )
    }
}
