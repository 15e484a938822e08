//! harmonic and combination band generation

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    Band, BandKind, Error, Fundamental, Result, consts::WVN_TO_MICRONS,
};

/// convert `frequency` in cm⁻¹ to a wavelength in microns
pub fn to_wavelength(frequency: f64) -> f64 {
    WVN_TO_MICRONS / frequency
}

/// convert `wavelength` in microns to a frequency in cm⁻¹
pub fn to_frequency(wavelength: f64) -> f64 {
    WVN_TO_MICRONS / wavelength
}

/// an inclusive wavelength window in microns
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpectralRange {
    pub min: f64,
    pub max: f64,
}

impl SpectralRange {
    /// fails if either bound is not finite or if `min > max`
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, wavelength: f64) -> bool {
        self.min <= wavelength && wavelength <= self.max
    }
}

impl TryFrom<[f64; 2]> for SpectralRange {
    type Error = Error;

    fn try_from([min, max]: [f64; 2]) -> Result<Self> {
        Self::new(min, max)
    }
}

/// the harmonic series of each fundamental from order 1 to `max_order`. order
/// 1 is the fundamental itself and keeps its bare name, higher orders are
/// labeled like `2×v1`
pub fn compute_overtones(
    fundamentals: &[Fundamental],
    max_order: usize,
) -> Vec<Band> {
    let mut ret = Vec::with_capacity(fundamentals.len() * max_order);
    for f in fundamentals {
        let (name, frequency) = (f.name(), f.frequency());
        for order in 1..=max_order {
            let band = if order == 1 {
                Band::new(name, BandKind::Fundamental, frequency)
            } else {
                Band::new(
                    format!("{order}×{name}"),
                    BandKind::Overtone,
                    order as f64 * frequency,
                )
            };
            trace!("{band}");
            ret.push(band);
        }
    }
    debug!("computed {} harmonic bands", ret.len());
    ret
}

/// every unordered pair and then every unordered triplet of `fundamentals`,
/// with frequencies summed and names joined by `+`
pub fn compute_combinations(fundamentals: &[Fundamental]) -> Vec<Band> {
    let n = fundamentals.len();
    let mut ret = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            ret.push(combine(
                BandKind::Pair,
                &[&fundamentals[i], &fundamentals[j]],
            ));
        }
    }
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                ret.push(combine(BandKind::Triplet, &[
                    &fundamentals[i],
                    &fundamentals[j],
                    &fundamentals[k],
                ]));
            }
        }
    }
    debug!("computed {} combination bands", ret.len());
    ret
}

fn combine(kind: BandKind, modes: &[&Fundamental]) -> Band {
    let label = modes
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join("+");
    let frequency = modes.iter().map(|m| m.frequency()).sum();
    let band = Band::new(label, kind, frequency);
    trace!("{band}");
    band
}

/// keep the bands whose wavelength lies within `[range[0], range[1]]`,
/// inclusive. reversed or non-finite bounds are an error
pub fn filter_range(bands: Vec<Band>, range: [f64; 2]) -> Result<Vec<Band>> {
    let range = SpectralRange::try_from(range)?;
    Ok(filter_in(bands, &range))
}

pub(crate) fn filter_in(bands: Vec<Band>, range: &SpectralRange) -> Vec<Band> {
    let before = bands.len();
    let ret: Vec<_> = bands
        .into_iter()
        .filter(|b| range.contains(b.wavelength))
        .collect();
    debug!(
        "dropped {} of {before} bands outside [{}, {}]",
        before - ret.len(),
        range.min,
        range.max
    );
    ret
}
