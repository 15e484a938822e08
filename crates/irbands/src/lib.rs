//! Overtone and combination absorption bands of IR active molecules.
//!
//! An [IrActiveBands] handle is bound to one [MoleculeProfile], either
//! preloaded from the [store] or supplied by the caller. From the profile's
//! fundamentals it generates the harmonic series of each mode and the pair
//! and triplet combination bands, converts them to wavelength, and filters
//! them to a window of interest:
//!
//! ```
//! use irbands::{IrActiveBands, NoRender};
//!
//! let h2o = IrActiveBands::new("H2O").unwrap();
//! let table = h2o
//!     .compute_combinations_and_show(Some([0.9, 4.0]), &mut NoRender)
//!     .unwrap();
//! assert_eq!(table.len(), 9);
//! ```

use log::info;

pub use band::{Band, BandKind};
pub use engine::{
    SpectralRange, compute_combinations, compute_overtones, filter_range,
    to_frequency, to_wavelength,
};
pub use error::{Error, Result};
pub use render::{NoRender, Render, SvgChart, TableWriter, TextChart};
pub use store::{Fundamental, MoleculeProfile, Unit};
pub use table::ResultTable;

mod band;
mod engine;
mod error;
mod table;

pub mod config;
pub mod consts;
pub mod render;
pub mod store;

#[cfg(test)]
mod tests;

/// the bands of a single molecule
#[derive(Clone, Debug, PartialEq)]
pub struct IrActiveBands {
    profile: MoleculeProfile,
    max_order: usize,
}

impl IrActiveBands {
    /// bind to the preloaded profile for `molecule`. fails with
    /// [Error::UnknownMolecule] if there isn't one
    pub fn new(molecule: &str) -> Result<Self> {
        Self::from_profile(store::lookup(molecule)?)
    }

    /// bind to a caller-supplied profile. fails if the profile is empty or
    /// has a frequency that is not finite and positive
    pub fn from_profile(profile: MoleculeProfile) -> Result<Self> {
        profile.validate()?;
        Ok(Self {
            profile,
            max_order: consts::DEFAULT_MAX_ORDER,
        })
    }

    /// set the highest harmonic order generated by
    /// [IrActiveBands::compute_overtones]
    pub fn max_order(mut self, max_order: usize) -> Self {
        self.max_order = max_order;
        self
    }

    pub fn molecule(&self) -> &str {
        self.profile.identifier()
    }

    pub fn profile(&self) -> &MoleculeProfile {
        &self.profile
    }

    pub fn fundamentals(&self) -> &[Fundamental] {
        self.profile.fundamentals()
    }

    pub fn compute_overtones(&self) -> Vec<Band> {
        compute_overtones(self.fundamentals(), self.max_order)
    }

    pub fn compute_combinations(&self) -> Vec<Band> {
        compute_combinations(self.fundamentals())
    }

    /// every band in generation order, filtered to `range` if given. this is
    /// [IrActiveBands::compute_combinations_and_show] without the rendering
    pub fn absorptions(&self, range: Option<[f64; 2]>) -> Result<ResultTable> {
        // validate before doing any work so a bad range gives no partial
        // result
        let range = range.map(SpectralRange::try_from).transpose()?;
        info!("computing overtones of {}", self.molecule());
        let mut bands = self.compute_overtones();
        info!("computing combinations of {}", self.molecule());
        bands.extend(self.compute_combinations());
        if let Some(r) = &range {
            info!("dropping absorptions outside [{}, {}]", r.min, r.max);
            bands = engine::filter_in(bands, r);
        }
        Ok(ResultTable {
            molecule: self.profile.identifier().to_owned(),
            range,
            bands,
        })
    }

    /// compute the full table with [IrActiveBands::absorptions], draw it with
    /// `renderer`, and return it
    pub fn compute_combinations_and_show(
        &self,
        range: Option<[f64; 2]>,
        renderer: &mut dyn Render,
    ) -> Result<ResultTable> {
        let table = self.absorptions(range)?;
        info!("visualising {} absorptions", table.len());
        renderer.render(&table)?;
        Ok(table)
    }
}
