//! Configuration settings for a run of the band calculator

use std::{
    fmt::{Debug, Display},
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    Error, MoleculeProfile, Result, SpectralRange, consts::DEFAULT_MAX_ORDER,
    store::{self, Unit},
};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMode {
    name: String,
    value: f64,
}

/// A user-defined molecule. Band centres are in `unit`, which defaults to
/// wavenumbers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMolecule {
    name: String,
    #[serde(default)]
    unit: Unit,
    fundamentals: Vec<RawMode>,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    /// The identifier of the molecule to compute bands for. This can be one
    /// of the preloaded molecules or one of the entries in `molecules`.
    molecule: String,

    /// The wavelength window in microns to keep, as `[min, max]`. All bands
    /// are kept when this is omitted.
    range: Option<[f64; 2]>,

    /// The highest harmonic order to generate for each fundamental. Defaults
    /// to 2.
    max_order: Option<usize>,

    /// Where to write the SVG bar chart, if anywhere.
    chart: Option<PathBuf>,

    /// Where to write the CSV table, if anywhere.
    csv: Option<PathBuf>,

    /// Additional molecules, used in preference to the preloaded profiles
    /// with the same name.
    #[serde(default)]
    molecules: Vec<RawMolecule>,
}

/// Construct a full `Config` using [Config::load] on a TOML file or use
/// [Config::new] and the builder methods
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// the molecule to compute bands for
    pub molecule: String,

    /// the window to filter to. `None` keeps every band
    pub range: Option<SpectralRange>,

    /// highest harmonic order
    pub max_order: usize,

    /// SVG output path
    pub chart: Option<PathBuf>,

    /// CSV output path
    pub csv: Option<PathBuf>,

    /// user-defined profiles from the `[[molecules]]` tables
    pub molecules: Vec<MoleculeProfile>,
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(rc: RawConfig) -> Result<Self> {
        let range = rc.range.map(SpectralRange::try_from).transpose()?;
        let molecules = rc
            .molecules
            .into_iter()
            .map(|m| {
                MoleculeProfile::new(
                    m.name,
                    m.unit,
                    m.fundamentals.into_iter().map(|f| (f.name, f.value)),
                )
                .map_err(|e| match e {
                    Error::EmptyProfile(name) => Error::Config(format!(
                        "[[molecules]] entry {name} has no fundamentals"
                    )),
                    e => e,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            molecule: rc.molecule,
            range,
            max_order: rc.max_order.unwrap_or(DEFAULT_MAX_ORDER),
            chart: rc.chart,
            csv: rc.csv,
            molecules,
        })
    }
}

impl Config {
    /// Construct a [Config] for `molecule` with no range, `max_order` 2, no
    /// output files, and no extra molecules
    pub fn new(molecule: impl Into<String>) -> Self {
        Self {
            molecule: molecule.into(),
            range: None,
            max_order: DEFAULT_MAX_ORDER,
            chart: None,
            csv: None,
            molecules: Vec::new(),
        }
    }

    pub fn range(mut self, range: Option<SpectralRange>) -> Self {
        self.range = range;
        self
    }

    pub fn max_order(mut self, max_order: usize) -> Self {
        self.max_order = max_order;
        self
    }

    pub fn chart(mut self, chart: Option<PathBuf>) -> Self {
        self.chart = chart;
        self
    }

    pub fn csv(mut self, csv: Option<PathBuf>) -> Self {
        self.csv = csv;
        self
    }

    /// parse a [Config] from the TOML in `s`
    pub fn parse(s: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        let ret = Self::try_from(raw)?;
        ret.validate()?;
        Ok(ret)
    }

    /// load a [Config] from the TOML file specified by `filename`
    pub fn load<P>(filename: P) -> Result<Self>
    where
        P: AsRef<Path> + Debug,
    {
        let contents = std::fs::read_to_string(&filename)
            .map_err(|e| Error::io(format!("{filename:?}"), e))?;
        Self::parse(&contents).map_err(|e| match e {
            Error::Config(s) => Error::Config(format!("{filename:?}: {s}")),
            e => e,
        })
    }

    /// check that the settings in `self` make sense: a positive `max_order`
    /// and no duplicated molecule names
    pub fn validate(&self) -> Result<()> {
        if self.max_order == 0 {
            return Err(Error::Config("max_order must be at least 1".into()));
        }
        for (i, m) in self.molecules.iter().enumerate() {
            if self.molecules[..i]
                .iter()
                .any(|o| o.identifier() == m.identifier())
            {
                return Err(Error::Config(format!(
                    "molecule {} defined more than once",
                    m.identifier()
                )));
            }
        }
        Ok(())
    }

    /// the profile for [Config::molecule], preferring the user-defined
    /// molecules over the preloaded store
    pub fn profile(&self) -> Result<MoleculeProfile> {
        match self
            .molecules
            .iter()
            .find(|m| m.identifier() == self.molecule)
        {
            Some(p) => Ok(p.clone()),
            None => store::lookup(&self.molecule),
        }
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Config {
            molecule,
            range,
            max_order,
            chart,
            csv,
            molecules,
        } = self;
        writeln!(f, "Configuration Options:")?;
        writeln!(f, "molecule = {molecule}")?;
        match range {
            Some(SpectralRange { min, max }) => {
                writeln!(f, "range = [{min}, {max}]")?
            }
            None => writeln!(f, "range = none")?,
        }
        writeln!(f, "max_order = {max_order}")?;
        writeln!(f, "chart = {chart:?}")?;
        writeln!(f, "csv = {csv:?}")?;
        for m in molecules {
            writeln!(f, "molecule: {m}")?;
        }
        Ok(())
    }
}
