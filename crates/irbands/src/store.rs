//! Fundamental vibrational modes of the IR active molecules most relevant to
//! planetary mineralogy. Band centres for OH and CO3 are from Hunt, "Spectral
//! signatures of particulate minerals in the visible and near infrared",
//! Geophysics, 42, 3, pp. 501-511 (1977), DOI:10.1190/1.1440721, converted
//! to cm⁻¹.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, to_frequency};

/// preloaded molecule identifiers and their fundamentals in cm⁻¹, in mode
/// order
static FUNDAMENTALS: &[(&str, &[(&str, f64)])] = &[
    ("H2O", &[("v1", 3657.0), ("v2", 1595.0), ("v3", 3756.0)]),
    ("OH", &[("v1", 3636.0)]),
    (
        "CO3",
        &[("v1", 1083.0), ("v2", 880.0), ("v3", 1429.0), ("v4", 714.0)],
    ),
];

/// a single named vibrational mode. the frequency is always finite and
/// positive, including when deserialized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFundamental")]
pub struct Fundamental {
    name: String,

    /// frequency in cm⁻¹
    frequency: f64,
}

#[derive(Deserialize)]
struct RawFundamental {
    name: String,
    frequency: f64,
}

impl TryFrom<RawFundamental> for Fundamental {
    type Error = Error;

    fn try_from(raw: RawFundamental) -> Result<Self> {
        Self::new(raw.name, raw.frequency)
    }
}

impl Fundamental {
    pub fn new(name: impl Into<String>, frequency: f64) -> Result<Self> {
        let name = name.into();
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(Error::InvalidFundamental { name, frequency });
        }
        Ok(Self { name, frequency })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// frequency in cm⁻¹
    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

/// the unit a set of user-supplied band centres is given in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(alias = "wavenumber", alias = "cm-1")]
    Wavenumber,
    #[serde(alias = "microns", alias = "um")]
    Microns,
}

impl Unit {
    /// convert `value` in `self` units to cm⁻¹
    pub fn to_wavenumber(self, value: f64) -> f64 {
        match self {
            Unit::Wavenumber => value,
            Unit::Microns => to_frequency(value),
        }
    }
}

/// the ordered fundamentals of one molecule. a profile always has at least one
/// fundamental
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct MoleculeProfile {
    identifier: String,
    fundamentals: Vec<Fundamental>,
}

#[derive(Deserialize)]
struct RawProfile {
    identifier: String,
    fundamentals: Vec<Fundamental>,
}

impl TryFrom<RawProfile> for MoleculeProfile {
    type Error = Error;

    fn try_from(raw: RawProfile) -> Result<Self> {
        let ret = Self {
            identifier: raw.identifier,
            fundamentals: raw.fundamentals,
        };
        ret.validate()?;
        Ok(ret)
    }
}

impl MoleculeProfile {
    /// build a profile from `(name, value)` pairs given in `unit`. fails if
    /// there are no modes or if any of the converted frequencies is not
    /// positive
    pub fn new<S, I>(
        identifier: impl Into<String>,
        unit: Unit,
        modes: I,
    ) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let fundamentals = modes
            .into_iter()
            .map(|(name, v)| {
                let name = name.into();
                // reject before converting so the error shows the input
                if !v.is_finite() || v <= 0.0 {
                    return Err(Error::InvalidFundamental { name, frequency: v });
                }
                Fundamental::new(name, unit.to_wavenumber(v))
            })
            .collect::<Result<Vec<_>>>()?;
        let ret = Self {
            identifier: identifier.into(),
            fundamentals,
        };
        ret.validate()?;
        Ok(ret)
    }

    /// check that there is at least one fundamental and that every frequency
    /// is finite and positive
    pub fn validate(&self) -> Result<()> {
        if self.fundamentals.is_empty() {
            return Err(Error::EmptyProfile(self.identifier.clone()));
        }
        for f in &self.fundamentals {
            Fundamental::new(f.name.as_str(), f.frequency)?;
        }
        Ok(())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn fundamentals(&self) -> &[Fundamental] {
        &self.fundamentals
    }

    pub fn len(&self) -> usize {
        self.fundamentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fundamentals.is_empty()
    }
}

impl Display for MoleculeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<6}", self.identifier)?;
        for Fundamental { name, frequency } in &self.fundamentals {
            write!(f, "{name:>5} = {frequency:<8.1}")?;
        }
        Ok(())
    }
}

/// look up the preloaded profile for `molecule`
pub fn lookup(molecule: &str) -> Result<MoleculeProfile> {
    let (identifier, modes) = FUNDAMENTALS
        .iter()
        .find(|(id, _)| *id == molecule)
        .ok_or_else(|| Error::UnknownMolecule(molecule.to_owned()))?;
    Ok(MoleculeProfile {
        identifier: identifier.to_string(),
        fundamentals: modes
            .iter()
            .map(|&(name, frequency)| Fundamental {
                name: name.to_owned(),
                frequency,
            })
            .collect(),
    })
}

/// identifiers of all of the preloaded molecules
pub fn known() -> Vec<&'static str> {
    FUNDAMENTALS.iter().map(|(id, _)| *id).collect()
}

/// every preloaded profile, in store order
pub fn profiles() -> Vec<MoleculeProfile> {
    known()
        .into_iter()
        .filter_map(|id| lookup(id).ok())
        .collect()
}
