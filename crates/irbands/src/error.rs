use std::{error, fmt::Display};

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// the molecule identifier is not in the store
    UnknownMolecule(String),

    /// the wavelength bounds are inverted or not finite
    InvalidRange { min: f64, max: f64 },

    /// a fundamental frequency is not a finite, positive number
    InvalidFundamental { name: String, frequency: f64 },

    /// a molecule profile with no fundamentals
    EmptyProfile(String),

    Config(String),
    Io(String, std::io::ErrorKind),
    Render(String),
    Export(String),
}

impl Error {
    /// Returns `true` if the error is [`UnknownMolecule`].
    ///
    /// [`UnknownMolecule`]: Error::UnknownMolecule
    #[must_use]
    pub fn is_unknown_molecule(&self) -> bool {
        matches!(self, Self::UnknownMolecule(..))
    }

    /// Returns `true` if the error is [`InvalidRange`].
    ///
    /// [`InvalidRange`]: Error::InvalidRange
    #[must_use]
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }

    /// Returns `true` if the error is [`InvalidFundamental`].
    ///
    /// [`InvalidFundamental`]: Error::InvalidFundamental
    #[must_use]
    pub fn is_invalid_fundamental(&self) -> bool {
        matches!(self, Self::InvalidFundamental { .. })
    }

    /// Returns `true` if the error is [`EmptyProfile`].
    ///
    /// [`EmptyProfile`]: Error::EmptyProfile
    #[must_use]
    pub fn is_empty_profile(&self) -> bool {
        matches!(self, Self::EmptyProfile(..))
    }

    pub(crate) fn io(path: impl Display, e: std::io::Error) -> Self {
        Self::Io(format!("{path}: {e}"), e.kind())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownMolecule(m) => write!(
                f,
                "unknown molecule `{m}`. add its fundamentals to the store \
                 or use one of: {}",
                crate::store::known().join(", ")
            ),
            Error::InvalidRange { min, max } => {
                write!(f, "invalid wavelength range [{min}, {max}]")
            }
            Error::InvalidFundamental { name, frequency } => write!(
                f,
                "fundamental {name} has invalid frequency {frequency}"
            ),
            Error::EmptyProfile(m) => {
                write!(f, "molecule {m} has no fundamentals")
            }
            Error::Config(s) => write!(f, "config error: {s}"),
            Error::Io(s, kind) => write!(f, "{s} ({kind})"),
            Error::Render(s) => write!(f, "failed to render chart: {s}"),
            Error::Export(s) => write!(f, "failed to export table: {s}"),
        }
    }
}

impl error::Error for Error {}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Export(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Export(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
