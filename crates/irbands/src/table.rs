use std::{
    fmt::Display,
    fs::File,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{Band, Error, Result, SpectralRange, consts::UNITS};

/// the bands of one molecule, in generation order, optionally restricted to a
/// wavelength window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub molecule: String,

    /// the window the bands were filtered to, if any
    pub range: Option<SpectralRange>,

    pub bands: Vec<Band>,
}

impl ResultTable {
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Band> {
        self.bands.iter()
    }

    /// look up a band by its label
    pub fn get(&self, label: &str) -> Option<&Band> {
        self.bands.iter().find(|b| b.label == label)
    }

    /// the smallest and largest wavelengths in the table, or `None` if it is
    /// empty
    pub fn wavelength_bounds(&self) -> Option<(f64, f64)> {
        self.bands.iter().fold(None, |acc, b| match acc {
            None => Some((b.wavelength, b.wavelength)),
            Some((lo, hi)) => {
                Some((f64::min(lo, b.wavelength), f64::max(hi, b.wavelength)))
            }
        })
    }

    /// write the rows as CSV with a header of `label,kind,frequency,wavelength`
    pub fn write_csv(&self, w: impl std::io::Write) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(w);
        for band in &self.bands {
            wtr.serialize(band)?;
        }
        // serialize only writes the header along with the first record
        if self.bands.is_empty() {
            wtr.write_record(["label", "kind", "frequency", "wavelength"])?;
        }
        wtr.flush().map_err(|e| Error::Export(e.to_string()))?;
        Ok(())
    }

    /// write the table to `<molecule>_absorptions.csv` in `dir` and return
    /// the path written
    pub fn export(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir
            .as_ref()
            .join(format!("{}_absorptions", self.molecule))
            .with_extension("csv");
        self.export_to(&path)?;
        Ok(path)
    }

    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let f = File::create(path).map_err(|e| Error::io(path.display(), e))?;
        self.write_csv(f)?;
        log::info!("wrote {} bands to {}", self.len(), path.display());
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a Band;
    type IntoIter = std::slice::Iter<'a, Band>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for ResultTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} Absorption Features", self.molecule)?;
        if let Some(SpectralRange { min, max }) = self.range {
            writeln!(f, "Range: {min} - {max} {UNITS}")?;
        }
        writeln!(
            f,
            "{:<12}{:>14}{:>14}{:>14}",
            "Label", "Type", "Freq (cm-1)", "Wvl (um)"
        )?;
        for band in &self.bands {
            writeln!(f, "{band}")?;
        }
        Ok(())
    }
}
