//! tests of the [IrActiveBands] handle and utilities shared by the other
//! test modules

use approx::assert_abs_diff_eq;
use test_case::test_case;

use crate::*;

mod config;

/// the labels of `bands`, for comparing against expected lists
pub(crate) fn labels<'a>(bands: impl IntoIterator<Item = &'a Band>) -> Vec<&'a str> {
    bands.into_iter().map(|b| b.label.as_str()).collect()
}

#[test]
fn unknown_molecule() {
    let got = IrActiveBands::new("XYZ").unwrap_err();
    assert_eq!(got, Error::UnknownMolecule("XYZ".to_owned()));
    assert!(got.is_unknown_molecule());
    assert!(got.to_string().contains("H2O, OH, CO3"));
}

#[test]
fn h2o_absorptions() {
    let h2o = IrActiveBands::new("H2O").unwrap();
    let all = h2o.absorptions(None).unwrap();
    assert_eq!(all.len(), 10);
    assert_eq!(all.range, None);

    let got = h2o.absorptions(Some([0.9, 4.0])).unwrap();
    let want = all
        .iter()
        .filter(|b| 0.9 <= b.wavelength && b.wavelength <= 4.0)
        .count();
    assert_eq!(got.len(), want);
    assert_eq!(got.len(), 9);
    // v2 at 6.27 µm is the only band outside the window
    assert!(got.get("v2").is_none());
    assert_eq!(got.range, Some(SpectralRange { min: 0.9, max: 4.0 }));
}

#[test]
fn generation_order() {
    let h2o = IrActiveBands::new("H2O").unwrap();
    let got = h2o.absorptions(None).unwrap();
    assert_eq!(
        labels(&got),
        vec![
            "v1", "2×v1", "v2", "2×v2", "v3", "2×v3", "v1+v2", "v1+v3",
            "v2+v3", "v1+v2+v3"
        ]
    );
}

#[test]
fn inverted_range() {
    let h2o = IrActiveBands::new("H2O").unwrap();
    let got = h2o
        .compute_combinations_and_show(Some([4.0, 0.9]), &mut NoRender)
        .unwrap_err();
    assert!(got.is_invalid_range());
}

#[test]
fn empty_window() {
    let oh = IrActiveBands::new("OH").unwrap();
    let got = oh
        .compute_combinations_and_show(Some([20.0, 30.0]), &mut NoRender)
        .unwrap();
    assert!(got.is_empty());
    assert_eq!(got.molecule, "OH");
}

/// records the tables it is asked to draw
#[derive(Default)]
struct Spy(Vec<ResultTable>);

impl Render for Spy {
    fn render(&mut self, table: &ResultTable) -> Result<()> {
        self.0.push(table.clone());
        Ok(())
    }
}

#[test]
fn show_renders_returned_table() {
    let co3 = IrActiveBands::new("CO3").unwrap();
    let mut spy = Spy::default();
    let got = co3
        .compute_combinations_and_show(Some([2.5, 5.0]), &mut spy)
        .unwrap();
    assert_eq!(spy.0, vec![got]);
}

#[test]
fn no_render_on_error() {
    let co3 = IrActiveBands::new("CO3").unwrap();
    let mut spy = Spy::default();
    let _ = co3.compute_combinations_and_show(Some([f64::NAN, 5.0]), &mut spy);
    assert!(spy.0.is_empty());
}

#[test_case(1, 4 + 10 ; "order 1")]
#[test_case(2, 8 + 10 ; "order 2")]
#[test_case(3, 12 + 10 ; "order 3")]
fn max_order(order: usize, want: usize) {
    let co3 = IrActiveBands::new("CO3").unwrap().max_order(order);
    assert_eq!(co3.absorptions(None).unwrap().len(), want);
}

#[test]
fn zero_frequency_profile() {
    let got = serde_json::from_str::<MoleculeProfile>(
        r#"{"identifier":"X","fundamentals":[{"name":"v1","frequency":0.0}]}"#,
    );
    assert!(got.is_err());
    let got = MoleculeProfile::new("X", Unit::Wavenumber, [("v1", 0.0)])
        .and_then(IrActiveBands::from_profile)
        .unwrap_err();
    assert!(got.is_invalid_fundamental());
}

#[test]
fn custom_profile() {
    let so4 = MoleculeProfile::new(
        "SO4",
        Unit::Microns,
        [("v1", 10.0), ("v3", 8.0)],
    )
    .unwrap();
    let bands = IrActiveBands::from_profile(so4).unwrap();
    assert_eq!(bands.molecule(), "SO4");
    let got = bands.absorptions(None).unwrap();
    assert_eq!(labels(&got), vec!["v1", "2×v1", "v3", "2×v3", "v1+v3"]);
    // 1000 + 1250 cm⁻¹
    assert_abs_diff_eq!(
        got.get("v1+v3").unwrap().wavelength,
        10000.0 / 2250.0,
        epsilon = 1e-12
    );
}
