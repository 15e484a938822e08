use std::path::PathBuf;

use tempfile::tempdir;

use crate::{
    Error, Fundamental, SpectralRange, config::Config, store::lookup,
};

#[test]
fn minimal() {
    let got = Config::parse(r#"molecule = "H2O""#).unwrap();
    assert_eq!(got, Config::new("H2O"));
    assert_eq!(got.profile().unwrap(), lookup("H2O").unwrap());
}

#[test]
fn full() {
    let got = Config::parse(
        r#"
molecule = "SO4"
range = [0.9, 4.0]
max_order = 3
chart = "so4.svg"
csv = "so4.csv"

[[molecules]]
name = "SO4"
unit = "microns"
fundamentals = [
    { name = "v1", value = 10.0 },
    { name = "v3", value = 8.0 },
]
"#,
    )
    .unwrap();
    assert_eq!(got.molecule, "SO4");
    assert_eq!(got.range, Some(SpectralRange { min: 0.9, max: 4.0 }));
    assert_eq!(got.max_order, 3);
    assert_eq!(got.chart, Some(PathBuf::from("so4.svg")));
    assert_eq!(got.csv, Some(PathBuf::from("so4.csv")));
    let p = got.profile().unwrap();
    assert_eq!(
        p.fundamentals(),
        vec![
            Fundamental::new("v1", 1000.0).unwrap(),
            Fundamental::new("v3", 1250.0).unwrap(),
        ]
    );
}

#[test]
fn custom_overrides_store() {
    let got = Config::parse(
        r#"
molecule = "OH"

[[molecules]]
name = "OH"
fundamentals = [{ name = "v1", value = 3600.0 }]
"#,
    )
    .unwrap();
    assert_eq!(got.profile().unwrap().fundamentals()[0].frequency(), 3600.0);
}

#[test]
fn unknown_molecule() {
    let got = Config::parse(r#"molecule = "XYZ""#).unwrap();
    assert!(got.profile().unwrap_err().is_unknown_molecule());
}

#[test]
fn reversed_range() {
    let got = Config::parse(
        r#"
molecule = "H2O"
range = [4.0, 0.9]
"#,
    )
    .unwrap_err();
    assert!(got.is_invalid_range());
}

#[test]
fn zero_order() {
    let got = Config::parse(
        r#"
molecule = "H2O"
max_order = 0
"#,
    )
    .unwrap_err();
    assert!(matches!(got, Error::Config(_)));
}

#[test]
fn unknown_field() {
    let got = Config::parse(
        r#"
molecule = "H2O"
anharmonic = true
"#,
    )
    .unwrap_err();
    assert!(matches!(got, Error::Config(s) if s.contains("anharmonic")));
}

#[test]
fn duplicate_molecule() {
    let got = Config::parse(
        r#"
molecule = "X"

[[molecules]]
name = "X"
fundamentals = [{ name = "v1", value = 1000.0 }]

[[molecules]]
name = "X"
fundamentals = [{ name = "v1", value = 2000.0 }]
"#,
    )
    .unwrap_err();
    assert!(matches!(got, Error::Config(s) if s.contains("more than once")));
}

#[test]
fn negative_fundamental() {
    let got = Config::parse(
        r#"
molecule = "X"

[[molecules]]
name = "X"
fundamentals = [{ name = "v1", value = -1000.0 }]
"#,
    )
    .unwrap_err();
    assert!(got.is_invalid_fundamental());
}

#[test]
fn load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("irbands.toml");
    std::fs::write(&path, "molecule = \"CO3\"\nrange = [2.5, 5.0]\n").unwrap();
    let got = Config::load(&path).unwrap();
    assert_eq!(
        got,
        Config::new("CO3").range(Some(SpectralRange::new(2.5, 5.0).unwrap()))
    );
}

#[test]
fn load_missing() {
    let got = Config::load("testfiles/does_not_exist.toml").unwrap_err();
    assert!(matches!(got, Error::Io(_, std::io::ErrorKind::NotFound)));
}

#[test]
fn display() {
    let got = Config::new("OH").max_order(3).to_string();
    assert_eq!(
        got,
        "Configuration Options:
molecule = OH
range = none
max_order = 3
chart = None
csv = None
"
    );
}

#[test]
fn testfile() {
    let got = Config::load("testfiles/test.toml").unwrap();
    assert_eq!(got.molecule, "CO3");
    assert_eq!(got.chart, Some(PathBuf::from("co3.svg")));
    assert_eq!(got.csv, None);
    assert_eq!(got.molecules.len(), 1);
    assert_eq!(got.molecules[0].identifier(), "SO4");
    assert_eq!(got.profile().unwrap(), lookup("CO3").unwrap());
}

#[test]
fn empty_molecule() {
    let got = Config::parse(
        r#"
molecule = "X"

[[molecules]]
name = "X"
fundamentals = []
"#,
    )
    .unwrap_err();
    assert!(matches!(got, Error::Config(s) if s.contains("no fundamentals")));
}
