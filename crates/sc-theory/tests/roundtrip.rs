//! Configuration and material files through YAML and JSON.

use sc_core::ScError;
use sc_theory::{
    MaterialParameters, Numerics, NumericsConfig, TemperatureLaw, TheoryError, bcs,
};

#[test]
fn numerics_config_roundtrips() {
    let mut config = NumericsConfig::default();
    config.gap.bandwidth_cutoff = 750.0;
    config.matsubara.max_terms = 2048;
    config.penetration.relaxation = 0.5;

    let yaml = config.to_yaml_string().unwrap();
    assert_eq!(NumericsConfig::from_yaml_str(&yaml).unwrap(), config);

    let json = config.to_json_string().unwrap();
    assert_eq!(NumericsConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn empty_document_is_the_default() {
    assert_eq!(NumericsConfig::from_json_str("{}").unwrap(), NumericsConfig::default());
    assert_eq!(NumericsConfig::from_yaml_str("{}").unwrap(), NumericsConfig::default());
}

#[test]
fn invalid_config_is_not_serialized() {
    let mut config = NumericsConfig::default();
    config.quadrature.order = 0;
    assert!(config.to_yaml_string().is_err());
    let err: ScError = Numerics::new(config).unwrap_err().into();
    assert!(err.to_string().contains("quadrature"), "{err}");
}

#[test]
fn custom_numerics_reach_the_solvers() {
    let mut config = NumericsConfig::default();
    config.gap.bandwidth_cutoff = 200.0;
    config.quadrature.order = 12;
    let coarse = Numerics::new(config).unwrap();
    let fine = Numerics::default();
    let a = bcs::reduced_gap(0.7, &coarse).value;
    let b = bcs::reduced_gap(0.7, &fine).value;
    // the cutoff only enters at O(1/Λ²)
    assert!((a - b).abs() < 1e-4, "{a} vs {b}");
}

#[test]
fn material_file_with_every_field() {
    let yaml = r#"
critical_temperature: 1.2
coherence_length: 1600.0
mean_free_path: 500.0
london_penetration_depth: 16.0
gap_mev: 0.18
dynes_gamma: 0.02
"#;
    let aluminium = MaterialParameters::from_yaml_str(yaml).unwrap();
    assert!(!aluminium.is_clean());
    assert_eq!(aluminium.zero_temperature_gap(), 0.18);

    let text = serde_yaml::to_string(&aluminium).unwrap();
    assert_eq!(MaterialParameters::from_yaml_str(&text).unwrap(), aluminium);

    let clean = MaterialParameters::clean(9.25, 39.0, 39.0).unwrap();
    let text = serde_yaml::to_string(&clean).unwrap();
    assert!(MaterialParameters::from_yaml_str(&text).unwrap().is_clean());
}

#[test]
fn invalid_material_file_is_rejected() {
    let json = r#"{
        "critical_temperature": -1.0,
        "coherence_length": 39.0,
        "london_penetration_depth": 39.0
    }"#;
    let err = MaterialParameters::from_json_str(json).unwrap_err();
    assert!(matches!(
        err,
        TheoryError::InvalidMaterial { what: "critical_temperature", .. }
    ));
}

#[test]
fn temperature_law_tags() {
    let law: TemperatureLaw = serde_yaml::from_str("law: bcs_gap").unwrap();
    assert_eq!(law, TemperatureLaw::BcsGap);
    let law: TemperatureLaw =
        serde_json::from_str(r#"{"law":"power_law","exponent":2.0}"#).unwrap();
    assert_eq!(law, TemperatureLaw::PowerLaw { exponent: 2.0 });
}
