//! Hebel-Slichter coherence peak from the Dynes density of states.

use sc_theory::dynes::{density_of_states, hebel_slichter_ratio};
use sc_theory::{MaterialParameters, Numerics, Status};

const ZEEMAN: f64 = 0.01;

fn niobium() -> MaterialParameters {
    MaterialParameters::clean(9.25, 39.0, 39.0)
        .and_then(|p| p.with_dynes_gamma(0.05))
        .unwrap()
}

#[test]
fn normal_state_ratio_is_unity() {
    let numerics = Numerics::default();
    for t in [1.0, 1.2] {
        let ratio = hebel_slichter_ratio(t, &niobium(), ZEEMAN, &numerics);
        assert!((ratio.value - 1.0).abs() < 0.01, "t = {t}: {}", ratio.value);
    }
}

#[test]
fn coherence_peak_below_tc() {
    let numerics = Numerics::default();
    let peak = hebel_slichter_ratio(0.9, &niobium(), ZEEMAN, &numerics);
    assert!(peak.value.is_finite());
    assert!(peak.value > 1.3, "{}", peak.value);
    assert!((peak.value - 1.539).abs() < 0.01, "{}", peak.value);
}

#[test]
fn relaxation_freezes_out_at_low_temperature() {
    let numerics = Numerics::default();
    let params = niobium();
    let mid = hebel_slichter_ratio(0.5, &params, ZEEMAN, &numerics).value;
    let cold = hebel_slichter_ratio(0.2, &params, ZEEMAN, &numerics).value;
    assert!((mid - 0.509).abs() < 0.01, "{mid}");
    assert!(cold < 0.05, "{cold}");
    assert!(cold > 0.0);
    assert_eq!(hebel_slichter_ratio(0.0, &params, ZEEMAN, &numerics).value, 0.0);
    assert_eq!(
        hebel_slichter_ratio(-1.0, &params, ZEEMAN, &numerics).status,
        Status::Clamped
    );
}

#[test]
fn broadened_density_approaches_normal_state() {
    for gamma in [0.0, 0.05, 0.2] {
        let n = density_of_states(50.0, gamma, 1.0);
        assert!((n - 1.0).abs() < 1e-3, "Γ = {gamma}: {n}");
    }
}
