//! Penetration depths and field profiles across the three kernels.

use sc_theory::bcs::{self, BcsKernel};
use sc_theory::kernel::{self, ElectrodynamicKernel};
use sc_theory::pippard::{self, PippardKernel};
use sc_theory::{MaterialParameters, Numerics, Status, TemperatureLaw, london};

fn clean(xi0: f64, lambda: f64) -> MaterialParameters {
    MaterialParameters::clean(9.25, xi0, lambda).unwrap()
}

#[test]
fn extreme_anomalous_limit() {
    let numerics = Numerics::default();
    let params = clean(1e6, 1.0);
    let law = TemperatureLaw::default();
    let lambda_inf = pippard::extreme_anomalous_penetration_depth(&params);
    let k = PippardKernel::new(0.0, &params, law, &numerics);

    // ∫B dz / B(0) tends to (8/9) λ∞
    let integrated = kernel::integrated_penetration_depth(&k, &numerics);
    assert!(
        (integrated.value / lambda_inf - 0.888946).abs() < 2e-3,
        "{}",
        integrated.value / lambda_inf
    );

    // the fixed point λ = K(1/λ)^{-1/2} tends to (8 / 3√3)^{1/3} λ∞
    let effective = pippard::penetration_depth(0.0, law, &params, &numerics);
    assert_eq!(effective.status, Status::Converged);
    assert!(
        (effective.value / lambda_inf - 1.154737).abs() < 2e-3,
        "{}",
        effective.value / lambda_inf
    );
}

#[test]
fn short_mean_free_path_keeps_london_depth() {
    // ℓ ≪ ξ₀: ξ(0) ≈ 4.4 nm, well inside λ_L
    let numerics = Numerics::default();
    let params = MaterialParameters::new(9.25, 39.0, 5.0, 39.0).unwrap();
    let law = TemperatureLaw::default();
    let k = PippardKernel::new(0.0, &params, law, &numerics);
    assert!((k.kernel(0.0) * 39.0 * 39.0 - 1.0).abs() < 1e-12);
    let depth = pippard::penetration_depth(0.0, law, &params, &numerics);
    assert_eq!(depth.status, Status::Converged);
    assert!(depth.value > 39.0 && depth.value < 45.0, "{}", depth.value);
}

#[test]
fn pippard_field_profile() {
    let numerics = Numerics::default();
    let params = clean(100.0, 50.0);
    let law = TemperatureLaw::default();
    for (z, expected) in [(10.0, 0.86572), (50.0, 0.441584), (100.0, 0.163145)] {
        let b = pippard::reduced_field_penetration(z, 0.0, law, &params, &numerics);
        assert!((b.value - expected).abs() < 1e-3, "B({z}) = {}, expected {expected}", b.value);
    }
    // non-locality slows the initial decay relative to London
    let local = london::reduced_field_penetration(10.0, 0.0, law, &params, &numerics).value;
    let nonlocal = pippard::reduced_field_penetration(10.0, 0.0, law, &params, &numerics).value;
    assert!(nonlocal > local);
}

#[test]
fn field_profile_is_monotone_and_scales_with_applied_field() {
    let numerics = Numerics::default();
    let params = clean(39.0, 39.0);
    let law = TemperatureLaw::default();
    let mut previous = 1.0;
    for z in [5.0, 20.0, 40.0, 80.0] {
        let b = pippard::reduced_field_penetration(z, 0.3, law, &params, &numerics).value;
        assert!(b < previous && b > 0.0, "B({z}) = {b}");
        previous = b;
    }
    let reduced = pippard::reduced_field_penetration(30.0, 0.3, law, &params, &numerics).value;
    let absolute = pippard::field_penetration(30.0, 0.2, 0.3, law, &params, &numerics).value;
    assert!((absolute - 0.2 * reduced).abs() < 1e-15);
}

#[test]
fn deep_field_profile_stays_non_negative() {
    let numerics = Numerics::default();
    let params = clean(39.0, 39.0);
    let law = TemperatureLaw::default();
    for z in [400.0, 1000.0] {
        let bcs = bcs::reduced_field_penetration(z, 0.5, &params, &numerics).value;
        let pippard = pippard::reduced_field_penetration(z, 0.5, law, &params, &numerics).value;
        assert!((0.0..1e-3).contains(&bcs), "BCS B({z}) = {bcs}");
        assert!((0.0..1e-3).contains(&pippard), "Pippard B({z}) = {pippard}");
    }
}

#[test]
fn bcs_local_depth_follows_superfluid_density() {
    let numerics = Numerics::default();
    let params = clean(39.0, 39.0);
    let zero = kernel::local_penetration_depth(&BcsKernel::new(0.0, &params, &numerics));
    let half = kernel::local_penetration_depth(&BcsKernel::new(0.5, &params, &numerics));
    assert!((zero.value - 39.0).abs() < 1e-6 * 39.0);
    let ratio = half.value / zero.value;
    assert!((ratio - 1.09498).abs() < 2e-4, "{ratio}");
}

#[test]
fn depth_grows_with_temperature() {
    let numerics = Numerics::default();
    let params = clean(39.0, 39.0);
    let law = TemperatureLaw::BcsGap;
    let ts = [0.0, 0.3, 0.6, 0.85];
    let bcs_depths: Vec<f64> = ts
        .iter()
        .map(|&t| bcs::penetration_depth(t, &params, &numerics).value)
        .collect();
    let pippard_depths: Vec<f64> = ts
        .iter()
        .map(|&t| pippard::penetration_depth(t, law, &params, &numerics).value)
        .collect();
    assert!(bcs_depths.windows(2).all(|w| w[1] > w[0]), "{bcs_depths:?}");
    assert!(pippard_depths.windows(2).all(|w| w[1] > w[0]), "{pippard_depths:?}");

    let reduced = bcs::reduced_penetration_depth(0.6, &params, &numerics).value;
    assert!((reduced - bcs_depths[2] / bcs_depths[0]).abs() < 1e-12);
}

#[test]
fn non_local_depth_exceeds_london() {
    // ξ₀ comparable to λ_L: the effective depth is longer than λ_L
    let numerics = Numerics::default();
    let params = clean(39.0, 39.0);
    let depth = bcs::penetration_depth(0.0, &params, &numerics).value;
    assert!(depth > 39.0 && depth < 60.0, "{depth}");
}

#[test]
fn every_kernel_is_singular_at_tc() {
    let numerics = Numerics::default();
    let params = clean(39.0, 39.0);
    let law = TemperatureLaw::default();
    let kernels: Vec<Box<dyn ElectrodynamicKernel + '_>> = vec![
        Box::new(london::LondonKernel::new(1.0, &params, law, &numerics)),
        Box::new(PippardKernel::new(1.0, &params, law, &numerics)),
        Box::new(BcsKernel::new(1.0, &params, &numerics)),
    ];
    for k in &kernels {
        assert_eq!(k.kernel(0.01), 0.0);
        let depth = kernel::effective_penetration_depth(k.as_ref(), &numerics);
        assert!(depth.value.is_infinite());
        assert_eq!(depth.status, Status::Singular);
        assert_eq!(kernel::reduced_field_penetration(k.as_ref(), 50.0, &numerics).value, 1.0);
    }
}
