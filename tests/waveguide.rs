use approx::assert_relative_eq;
use rf_loss_toolbox::{
    material_db,
    rf::{self, RectWaveguideInput, SweepRange},
    waveguide_db,
};

const WR90_A: f64 = 0.02286;
const WR90_B: f64 = 0.01016;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn wr90_dominant_mode_cutoff() {
    let fc = rf::cutoff_frequency(WR90_A, WR90_B, 1, 0, 1.0, 1.0).expect("cutoff");
    assert_close(fc / 1e9, 6.557, 1e-3);

    let wg = waveguide_db::find_waveguide("wr90").expect("WR90");
    assert_relative_eq!(wg.dominant_cutoff_hz(), fc, max_relative = 1e-12);
}

#[test]
fn dielectric_fill_lowers_cutoff() {
    let air = rf::cutoff_frequency(WR90_A, WR90_B, 1, 0, 1.0, 1.0).unwrap();
    let ptfe = rf::cutoff_frequency(WR90_A, WR90_B, 1, 0, 1.0, 4.0).unwrap();
    assert_relative_eq!(ptfe, air / 2.0, max_relative = 1e-12);
}

#[test]
fn higher_modes_and_degenerate_mode() {
    let te10 = rf::cutoff_frequency(WR90_A, WR90_B, 1, 0, 1.0, 1.0).unwrap();
    let te20 = rf::cutoff_frequency(WR90_A, WR90_B, 2, 0, 1.0, 1.0).unwrap();
    let te11 = rf::cutoff_frequency(WR90_A, WR90_B, 1, 1, 1.0, 1.0).unwrap();
    assert_relative_eq!(te20, 2.0 * te10, max_relative = 1e-12);
    assert!(te11 > te20);
    assert_eq!(rf::cutoff_frequency(WR90_A, WR90_B, 0, 0, 1.0, 1.0).unwrap(), 0.0);
}

#[test]
fn invalid_geometry_is_rejected() {
    assert!(rf::cutoff_frequency(0.0, WR90_B, 1, 0, 1.0, 1.0).is_err());
    assert!(rf::cutoff_frequency(WR90_A, -1.0, 1, 0, 1.0, 1.0).is_err());
    assert!(rf::cutoff_frequency(WR90_A, WR90_B, 1, 0, 0.0, 1.0).is_err());
    assert!(rf::waveguide_loss(WR90_A, WR90_B, 0.0, 10e9, 6.5e9, 1.0).is_err());
    assert!(rf::waveguide_loss(WR90_A, WR90_B, 5.8e7, 10e9, 0.0, 1.0).is_err());
}

#[test]
fn attenuation_regions() {
    let fc = rf::cutoff_frequency(WR90_A, WR90_B, 1, 0, 1.0, 1.0).unwrap();
    let copper = material_db::conductivity("Copper").expect("copper");

    let at = rf::waveguide_loss(WR90_A, WR90_B, copper, fc, fc, 1.0).unwrap();
    assert!(at.attenuation_db_per_m.is_infinite() && at.attenuation_db_per_m > 0.0);

    let below = rf::waveguide_loss(WR90_A, WR90_B, copper, 0.9 * fc, fc, 1.0).unwrap();
    assert!(below.attenuation_db_per_m.is_nan());
    assert!(below.total_loss_db.is_nan());
    assert!(!below.is_applicable());

    let above = rf::waveguide_loss(WR90_A, WR90_B, copper, 10e9, fc, 2.0).unwrap();
    assert!(above.attenuation_db_per_m.is_finite() && above.attenuation_db_per_m > 0.0);
    assert_relative_eq!(above.total_loss_db, 2.0 * above.attenuation_db_per_m);
}

#[test]
fn aluminum_wr90_at_10ghz() {
    let res = rf::compute_rect_waveguide(&RectWaveguideInput {
        a_m: WR90_A,
        b_m: WR90_B,
        mode_m: 1,
        mode_n: 0,
        mu_r: 1.0,
        eps_r: 1.0,
        conductivity_s_per_m: material_db::conductivity("Aluminum").unwrap(),
        frequency_hz: 10e9,
        length_m: rf::DEFAULT_WAVEGUIDE_LENGTH_M,
    })
    .unwrap();
    assert_close(res.loss.attenuation_db_per_m, 0.1345, 5e-3);
    assert_eq!(res.loss.total_loss_db, res.loss.attenuation_db_per_m);
}

#[test]
fn better_conductor_loses_less() {
    let fc = rf::cutoff_frequency(WR90_A, WR90_B, 1, 0, 1.0, 1.0).unwrap();
    let silver = material_db::conductivity("Silver").unwrap();
    let brass = material_db::conductivity("Brass (30% Zn)").unwrap();
    let ag = rf::waveguide_loss(WR90_A, WR90_B, silver, 10e9, fc, 1.0).unwrap();
    let br = rf::waveguide_loss(WR90_A, WR90_B, brass, 10e9, fc, 1.0).unwrap();
    assert!(ag.attenuation_db_per_m < br.attenuation_db_per_m);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let fc = rf::cutoff_frequency(WR90_A, WR90_B, 1, 0, 1.0, 1.0).unwrap();
    let first = rf::waveguide_loss(WR90_A, WR90_B, 5.8e7, 9.3e9, fc, 3.0).unwrap();
    for _ in 0..10 {
        let again = rf::waveguide_loss(WR90_A, WR90_B, 5.8e7, 9.3e9, fc, 3.0).unwrap();
        assert_eq!(
            again.attenuation_db_per_m.to_bits(),
            first.attenuation_db_per_m.to_bits()
        );
        assert_eq!(again.total_loss_db.to_bits(), first.total_loss_db.to_bits());
    }
}

#[test]
fn sweep_covers_every_material() {
    let fc = rf::cutoff_frequency(WR90_A, WR90_B, 1, 0, 1.0, 1.0).unwrap();
    let series = rf::attenuation_sweep(WR90_A, WR90_B, fc, &SweepRange::default()).unwrap();
    assert_eq!(series.len(), material_db::materials().len());
    for s in &series {
        assert_eq!(s.points.len(), 91);
        for p in &s.points {
            if p.frequency_hz < fc {
                assert!(p.attenuation_db_per_m.is_nan());
            } else {
                assert!(p.attenuation_db_per_m.is_finite());
            }
        }
    }
}

#[test]
fn sweep_rejects_huge_grid() {
    let fc = rf::cutoff_frequency(WR90_A, WR90_B, 1, 0, 1.0, 1.0).unwrap();
    for step_hz in [1e-300, 1.0, 1e3] {
        let range = SweepRange {
            start_hz: 1e9,
            stop_hz: 10e9,
            step_hz,
        };
        assert!(range.frequencies_hz().is_err(), "step={step_hz}");
        assert!(rf::attenuation_sweep(WR90_A, WR90_B, fc, &range).is_err());
    }
}

#[test]
fn sweep_rejects_degenerate_grid() {
    let base = SweepRange::default();
    for bad in [
        SweepRange { step_hz: -0.1e9, ..base },
        SweepRange { step_hz: f64::NAN, ..base },
        SweepRange { stop_hz: 0.5e9, ..base },
        SweepRange { start_hz: f64::INFINITY, ..base },
    ] {
        assert!(bad.frequencies_hz().is_err(), "{bad:?}");
    }
    let single = SweepRange { stop_hz: 1e9, ..base };
    assert_eq!(single.frequencies_hz().unwrap(), vec![1e9]);
}
