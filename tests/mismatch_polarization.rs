use approx::assert_relative_eq;
use rf_loss_toolbox::rf::{self, Polarization, RfCalcError};

#[test]
fn perfect_match_has_no_loss() {
    let res = rf::mismatch_loss(1.0).unwrap();
    assert_eq!(res.loss_db, 0.0);
    assert_eq!(res.reflection_coefficient, 0.0);
    assert_eq!(res.reflected_power_fraction, 0.0);
}

#[test]
fn vswr_two() {
    let res = rf::mismatch_loss(2.0).unwrap();
    assert_relative_eq!(res.reflection_coefficient, 1.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(res.reflected_power_fraction, 1.0 / 9.0, max_relative = 1e-12);
    assert!((res.loss_db - 0.5118).abs() < 1e-3, "loss={}", res.loss_db);
    assert_relative_eq!(res.loss_db, 10.0 * 1.125_f64.log10(), epsilon = 1e-9);
}

#[test]
fn vswr_below_one_mirrors_reciprocal() {
    let low = rf::mismatch_loss(0.5).unwrap();
    let high = rf::mismatch_loss(2.0).unwrap();
    assert_relative_eq!(low.reflection_coefficient, high.reflection_coefficient, epsilon = 1e-12);
    assert_relative_eq!(low.loss_db, high.loss_db, epsilon = 1e-9);
}

#[test]
fn vswr_quarter_matches_four() {
    let low = rf::mismatch_loss(0.25).unwrap();
    let high = rf::mismatch_loss(4.0).unwrap();
    assert_relative_eq!(low.reflection_coefficient, 0.6, epsilon = 1e-12);
    assert_relative_eq!(high.reflection_coefficient, 0.6, epsilon = 1e-12);
    assert_relative_eq!(low.reflected_power_fraction, 0.36, epsilon = 1e-12);
    // (v + 1)^2 / 4v = 25/16
    assert_relative_eq!(low.loss_db, 10.0 * (25.0_f64 / 16.0).log10(), epsilon = 1e-9);
    assert_relative_eq!(low.loss_db, high.loss_db, epsilon = 1e-9);
}

#[test]
fn non_positive_vswr_rejected() {
    assert!(matches!(rf::mismatch_loss(0.0), Err(RfCalcError::InvalidInput(_))));
    assert!(rf::mismatch_loss(-2.0).is_err());
    assert!(rf::mismatch_loss(f64::NAN).is_err());
}

#[test]
fn polarization_table_entries() {
    let loss = |tx, rx| rf::polarization_loss_by_name(tx, rx);
    assert_eq!(loss("Horizontal", "Horizontal"), Some(0.0));
    assert_eq!(loss("Horizontal", "Vertical"), Some(10.0));
    assert_eq!(loss("Vertical", "RHC"), Some(3.0));
    assert_eq!(loss("RHC", "LHC"), Some(0.0));
    assert_eq!(loss("RHC", "RHC"), Some(3.0));
    assert_eq!(loss("LHC", "RHC"), Some(0.0));
    assert_eq!(loss("LHC", "Vertical"), Some(3.0));
}

#[test]
fn unknown_polarization_is_absent() {
    assert_eq!(rf::polarization_loss_by_name("Horizontal", "Garbage"), None);
    assert_eq!(rf::polarization_loss_by_name("Slant", "Vertical"), None);
    assert!(matches!(
        "Garbage".parse::<Polarization>(),
        Err(RfCalcError::UnknownPolarization(_))
    ));
}

#[test]
fn labels_must_match_exactly() {
    assert_eq!(rf::polarization_loss_by_name("horizontal", "vertical"), None);
    assert_eq!(rf::polarization_loss_by_name("lhc", "rhc"), None);
    assert_eq!(rf::polarization_loss_by_name(" RHC ", "LHC"), None);
    assert_eq!(rf::polarization_loss_by_name("RHC", "LHC\n"), None);
    assert_eq!(rf::polarization_loss_by_name("", "RHC"), None);
}

#[test]
fn display_and_parse_agree() {
    for p in Polarization::ALL {
        assert_eq!(p.to_string().parse::<Polarization>(), Ok(p));
    }
}

#[test]
fn polarization_table_is_symmetric() {
    for tx in Polarization::ALL {
        for rx in Polarization::ALL {
            assert_eq!(rf::polarization_loss(tx, rx), rf::polarization_loss(rx, tx));
        }
    }
}
