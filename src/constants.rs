//! 전자기 계산에 쓰이는 물리 상수.

/// 진공 유전율 ε₀ [F/m] (CODATA 2022)
pub const VACUUM_PERMITTIVITY: f64 = 8.8541878188e-12;

/// 진공 투자율 μ₀ [H/m] (CODATA 2022)
pub const VACUUM_PERMEABILITY: f64 = 1.25663706127e-6;

/// 광속 c [m/s]. 정의값.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// 볼츠만 상수 k [J/K]
pub const BOLTZMANN: f64 = 1.3806504e-23;

/// 1 inch [m]
pub const INCH_M: f64 = 0.0254;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn light_speed_matches_eps0_mu0() {
        let c = 1.0 / (VACUUM_PERMITTIVITY * VACUUM_PERMEABILITY).sqrt();
        assert_relative_eq!(c, SPEED_OF_LIGHT, max_relative = 1e-9);
    }

    #[test]
    fn permeability_close_to_4pi_e7() {
        assert_relative_eq!(
            VACUUM_PERMEABILITY,
            4e-7 * std::f64::consts::PI,
            max_relative = 1e-9
        );
    }
}
