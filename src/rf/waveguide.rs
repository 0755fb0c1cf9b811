use std::f64::consts::{LOG10_E, PI};

use super::{is_positive, RfCalcError};
use crate::constants::{SPEED_OF_LIGHT, VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::material_db;

/// 길이를 지정하지 않았을 때의 도파관 길이 [m]
pub const DEFAULT_WAVEGUIDE_LENGTH_M: f64 = 1.0;

/// 스윕 한 번에 허용하는 최대 주파수 점 수
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// Np → dB 환산 계수 (20·log10(e))
const NEPER_TO_DB: f64 = 20.0 * LOG10_E;

/// 도파관 감쇠 계산 결과.
///
/// 차단주파수 미만에서는 두 값이 모두 NaN이다 (오류가 아니라 "해당 없음").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveguideLoss {
    /// 단위 길이당 감쇠 [dB/m]
    pub attenuation_db_per_m: f64,
    /// 전체 길이 손실 [dB]
    pub total_loss_db: f64,
}

impl WaveguideLoss {
    pub const NOT_APPLICABLE: WaveguideLoss = WaveguideLoss {
        attenuation_db_per_m: f64::NAN,
        total_loss_db: f64::NAN,
    };

    /// 전파 영역(f ≥ fc)에서 계산된 값이면 true.
    pub fn is_applicable(&self) -> bool {
        !self.attenuation_db_per_m.is_nan()
    }
}

/// 직사각형 도파관 TEmn 모드 차단주파수 [Hz]를 계산한다.
///
/// - `a_m`, `b_m`: 넓은 면/좁은 면 치수 [m]
/// - `m`, `n`: 모드 차수. `m = n = 0`은 물리적 모드가 아니지만 0 Hz를 그대로 반환한다.
/// - `mu_r`, `eps_r`: 충전 매질의 비투자율/비유전율
pub fn cutoff_frequency(
    a_m: f64,
    b_m: f64,
    m: u32,
    n: u32,
    mu_r: f64,
    eps_r: f64,
) -> Result<f64, RfCalcError> {
    if !is_positive(a_m) || !is_positive(b_m) {
        return Err(RfCalcError::InvalidInput(
            "도파관 치수 a, b는 0보다 커야 합니다.",
        ));
    }
    if !is_positive(mu_r) || !is_positive(eps_r) {
        return Err(RfCalcError::InvalidInput(
            "비투자율과 비유전율은 0보다 커야 합니다.",
        ));
    }
    // 차단 파수 kc
    let kc = ((m as f64 * PI / a_m).powi(2) + (n as f64 * PI / b_m).powi(2)).sqrt();
    Ok(SPEED_OF_LIGHT * kc / (2.0 * PI * (mu_r * eps_r).sqrt()))
}

/// 직사각형 도파관의 도체 손실을 계산한다.
///
/// Ref.: H. Meikle, Modern Radar Systems (2nd ed.) p.87, eq.(4.4)
///
/// - `sigma`: 내벽 재질 전도율 [S/m]
/// - `f_hz`: 운용 주파수, `fc_hz`: 차단주파수
/// - `length_m`: 도파관 길이 (보통 [`DEFAULT_WAVEGUIDE_LENGTH_M`])
///
/// f < fc 이면 [`WaveguideLoss::NOT_APPLICABLE`], f == fc 이면 무한대를 반환한다.
pub fn waveguide_loss(
    a_m: f64,
    b_m: f64,
    sigma: f64,
    f_hz: f64,
    fc_hz: f64,
    length_m: f64,
) -> Result<WaveguideLoss, RfCalcError> {
    if !is_positive(a_m) || !is_positive(b_m) {
        return Err(RfCalcError::InvalidInput(
            "도파관 치수 a, b는 0보다 커야 합니다.",
        ));
    }
    if !is_positive(sigma) {
        return Err(RfCalcError::InvalidInput("전도율은 0보다 커야 합니다."));
    }
    if !is_positive(fc_hz) {
        return Err(RfCalcError::InvalidInput(
            "차단주파수는 0보다 커야 합니다.",
        ));
    }
    if !f_hz.is_finite() || f_hz < 0.0 {
        return Err(RfCalcError::InvalidInput("주파수는 0 이상이어야 합니다."));
    }
    if !length_m.is_finite() || length_m < 0.0 {
        return Err(RfCalcError::InvalidInput(
            "도파관 길이는 0 이상이어야 합니다.",
        ));
    }

    let fr = f_hz / fc_hz;
    if fr * fr < 1.0 {
        // 차단 영역: 공식 적용 불가
        return Ok(WaveguideLoss::NOT_APPLICABLE);
    }

    let surface = ((PI / (2.0 * sigma)) * (VACUUM_PERMITTIVITY / VACUUM_PERMEABILITY).sqrt()).sqrt();
    let shape = (2.0 * fr.powf(-0.5) + (a_m / b_m) * fr.powf(1.5)) / (fr * fr - 1.0).sqrt();
    let alfa = surface * a_m.powf(-1.5) * shape * NEPER_TO_DB;

    Ok(WaveguideLoss {
        attenuation_db_per_m: alfa,
        total_loss_db: length_m * alfa,
    })
}

/// 도파관 종합 계산 입력 (SI 단위).
#[derive(Debug, Clone)]
pub struct RectWaveguideInput {
    pub a_m: f64,
    pub b_m: f64,
    pub mode_m: u32,
    pub mode_n: u32,
    pub mu_r: f64,
    pub eps_r: f64,
    pub conductivity_s_per_m: f64,
    pub frequency_hz: f64,
    pub length_m: f64,
}

/// 도파관 종합 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectWaveguideResult {
    pub cutoff_hz: f64,
    pub loss: WaveguideLoss,
}

/// 차단주파수를 구한 뒤 해당 차단주파수로 감쇠를 계산한다.
pub fn compute_rect_waveguide(input: &RectWaveguideInput) -> Result<RectWaveguideResult, RfCalcError> {
    let cutoff_hz = cutoff_frequency(
        input.a_m,
        input.b_m,
        input.mode_m,
        input.mode_n,
        input.mu_r,
        input.eps_r,
    )?;
    let loss = waveguide_loss(
        input.a_m,
        input.b_m,
        input.conductivity_s_per_m,
        input.frequency_hz,
        cutoff_hz,
        input.length_m,
    )?;
    Ok(RectWaveguideResult { cutoff_hz, loss })
}

/// 선형 주파수 스윕 구간.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    pub start_hz: f64,
    pub stop_hz: f64,
    pub step_hz: f64,
}

impl Default for SweepRange {
    /// 1 ~ 10 GHz, 0.1 GHz 간격
    fn default() -> Self {
        Self {
            start_hz: 1e9,
            stop_hz: 10e9,
            step_hz: 0.1e9,
        }
    }
}

impl SweepRange {
    /// 스윕 주파수 목록. 반 스텝 이내의 끝점은 포함한다.
    /// 누적 오차를 피하려고 start + i·step으로 생성한다.
    pub fn frequencies_hz(&self) -> Result<Vec<f64>, RfCalcError> {
        if !self.start_hz.is_finite() || self.start_hz < 0.0 || !self.stop_hz.is_finite() {
            return Err(RfCalcError::InvalidInput(
                "스윕 시작/종료 주파수가 올바르지 않습니다.",
            ));
        }
        if !is_positive(self.step_hz) {
            return Err(RfCalcError::InvalidInput(
                "스윕 간격은 0보다 커야 합니다.",
            ));
        }
        if self.stop_hz < self.start_hz {
            return Err(RfCalcError::InvalidInput(
                "스윕 종료 주파수가 시작 주파수보다 작습니다.",
            ));
        }
        let steps = ((self.stop_hz - self.start_hz) / self.step_hz + 0.5).floor();
        if steps.is_nan() || steps >= MAX_SWEEP_POINTS as f64 {
            return Err(RfCalcError::InvalidInput(
                "스윕 점 수가 너무 많습니다 (최대 100000).",
            ));
        }
        let count = steps as usize;
        Ok((0..=count)
            .map(|i| self.start_hz + i as f64 * self.step_hz)
            .collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub frequency_hz: f64,
    /// f < fc 구간은 NaN
    pub attenuation_db_per_m: f64,
}

/// 재질 하나의 감쇠 곡선.
#[derive(Debug, Clone)]
pub struct SweepSeries {
    pub material: &'static str,
    pub points: Vec<SweepPoint>,
}

/// 재질 테이블의 모든 재질에 대해 주파수별 감쇠 [dB/m]를 계산한다.
pub fn attenuation_sweep(
    a_m: f64,
    b_m: f64,
    fc_hz: f64,
    range: &SweepRange,
) -> Result<Vec<SweepSeries>, RfCalcError> {
    let freqs = range.frequencies_hz()?;
    let mut out = Vec::with_capacity(material_db::materials().len());
    for mat in material_db::materials() {
        let points = freqs
            .iter()
            .map(|&f| {
                waveguide_loss(a_m, b_m, mat.conductivity_s_per_m, f, fc_hz, 1.0).map(|loss| {
                    SweepPoint {
                        frequency_hz: f,
                        attenuation_db_per_m: loss.attenuation_db_per_m,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        out.push(SweepSeries {
            material: mat.name,
            points,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_grid_includes_stop() {
        let f = SweepRange::default().frequencies_hz().unwrap();
        assert_eq!(f.len(), 91);
        assert_eq!(f[0], 1e9);
        assert!((f[90] - 10e9).abs() < 1.0);
    }

    #[test]
    fn sweep_rejects_bad_step() {
        let r = SweepRange {
            step_hz: 0.0,
            ..SweepRange::default()
        };
        assert!(r.frequencies_hz().is_err());
    }

    #[test]
    fn sweep_point_limit_is_inclusive() {
        let r = SweepRange {
            start_hz: 0.0,
            stop_hz: (MAX_SWEEP_POINTS - 1) as f64,
            step_hz: 1.0,
        };
        assert_eq!(r.frequencies_hz().unwrap().len(), MAX_SWEEP_POINTS);
        let over = SweepRange {
            stop_hz: MAX_SWEEP_POINTS as f64,
            ..r
        };
        assert!(over.frequencies_hz().is_err());
    }

    #[test]
    fn zero_length_gives_zero_total_loss() {
        let loss = waveguide_loss(0.02286, 0.01016, 5.8e7, 10e9, 6.557e9, 0.0).unwrap();
        assert!(loss.attenuation_db_per_m > 0.0);
        assert_eq!(loss.total_loss_db, 0.0);
    }
}
