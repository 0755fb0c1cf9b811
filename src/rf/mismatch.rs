use super::{is_positive, RfCalcError};
use crate::conversion::power_ratio_to_db;

/// VSWR 기반 부정합 손실 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MismatchLoss {
    /// 부정합 손실 [dB]
    pub loss_db: f64,
    /// 전압 반사계수 크기 |Γ|
    pub reflection_coefficient: f64,
    /// 반사 전력 비율 |Γ|²
    pub reflected_power_fraction: f64,
}

/// VSWR로부터 부정합 손실, 반사계수, 반사 전력 비율을 계산한다.
///
/// VSWR은 보통 1 이상이지만 0 < VSWR < 1 입력도 거부하지 않고
/// |Γ| = (1 − v)/(v + 1) 로 처리한다. VSWR ≤ 0 은 입력 오류다.
pub fn mismatch_loss(vswr: f64) -> Result<MismatchLoss, RfCalcError> {
    if !is_positive(vswr) {
        return Err(RfCalcError::InvalidInput("VSWR은 0보다 커야 합니다."));
    }
    let gamma = if vswr > 1.0 {
        (vswr - 1.0) / (vswr + 1.0)
    } else {
        (1.0 - vswr) / (vswr + 1.0)
    };
    let ratio = (vswr + 1.0).powi(2) / (4.0 * vswr);
    Ok(MismatchLoss {
        loss_db: power_ratio_to_db(ratio),
        reflection_coefficient: gamma,
        reflected_power_fraction: gamma * gamma,
    })
}
