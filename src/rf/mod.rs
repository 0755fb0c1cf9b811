//! RF 전송선로 손실 계산 모듈 모음.
//! 직사각형 도파관 차단주파수/감쇠, VSWR 부정합 손실, 편파 손실로 구성한다.

pub mod mismatch;
pub mod polarization;
pub mod waveguide;

pub use mismatch::*;
pub use polarization::*;
pub use waveguide::*;

/// RF 계산 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum RfCalcError {
    /// 입력값이 물리적으로 유효하지 않은 경우
    InvalidInput(&'static str),
    /// 알 수 없는 편파 이름
    UnknownPolarization(String),
}

impl std::fmt::Display for RfCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RfCalcError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            RfCalcError::UnknownPolarization(p) => write!(f, "알 수 없는 편파: {p}"),
        }
    }
}

impl std::error::Error for RfCalcError {}

/// 유한한 양수인지 확인한다.
pub(crate) fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
