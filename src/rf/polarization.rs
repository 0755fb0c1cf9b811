use std::fmt;
use std::str::FromStr;

use super::RfCalcError;

/// 안테나 편파.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarization {
    Horizontal,
    Vertical,
    /// 우선회 원편파
    Rhc,
    /// 좌선회 원편파
    Lhc,
}

impl Polarization {
    pub const ALL: [Polarization; 4] = [
        Polarization::Horizontal,
        Polarization::Vertical,
        Polarization::Rhc,
        Polarization::Lhc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Polarization::Horizontal => "Horizontal",
            Polarization::Vertical => "Vertical",
            Polarization::Rhc => "RHC",
            Polarization::Lhc => "LHC",
        }
    }

    fn index(self) -> usize {
        match self {
            Polarization::Horizontal => 0,
            Polarization::Vertical => 1,
            Polarization::Rhc => 2,
            Polarization::Lhc => 3,
        }
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Polarization {
    type Err = RfCalcError;

    /// 네 가지 라벨("Horizontal", "Vertical", "RHC", "LHC")과 정확히 일치해야 한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polarization::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| RfCalcError::UnknownPolarization(s.to_string()))
    }
}

/// 편파 손실 [dB]. 행 = 송신, 열 = 수신 (H, V, RHC, LHC 순).
const POLARIZATION_LOSS_DB: [[f64; 4]; 4] = [
    [0.0, 10.0, 3.0, 3.0],
    [10.0, 0.0, 3.0, 3.0],
    [3.0, 3.0, 3.0, 0.0],
    [3.0, 3.0, 0.0, 3.0],
];

/// 송수신 편파 조합의 편파 손실 [dB]
pub fn polarization_loss(tx: Polarization, rx: Polarization) -> f64 {
    POLARIZATION_LOSS_DB[tx.index()][rx.index()]
}

/// 편파 이름으로 손실을 조회한다. 어느 한쪽이라도 알 수 없는 이름이면 `None`.
pub fn polarization_loss_by_name(tx: &str, rx: &str) -> Option<f64> {
    let tx = tx.parse::<Polarization>().ok()?;
    let rx = rx.parse::<Polarization>().ok()?;
    Some(polarization_loss(tx, rx))
}
