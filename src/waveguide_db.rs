//! 표준 직사각형 도파관(WR 규격) 단면 치수와 권장 주파수 대역.
//! 치수는 inch 단위로 저장한다. 역사적 예외(WR187, WR137 등 2:1이 아닌 비율)는 그대로 둔다.

use crate::constants::{INCH_M, SPEED_OF_LIGHT};
use crate::conversion::{self, ConversionError};
use crate::quantity::QuantityKind;

#[derive(Debug)]
pub struct WaveguideType {
    /// 규격명 (예: "WR90")
    pub designator: &'static str,
    /// 넓은 면 a [inch]
    pub a_inch: f64,
    /// 좁은 면 b [inch]
    pub b_inch: f64,
    /// 권장 운용 대역 (표시용 문자열)
    pub band: &'static str,
}

impl WaveguideType {
    pub fn a_m(&self) -> f64 {
        self.a_inch * INCH_M
    }

    pub fn b_m(&self) -> f64 {
        self.b_inch * INCH_M
    }

    /// a, b 치수를 지정한 길이 단위로 반환한다.
    pub fn dimensions_in(&self, unit: &str) -> Result<(f64, f64), ConversionError> {
        conversion::expect_kind(unit, QuantityKind::Length)?;
        let a = conversion::from_si(self.a_m(), unit)?;
        let b = conversion::from_si(self.b_m(), unit)?;
        Ok((a, b))
    }

    /// 진공 충전 시 TE10 모드 차단주파수 [Hz] = c / 2a
    pub fn dominant_cutoff_hz(&self) -> f64 {
        SPEED_OF_LIGHT / (2.0 * self.a_m())
    }
}

pub fn waveguide_types() -> &'static [WaveguideType] {
    WAVEGUIDE_TYPES
}

/// 규격명으로 도파관을 찾는다. "wr90", " WR90 " 모두 허용한다.
pub fn find_waveguide(designator: &str) -> Option<&'static WaveguideType> {
    let key = designator.trim();
    WAVEGUIDE_TYPES
        .iter()
        .find(|w| w.designator.eq_ignore_ascii_case(key))
}

const WAVEGUIDE_TYPES: &[WaveguideType] = &[
    wr("WR2300", 23.0, 11.5, "0.32 to 0.45 GHz"),
    wr("WR2100", 21.0, 10.5, "0.35 to 0.50 GHz"),
    wr("WR1800", 18.0, 9.0, "0.45 to 0.63 GHz"),
    wr("WR1500", 15.0, 7.5, "0.50 to 0.75 GHz"),
    wr("WR1150", 11.5, 5.75, "0.63 to 0.97 GHz"),
    wr("WR975", 9.75, 4.875, "0.75 to 1.15 GHz"),
    wr("WR770", 7.7, 3.85, "0.97 to 1.45 GHz"),
    wr("WR650", 6.5, 3.25, "1.15 to 1.72 GHz"),
    wr("WR510", 5.1, 2.55, "1.45 to 2.20 GHz"),
    wr("WR430", 4.3, 2.15, "1.72 to 2.60 GHz"),
    wr("WR340", 3.4, 1.7, "2.20 to 3.30 GHz"),
    wr("WR284", 2.84, 1.34, "2.60 to 3.95 GHz"),
    wr("WR229", 2.29, 1.145, "3.30 to 4.90 GHz"),
    wr("WR187", 1.872, 0.872, "3.95 to 5.85 GHz"),
    wr("WR159", 1.59, 0.795, "4.90 to 7.05 GHz"),
    wr("WR137", 1.372, 0.622, "5.85 to 8.20 GHz"),
    wr("WR112", 1.122, 0.497, "7.05 to 10 GHz"),
    wr("WR102", 1.02, 0.51, "7.00 to 11 GHz"),
    wr("WR90", 0.9, 0.4, "8.20 to 12.40 GHz"),
    wr("WR75", 0.75, 0.375, "10.00 to 15 GHz"),
    wr("WR62", 0.622, 0.311, "12.40 to 18 GHz"),
    wr("WR51", 0.51, 0.255, "15.00 to 22 GHz"),
    wr("WR42", 0.42, 0.17, "18.00 to 26.50 GHz"),
    wr("WR34", 0.34, 0.17, "22.00 to 33 GHz"),
    wr("WR28", 0.28, 0.14, "26.50 to 40 GHz"),
    wr("WR22", 0.224, 0.112, "33.00 to 50 GHz"),
    wr("WR19", 0.188, 0.094, "40.00 to 60 GHz"),
    wr("WR15", 0.148, 0.074, "50.00 to 75 GHz"),
    wr("WR12", 0.122, 0.061, "60 to 90 GHz"),
    wr("WR10", 0.1, 0.05, "75 to 110 GHz"),
    wr("WR8", 0.08, 0.04, "90 to 140 GHz"),
    // WR6과 WR7은 동일 치수, 별도 항목
    wr("WR6", 0.065, 0.0325, "110 to 170 GHz"),
    wr("WR7", 0.065, 0.0325, "110 to 170 GHz"),
    wr("WR5", 0.051, 0.0255, "140 to 220 GHz"),
    wr("WR4", 0.043, 0.0215, "172 to 260 GHz"),
    wr("WR3", 0.034, 0.017, "220 to 330 GHz"),
];

const fn wr(designator: &'static str, a_inch: f64, b_inch: f64, band: &'static str) -> WaveguideType {
    WaveguideType {
        designator,
        a_inch,
        b_inch,
        band,
    }
}
