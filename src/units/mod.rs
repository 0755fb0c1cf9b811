//! 단위 기호 → SI 배율 테이블.
//!
//! `값[SI] = 값[단위] * 배율[단위]` 관계를 만족한다. 기호만으로 조회할 때에는
//! 물리량 종류를 검증하지 않으므로, 호출 측에서 물리량에 맞는 단위를 써야 한다.
//! 종류 검증이 필요하면 [`crate::conversion::convert`]를 사용한다.

mod acceleration;
mod energy;
mod frequency;
mod length;
mod power;
mod pressure;
mod time;
mod velocity;

use crate::quantity::QuantityKind;

/// 단위 하나의 정의.
#[derive(Debug)]
pub struct UnitDef {
    pub symbol: &'static str,
    /// SI 기준 단위로 가는 배율
    pub to_si: f64,
    pub kind: QuantityKind,
}

impl UnitDef {
    pub const fn new(symbol: &'static str, to_si: f64, kind: QuantityKind) -> Self {
        Self {
            symbol,
            to_si,
            kind,
        }
    }
}

const TABLES: &[&[UnitDef]] = &[
    length::UNITS,
    power::UNITS,
    frequency::UNITS,
    time::UNITS,
    velocity::UNITS,
    velocity::ANGULAR_UNITS,
    acceleration::UNITS,
    energy::UNITS,
    energy::ENTROPY_UNITS,
    pressure::UNITS,
];

/// 등록된 모든 단위를 순회한다.
pub fn all_units() -> impl Iterator<Item = &'static UnitDef> {
    TABLES.iter().flat_map(|t| t.iter())
}

/// 기호로 단위를 찾는다. 기호는 대소문자를 구분한다 (mm ≠ Mm).
pub fn find_unit(symbol: &str) -> Option<&'static UnitDef> {
    let symbol = symbol.trim();
    all_units().find(|u| u.symbol == symbol)
}

/// 단위 기호의 SI 배율을 반환한다.
pub fn unit_to_si(symbol: &str) -> Option<f64> {
    find_unit(symbol).map(|u| u.to_si)
}

/// 특정 물리량의 단위 목록
pub fn units_of(kind: QuantityKind) -> impl Iterator<Item = &'static UnitDef> {
    all_units().filter(move |u| u.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique() {
        let all: Vec<_> = all_units().collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn every_kind_has_its_si_unit() {
        for kind in QuantityKind::ALL {
            let base = find_unit(kind.si_symbol()).expect(kind.name());
            assert_eq!(base.kind, kind);
            assert_eq!(base.to_si, 1.0);
        }
    }

    #[test]
    fn multipliers_positive_and_finite() {
        assert!(all_units().all(|u| u.to_si > 0.0 && u.to_si.is_finite()));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(unit_to_si("MHz"), Some(1e6));
        assert_eq!(unit_to_si("mhz"), None);
        assert_eq!(unit_to_si("inch"), Some(0.0254));
    }
}
