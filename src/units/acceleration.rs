use super::UnitDef;
use crate::quantity::QuantityKind::Acceleration;

/// 가속도 단위. 내부 기준은 m/s².
pub(super) const UNITS: &[UnitDef] = &[
    UnitDef::new("m/s2", 1.0, Acceleration),
    // 표준 중력가속도
    UnitDef::new("g", 9.80665, Acceleration),
    UnitDef::new("ft/s2", 0.3048, Acceleration),
];
