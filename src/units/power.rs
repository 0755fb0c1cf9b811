use super::UnitDef;
use crate::quantity::QuantityKind::Power;

/// 전력 단위. 내부 기준은 W.
pub(super) const UNITS: &[UnitDef] = &[
    UnitDef::new("W", 1.0, Power),
    UnitDef::new("kW", 1e3, Power),
    UnitDef::new("MW", 1e6, Power),
    // 미터법 마력(PS)
    UnitDef::new("hp", 735.49875, Power),
];
