use super::UnitDef;
use crate::quantity::QuantityKind::Pressure;

/// 압력 단위. 내부 기준은 Pa(절대압)이다.
pub(super) const UNITS: &[UnitDef] = &[
    UnitDef::new("Pa", 1.0, Pressure),
    UnitDef::new("hPa", 100.0, Pressure),
    UnitDef::new("kPa", 1e3, Pressure),
    UnitDef::new("mbar", 100.0, Pressure),
    UnitDef::new("bar", 1e5, Pressure),
    UnitDef::new("atm", 101_325.0, Pressure),
    UnitDef::new("psi", 6894.75729, Pressure),
    UnitDef::new("Torr", 133.322368, Pressure),
];
