use super::UnitDef;
use crate::quantity::QuantityKind::Time;

pub(super) const UNITS: &[UnitDef] = &[
    UnitDef::new("us", 1e-6, Time),
    UnitDef::new("ms", 1e-3, Time),
    UnitDef::new("s", 1.0, Time),
];
