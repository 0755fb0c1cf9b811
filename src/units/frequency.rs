use super::UnitDef;
use crate::quantity::QuantityKind::Frequency;

pub(super) const UNITS: &[UnitDef] = &[
    UnitDef::new("Hz", 1.0, Frequency),
    UnitDef::new("kHz", 1e3, Frequency),
    UnitDef::new("MHz", 1e6, Frequency),
    UnitDef::new("GHz", 1e9, Frequency),
];
