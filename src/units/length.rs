use super::UnitDef;
use crate::quantity::QuantityKind::Length;

/// 길이 단위. 내부 기준은 미터이다.
pub(super) const UNITS: &[UnitDef] = &[
    UnitDef::new("fm", 1e-15, Length),
    UnitDef::new("pm", 1e-12, Length),
    UnitDef::new("angstrom", 1e-10, Length),
    UnitDef::new("nm", 1e-9, Length),
    UnitDef::new("um", 1e-6, Length),
    UnitDef::new("mm", 1e-3, Length),
    UnitDef::new("cm", 1e-2, Length),
    UnitDef::new("dm", 1e-1, Length),
    UnitDef::new("m", 1.0, Length),
    UnitDef::new("km", 1000.0, Length),
    UnitDef::new("nmi", 1852.0, Length),
    UnitDef::new("mi", 1609.344, Length),
    UnitDef::new("ft", 0.3048, Length),
    UnitDef::new("kft", 304.8, Length),
    UnitDef::new("inch", 0.0254, Length),
];
