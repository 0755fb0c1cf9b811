use super::UnitDef;
use crate::constants::BOLTZMANN;
use crate::quantity::QuantityKind::{Energy, Entropy};

const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;

/// 에너지 단위. 내부 기준은 J.
pub(super) const UNITS: &[UnitDef] = &[
    UnitDef::new("J", 1.0, Energy),
    UnitDef::new("kJ", 1e3, Energy),
    UnitDef::new("MJ", 1e6, Energy),
    UnitDef::new("kWh", 3.6e6, Energy),
    UnitDef::new("BTU", 1055.05585262, Energy),
    UnitDef::new("eV", ELEMENTARY_CHARGE, Energy),
    UnitDef::new("keV", ELEMENTARY_CHARGE * 1e3, Energy),
    // 열화학 칼로리
    UnitDef::new("cal", 4.184, Energy),
    UnitDef::new("kcal", 4184.0, Energy),
];

/// 볼츠만 상수 배수 → J/K
pub(super) const ENTROPY_UNITS: &[UnitDef] = &[
    UnitDef::new("J/K", 1.0, Entropy),
    UnitDef::new("k", BOLTZMANN, Entropy),
];
