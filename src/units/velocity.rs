use super::UnitDef;
use crate::constants::SPEED_OF_LIGHT;
use crate::quantity::QuantityKind::{AngularVelocity, Velocity};

/// 속도 단위. 내부 기준은 m/s이다.
pub(super) const UNITS: &[UnitDef] = &[
    UnitDef::new("m/s", 1.0, Velocity),
    UnitDef::new("km/h", 1.0 / 3.6, Velocity),
    UnitDef::new("mph", 0.44704, Velocity),
    // 해면 표준대기 음속
    UnitDef::new("mach", 340.29, Velocity),
    // 광속 배수
    UnitDef::new("c", SPEED_OF_LIGHT, Velocity),
];

/// 각속도 단위. 내부 기준은 rad/s이다.
pub(super) const ANGULAR_UNITS: &[UnitDef] = &[
    UnitDef::new("rad/s", 1.0, AngularVelocity),
    UnitDef::new("deg/s", std::f64::consts::PI / 180.0, AngularVelocity),
    UnitDef::new("rpm", std::f64::consts::TAU / 60.0, AngularVelocity),
];
