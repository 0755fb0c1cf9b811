/// 단위 테이블이 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    Length,
    Power,
    Frequency,
    Time,
    Velocity,
    AngularVelocity,
    Acceleration,
    Energy,
    Pressure,
    /// J/K (볼츠만 상수 단위)
    Entropy,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 10] = [
        QuantityKind::Length,
        QuantityKind::Power,
        QuantityKind::Frequency,
        QuantityKind::Time,
        QuantityKind::Velocity,
        QuantityKind::AngularVelocity,
        QuantityKind::Acceleration,
        QuantityKind::Energy,
        QuantityKind::Pressure,
        QuantityKind::Entropy,
    ];

    /// 내부 기준(SI) 단위 기호
    pub fn si_symbol(self) -> &'static str {
        match self {
            QuantityKind::Length => "m",
            QuantityKind::Power => "W",
            QuantityKind::Frequency => "Hz",
            QuantityKind::Time => "s",
            QuantityKind::Velocity => "m/s",
            QuantityKind::AngularVelocity => "rad/s",
            QuantityKind::Acceleration => "m/s2",
            QuantityKind::Energy => "J",
            QuantityKind::Pressure => "Pa",
            QuantityKind::Entropy => "J/K",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Length => "length",
            QuantityKind::Power => "power",
            QuantityKind::Frequency => "frequency",
            QuantityKind::Time => "time",
            QuantityKind::Velocity => "velocity",
            QuantityKind::AngularVelocity => "angular velocity",
            QuantityKind::Acceleration => "acceleration",
            QuantityKind::Energy => "energy",
            QuantityKind::Pressure => "pressure",
            QuantityKind::Entropy => "entropy",
        }
    }
}
