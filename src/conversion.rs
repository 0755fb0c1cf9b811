use crate::quantity::QuantityKind;
use crate::units::{self, UnitDef};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 서로 다른 물리량 사이의 변환 요청
    QuantityMismatch {
        from: String,
        to: String,
    },
    /// 요구된 물리량과 다른 단위
    WrongQuantity {
        unit: String,
        expected: QuantityKind,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::QuantityMismatch { from, to } => {
                write!(f, "물리량이 다른 단위끼리 변환할 수 없습니다: {from} → {to}")
            }
            ConversionError::WrongQuantity { unit, expected } => {
                write!(f, "{unit} 은(는) {} 단위가 아닙니다", expected.name())
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 전력비를 dB로 변환한다: `10·log10(x)`.
///
/// `x`는 0보다 커야 한다. `x == 0`이면 `-inf`, `x < 0`이면 NaN이 그대로 반환된다.
///
/// 10의 거듭제곱 입력이 정확한 정수 dB가 되도록 (+300 −300) 반올림 정규화를 거친다.
/// 예: `power_ratio_to_db(1e-3) == -30.0`
pub fn power_ratio_to_db(x: f64) -> f64 {
    (10.0 * x.log10() + 300.0) - 300.0
}

/// dB를 전력비로 되돌린다.
pub fn db_to_power_ratio(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

fn lookup(symbol: &str) -> Result<&'static UnitDef, ConversionError> {
    units::find_unit(symbol).ok_or_else(|| ConversionError::UnknownUnit(symbol.trim().to_string()))
}

/// 단위 기호가 지정한 물리량에 속하는지 확인하고 배율을 반환한다.
pub fn expect_kind(symbol: &str, kind: QuantityKind) -> Result<f64, ConversionError> {
    let unit = lookup(symbol)?;
    if unit.kind != kind {
        return Err(ConversionError::WrongQuantity {
            unit: unit.symbol.to_string(),
            expected: kind,
        });
    }
    Ok(unit.to_si)
}

/// 표시 단위 값을 SI 값으로 환산한다. 물리량 종류는 검증하지 않는다.
pub fn to_si(value: f64, unit: &str) -> Result<f64, ConversionError> {
    Ok(value * lookup(unit)?.to_si)
}

/// SI 값을 표시 단위로 환산한다.
pub fn from_si(value_si: f64, unit: &str) -> Result<f64, ConversionError> {
    Ok(value_si / lookup(unit)?.to_si)
}

/// 문자열로 전달된 두 단위 사이를 변환한다. 두 단위의 물리량이 같아야 한다.
///
/// 단위 문자열 예시는 `mm`, `inch`, `GHz`, `kW`, `psi` 등을 사용할 수 있다.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let from = lookup(from_unit)?;
    let to = lookup(to_unit)?;
    if from.kind != to.kind {
        return Err(ConversionError::QuantityMismatch {
            from: from.symbol.to_string(),
            to: to.symbol.to_string(),
        });
    }
    Ok(value * from.to_si / to.to_si)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_ten_are_exact() {
        for k in -12..=12 {
            let x: f64 = format!("1e{k}").parse().unwrap();
            assert_eq!(power_ratio_to_db(x), 10.0 * k as f64, "10^{k}");
        }
    }

    #[test]
    fn non_positive_ratio_is_not_finite() {
        assert_eq!(power_ratio_to_db(0.0), f64::NEG_INFINITY);
        assert!(power_ratio_to_db(-1.0).is_nan());
    }

    #[test]
    fn db_roundtrip() {
        let r = db_to_power_ratio(power_ratio_to_db(2.0));
        assert!((r - 2.0).abs() < 1e-12);
    }

    #[test]
    fn convert_inch_to_mm() {
        let mm = convert(0.9, "inch", "mm").unwrap();
        assert!((mm - 22.86).abs() < 1e-9);
    }

    #[test]
    fn convert_rejects_cross_quantity() {
        assert_eq!(
            convert(1.0, "GHz", "mm"),
            Err(ConversionError::QuantityMismatch {
                from: "GHz".into(),
                to: "mm".into()
            })
        );
        assert!(matches!(
            convert(1.0, "furlong", "m"),
            Err(ConversionError::UnknownUnit(_))
        ));
    }
}
