use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::conversion::{self, ConversionError};
use crate::quantity::QuantityKind;
use crate::rf::{is_positive, SweepRange};

const CONFIG_PATH: &str = "config.toml";

/// 입력/출력 표시 단위 기본값. 단위 테이블의 기호를 그대로 쓴다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    /// 도파관 단면 치수 단위
    pub length: String,
    pub frequency: String,
    pub waveguide_length: String,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: "mm".into(),
            frequency: "GHz".into(),
            waveguide_length: "m".into(),
        }
    }
}

/// 도파관 계산 화면의 초기 입력값.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveguideDefaults {
    pub waveguide: String,
    pub material: String,
    pub mode_m: u32,
    pub mode_n: u32,
    pub mu_r: f64,
    pub eps_r: f64,
}

impl Default for WaveguideDefaults {
    fn default() -> Self {
        Self {
            waveguide: "WR90".into(),
            material: "Aluminum".into(),
            mode_m: 1,
            mode_n: 0,
            mu_r: 1.0,
            eps_r: 1.0,
        }
    }
}

/// 감쇠 스윕/그래프 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    pub start_ghz: f64,
    pub stop_ghz: f64,
    pub step_ghz: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            start_ghz: 1.0,
            stop_ghz: 10.0,
            step_ghz: 0.1,
            width: 900,
            height: 600,
        }
    }
}

impl SweepSettings {
    pub fn range(&self) -> SweepRange {
        SweepRange {
            start_hz: self.start_ghz * 1e9,
            stop_hz: self.stop_ghz * 1e9,
            step_hz: self.step_ghz * 1e9,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto", "ko", "en" 등
    pub language: String,
    /// 외부 언어팩 디렉터리 (없으면 내장 문자열)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    pub default_units: DefaultUnits,
    pub defaults: WaveguideDefaults,
    pub sweep: SweepSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            default_units: DefaultUnits::default(),
            defaults: WaveguideDefaults::default(),
            sweep: SweepSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 설정값 자체가 잘못된 경우
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::Invalid(msg) => write!(f, "잘못된 설정값: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

impl From<ConversionError> for ConfigError {
    fn from(value: ConversionError) -> Self {
        ConfigError::Invalid(value.to_string())
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_PATH))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 만들어 저장한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!("설정 로드: {}", path.display());
        cfg.validate()?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        tracing::info!("기본 설정 생성: {}", path.display());
        Ok(cfg)
    }
}

fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_to(self, Path::new(CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_to(self, path)
    }

    /// 단위 기호와 스윕 구간이 올바른지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        conversion::expect_kind(&self.default_units.length, QuantityKind::Length)?;
        conversion::expect_kind(&self.default_units.frequency, QuantityKind::Frequency)?;
        conversion::expect_kind(&self.default_units.waveguide_length, QuantityKind::Length)?;
        self.sweep
            .range()
            .frequencies_hz()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if !is_positive(self.defaults.mu_r) || !is_positive(self.defaults.eps_r) {
            return Err(ConfigError::Invalid(
                "mu_r, eps_r는 0보다 커야 합니다.".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("language = \"en\"\n[sweep]\nstop_ghz = 20.0\n").unwrap();
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.sweep.stop_ghz, 20.0);
        assert_eq!(cfg.sweep.start_ghz, 1.0);
        assert_eq!(cfg.default_units.frequency, "GHz");
    }

    #[test]
    fn wrong_unit_kind_rejected() {
        let mut cfg = Config::default();
        cfg.default_units.length = "GHz".into();
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn nan_permittivity_rejected() {
        let mut cfg = Config::default();
        cfg.defaults.eps_r = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn oversized_sweep_rejected_without_allocating() {
        let cfg: Config = toml::from_str("[sweep]\nstep_ghz = 1e-300\n").unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn roundtrip_through_file() {
        let dir = std::env::temp_dir().join(format!("rf_loss_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);
        let created = load_from(&path).unwrap();
        assert!(path.exists());
        let mut changed = created.clone();
        changed.defaults.material = "Copper".into();
        changed.save_to(&path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.defaults.material, "Copper");
        let _ = fs::remove_dir_all(&dir);
    }
}
