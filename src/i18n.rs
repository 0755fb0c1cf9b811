use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const NOT_APPLICABLE: &str = "general.not_applicable";

    pub const CUTOFF: &str = "result.cutoff";
    pub const ATTENUATION: &str = "result.attenuation";
    pub const TOTAL_LOSS: &str = "result.total_loss";
    pub const RECOMMENDED_BAND: &str = "result.recommended_band";
    pub const BELOW_CUTOFF_NOTE: &str = "result.below_cutoff_note";
    pub const MISMATCH_LOSS: &str = "result.mismatch_loss";
    pub const REFLECTION_COEFF: &str = "result.reflection_coeff";
    pub const REFLECTED_POWER: &str = "result.reflected_power";
    pub const POLARIZATION_LOSS: &str = "result.polarization_loss";
    pub const UNKNOWN_POLARIZATION: &str = "result.unknown_polarization";
    pub const CONVERT_RESULT: &str = "result.convert";
    pub const PLOT_SAVED: &str = "result.plot_saved";

    pub const LIST_MATERIALS: &str = "list.materials";
    pub const LIST_WAVEGUIDES: &str = "list.waveguides";
    pub const LIST_UNITS: &str = "list.units";
    pub const SWEEP_HEADER: &str = "sweep.header";

    pub const GUI_TAB_WAVEGUIDE: &str = "gui.tab.waveguide";
    pub const GUI_TAB_VSWR: &str = "gui.tab.vswr";
    pub const GUI_TAB_POLARIZATION: &str = "gui.tab.polarization";
    pub const GUI_TAB_SWEEP: &str = "gui.tab.sweep";
    pub const GUI_PARAMETERS: &str = "gui.parameters";
    pub const GUI_RESULTS: &str = "gui.results";
    pub const GUI_FREQUENCY: &str = "gui.frequency";
    pub const GUI_WAVEGUIDE_TYPE: &str = "gui.waveguide_type";
    pub const GUI_DIM_A: &str = "gui.dim_a";
    pub const GUI_DIM_B: &str = "gui.dim_b";
    pub const GUI_LENGTH: &str = "gui.length";
    pub const GUI_MATERIAL: &str = "gui.material";
    pub const GUI_CONDUCTIVITY: &str = "gui.conductivity";
    pub const GUI_EPS_R: &str = "gui.eps_r";
    pub const GUI_MU_R: &str = "gui.mu_r";
    pub const GUI_MODE: &str = "gui.mode";
    pub const GUI_VSWR: &str = "gui.vswr";
    pub const GUI_TX_POL: &str = "gui.tx_pol";
    pub const GUI_RX_POL: &str = "gui.rx_pol";
    pub const GUI_EXPORT_PNG: &str = "gui.export_png";
    pub const GUI_PLOT_TITLE: &str = "gui.plot_title";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 > 내장 문자열 순이며 영어에 없는 키는 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    for var in ["LC_ALL", "LANG"] {
        if let Some(code) = std::env::var(var).ok().as_deref().and_then(normalize_locale_string) {
            return Some(code);
        }
    }
    None
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc.split(['.', '_', '-']).next().unwrap_or_default();
    normalize_lang(lang)
}

/// TOML 언어팩을 로드한다. `[result] cutoff = "..."` 처럼 중첩 테이블은 점 키로 펼친다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("언어팩 없음 ({}): {e}", path.display());
            return None;
        }
    };
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        tracing::warn!("언어팩을 해석할 수 없음: {}", path.display());
    }
    map
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        NOT_APPLICABLE => "N/A",
        CUTOFF => "차단주파수",
        ATTENUATION => "감쇠",
        TOTAL_LOSS => "전체 손실",
        RECOMMENDED_BAND => "권장 대역",
        BELOW_CUTOFF_NOTE => "운용 주파수가 차단주파수보다 낮아 감쇠 공식을 적용할 수 없습니다.",
        MISMATCH_LOSS => "부정합 손실",
        REFLECTION_COEFF => "반사계수",
        REFLECTED_POWER => "반사 전력 비율",
        POLARIZATION_LOSS => "편파 손실",
        UNKNOWN_POLARIZATION => "알 수 없는 편파입니다 (Horizontal, Vertical, RHC, LHC)",
        CONVERT_RESULT => "변환 결과",
        PLOT_SAVED => "그래프 저장",
        LIST_MATERIALS => "재질 / 전도율 [S/m]",
        LIST_WAVEGUIDES => "규격 / a [inch] / b [inch] / 권장 대역",
        LIST_UNITS => "단위 / SI 배율 / 물리량",
        SWEEP_HEADER => "주파수 [GHz]",
        GUI_TAB_WAVEGUIDE => "직사각형 도파관",
        GUI_TAB_VSWR => "VSWR",
        GUI_TAB_POLARIZATION => "편파 손실",
        GUI_TAB_SWEEP => "감쇠 곡선",
        GUI_PARAMETERS => "입력값",
        GUI_RESULTS => "결과",
        GUI_FREQUENCY => "주파수",
        GUI_WAVEGUIDE_TYPE => "도파관 규격",
        GUI_DIM_A => "a (넓은 면)",
        GUI_DIM_B => "b (좁은 면)",
        GUI_LENGTH => "도파관 길이",
        GUI_MATERIAL => "내벽 재질",
        GUI_CONDUCTIVITY => "전도율 [S/m]",
        GUI_EPS_R => "비유전율 εr",
        GUI_MU_R => "비투자율 μr",
        GUI_MODE => "TE 모드 (m, n)",
        GUI_VSWR => "VSWR",
        GUI_TX_POL => "송신 편파",
        GUI_RX_POL => "수신 편파",
        GUI_EXPORT_PNG => "PNG로 저장",
        GUI_PLOT_TITLE => "직사각형 도파관 감쇠 [dB/m]",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        NOT_APPLICABLE => "N/A",
        CUTOFF => "Cut-off frequency",
        ATTENUATION => "Attenuation",
        TOTAL_LOSS => "Total loss",
        RECOMMENDED_BAND => "Recommended band",
        BELOW_CUTOFF_NOTE => "Operating frequency is below cut-off; attenuation formula not applicable.",
        MISMATCH_LOSS => "Mismatch loss",
        REFLECTION_COEFF => "Reflection coefficient",
        REFLECTED_POWER => "Fraction of power reflected",
        POLARIZATION_LOSS => "Polarization loss",
        UNKNOWN_POLARIZATION => "Unknown polarization (Horizontal, Vertical, RHC, LHC)",
        CONVERT_RESULT => "Result",
        PLOT_SAVED => "Plot saved",
        LIST_MATERIALS => "Material / conductivity [S/m]",
        LIST_WAVEGUIDES => "Type / a [inch] / b [inch] / recommended band",
        LIST_UNITS => "Unit / SI multiplier / quantity",
        SWEEP_HEADER => "Frequency [GHz]",
        GUI_TAB_WAVEGUIDE => "Rectangular WG",
        GUI_TAB_VSWR => "VSWR",
        GUI_TAB_POLARIZATION => "Polarization",
        GUI_TAB_SWEEP => "Attenuation curve",
        GUI_PARAMETERS => "Parameters",
        GUI_RESULTS => "Results",
        GUI_FREQUENCY => "Frequency",
        GUI_WAVEGUIDE_TYPE => "Waveguide type",
        GUI_DIM_A => "a (broad wall)",
        GUI_DIM_B => "b (narrow wall)",
        GUI_LENGTH => "Waveguide length",
        GUI_MATERIAL => "Wall material",
        GUI_CONDUCTIVITY => "Conductivity [S/m]",
        GUI_EPS_R => "Rel. permittivity εr",
        GUI_MU_R => "Rel. permeability μr",
        GUI_MODE => "TE mode (m, n)",
        GUI_VSWR => "VSWR",
        GUI_TX_POL => "Tx polarization",
        GUI_RX_POL => "Rx polarization",
        GUI_EXPORT_PNG => "Save as PNG",
        GUI_PLOT_TITLE => "Rect. waveguide attenuation [dB/m]",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_language_wins() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn english_and_korean_strings() {
        let en = Translator::new("en");
        let ko = Translator::new("ko");
        assert_eq!(en.t(keys::CUTOFF), "Cut-off frequency");
        assert_eq!(ko.t(keys::CUTOFF), "차단주파수");
        assert_eq!(en.t(keys::NOT_APPLICABLE), "N/A");
    }

    #[test]
    fn pack_overrides_builtin() {
        let dir = std::env::temp_dir().join(format!("rf_loss_i18n_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("en.toml"), "[result]\ncutoff = \"fc\"\n").unwrap();
        let tr = Translator::new_with_pack("en", dir.to_str());
        assert_eq!(tr.t(keys::CUTOFF), "fc");
        assert_eq!(tr.t(keys::ATTENUATION), "Attenuation");
        let _ = fs::remove_dir_all(&dir);
    }
}
