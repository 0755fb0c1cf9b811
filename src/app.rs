use crate::config::Config;
use crate::conversion;
use crate::i18n::Translator;
use crate::plot;
use crate::rf;
use crate::ui_cli::{self, Cli, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// RF 계산 오류
    Rf(rf::RfCalcError),
    /// 그래프 생성 오류
    Plot(plot::PlotError),
    /// 재질 테이블에 없는 재질
    UnknownMaterial(String),
    /// 도파관 테이블에 없는 규격
    UnknownWaveguide(String),
    /// 필수 인자 누락
    MissingArgument(&'static str),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Rf(e) => write!(f, "RF 계산 오류: {e}"),
            AppError::Plot(e) => write!(f, "그래프 오류: {e}"),
            AppError::UnknownMaterial(m) => write!(f, "알 수 없는 재질: {m}"),
            AppError::UnknownWaveguide(w) => write!(f, "알 수 없는 도파관 규격: {w}"),
            AppError::MissingArgument(msg) => write!(f, "인자 누락: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<rf::RfCalcError> for AppError {
    fn from(value: rf::RfCalcError) -> Self {
        AppError::Rf(value)
    }
}

impl From<plot::PlotError> for AppError {
    fn from(value: plot::PlotError) -> Self {
        AppError::Plot(value)
    }
}

/// 파싱된 CLI 명령을 실행한다. `lang_code`는 이미 결정된 언어 코드(ko/en)다.
pub fn run(cli: Cli, config: &Config, lang_code: &str) -> Result<(), AppError> {
    let tr = Translator::new_with_pack(lang_code, config.language_pack_dir.as_deref());
    tracing::debug!(lang = %lang_code, command = ?cli.command, "명령 실행");
    match cli.command {
        Command::Cutoff(args) => ui_cli::handle_cutoff(&tr, config, &args),
        Command::Waveguide(args) => ui_cli::handle_waveguide(&tr, config, &args),
        Command::Mismatch { vswr } => ui_cli::handle_mismatch(&tr, vswr),
        Command::Polarization { tx, rx } => {
            ui_cli::handle_polarization(&tr, &tx, &rx);
            Ok(())
        }
        Command::Sweep(args) => ui_cli::handle_sweep(&tr, config, &args),
        Command::List { what } => {
            ui_cli::handle_list(&tr, what);
            Ok(())
        }
        Command::Convert { value, from, to } => ui_cli::handle_convert(&tr, value, &from, &to),
    }
}
