//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod i18n;
pub mod material_db;
pub mod plot;
pub mod quantity;
pub mod rf;
pub mod ui_cli;
pub mod units;
pub mod waveguide_db;
