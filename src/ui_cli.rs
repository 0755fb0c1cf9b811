use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::material_db;
use crate::plot::{self, PlotOptions};
use crate::quantity::QuantityKind;
use crate::rf::{self, RectWaveguideInput, SweepRange};
use crate::units;
use crate::waveguide_db::{self, WaveguideType};

/// RF 손실 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "rf_loss_toolbox_cli", version, about = "Waveguide / VSWR / polarization loss calculator")]
pub struct Cli {
    /// 출력 언어 (auto, ko, en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 직사각형 도파관 TEmn 차단주파수
    Cutoff(CutoffArgs),
    /// 차단주파수 + 감쇠 + 전체 손실
    Waveguide(WaveguideArgs),
    /// VSWR → 부정합 손실, 반사계수
    Mismatch {
        #[arg(long, allow_hyphen_values = true)]
        vswr: f64,
    },
    /// 송수신 편파 조합의 편파 손실
    Polarization {
        #[arg(long)]
        tx: String,
        #[arg(long)]
        rx: String,
    },
    /// 재질별 감쇠 스윕 (표 출력, 선택적으로 PNG 저장)
    Sweep(SweepArgs),
    /// 내장 테이블 출력
    List {
        #[arg(value_enum)]
        what: ListKind,
    },
    /// 단위 변환 (같은 물리량끼리)
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Materials,
    Waveguides,
    Units,
}

/// 도파관 단면 지정: 규격명(--type) 또는 a/b 직접 입력.
#[derive(Debug, Args)]
pub struct GeometryArgs {
    /// 도파관 규격 (예: WR90). a/b를 주면 무시된다.
    #[arg(long = "type", short = 't')]
    pub wg_type: Option<String>,
    #[arg(short = 'a', long)]
    pub a: Option<f64>,
    #[arg(short = 'b', long)]
    pub b: Option<f64>,
    /// a/b 단위 (기본: 설정의 default_units.length)
    #[arg(long)]
    pub unit: Option<String>,
}

#[derive(Debug, Args)]
pub struct ModeArgs {
    #[arg(short = 'm', long)]
    pub mode_m: Option<u32>,
    #[arg(short = 'n', long)]
    pub mode_n: Option<u32>,
    #[arg(long)]
    pub mu_r: Option<f64>,
    #[arg(long)]
    pub eps_r: Option<f64>,
}

#[derive(Debug, Args)]
pub struct CutoffArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,
    #[command(flatten)]
    pub mode: ModeArgs,
    /// 결과 주파수 단위
    #[arg(long)]
    pub freq_unit: Option<String>,
}

#[derive(Debug, Args)]
pub struct WaveguideArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,
    #[command(flatten)]
    pub mode: ModeArgs,
    /// 운용 주파수
    #[arg(long, short = 'f')]
    pub freq: f64,
    #[arg(long)]
    pub freq_unit: Option<String>,
    /// 내벽 재질명 (예: Copper, "Brass (30% Zn)")
    #[arg(long)]
    pub material: Option<String>,
    /// 전도율 [S/m]. 지정하면 재질보다 우선한다.
    #[arg(long)]
    pub sigma: Option<f64>,
    #[arg(long, short = 'l')]
    pub length: Option<f64>,
    #[arg(long)]
    pub length_unit: Option<String>,
}

#[derive(Debug, Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,
    #[command(flatten)]
    pub mode: ModeArgs,
    #[arg(long)]
    pub start_ghz: Option<f64>,
    #[arg(long)]
    pub stop_ghz: Option<f64>,
    #[arg(long)]
    pub step_ghz: Option<f64>,
    /// PNG 출력 경로
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

/// 해석된 도파관 단면 (SI).
struct Geometry {
    a_m: f64,
    b_m: f64,
    label: String,
    wg: Option<&'static WaveguideType>,
}

fn resolve_geometry(cfg: &Config, args: &GeometryArgs) -> Result<Geometry, AppError> {
    match (args.a, args.b) {
        (Some(a), Some(b)) => {
            let unit = args.unit.as_deref().unwrap_or(&cfg.default_units.length);
            let scale = conversion::expect_kind(unit, QuantityKind::Length)?;
            Ok(Geometry {
                a_m: a * scale,
                b_m: b * scale,
                label: format!("a={a} {unit}, b={b} {unit}"),
                wg: None,
            })
        }
        (Some(_), None) | (None, Some(_)) => {
            Err(AppError::MissingArgument("a와 b는 함께 지정해야 합니다."))
        }
        (None, None) => {
            let name = args.wg_type.as_deref().unwrap_or(&cfg.defaults.waveguide);
            let wg = waveguide_db::find_waveguide(name)
                .ok_or_else(|| AppError::UnknownWaveguide(name.to_string()))?;
            Ok(Geometry {
                a_m: wg.a_m(),
                b_m: wg.b_m(),
                label: wg.designator.to_string(),
                wg: Some(wg),
            })
        }
    }
}

fn resolve_mode(cfg: &Config, args: &ModeArgs) -> (u32, u32, f64, f64) {
    (
        args.mode_m.unwrap_or(cfg.defaults.mode_m),
        args.mode_n.unwrap_or(cfg.defaults.mode_n),
        args.mu_r.unwrap_or(cfg.defaults.mu_r),
        args.eps_r.unwrap_or(cfg.defaults.eps_r),
    )
}

/// NaN은 "N/A", 무한대는 "inf"로 표시한다.
fn fmt_value(tr: &Translator, v: f64, precision: usize) -> String {
    if v.is_nan() {
        tr.t(keys::NOT_APPLICABLE).to_string()
    } else if v.is_infinite() {
        "inf".to_string()
    } else {
        format!("{v:.precision$}")
    }
}

/// 차단주파수 명령을 처리한다.
pub fn handle_cutoff(tr: &Translator, cfg: &Config, args: &CutoffArgs) -> Result<(), AppError> {
    let geo = resolve_geometry(cfg, &args.geometry)?;
    let (m, n, mu_r, eps_r) = resolve_mode(cfg, &args.mode);
    let freq_unit = args.freq_unit.as_deref().unwrap_or(&cfg.default_units.frequency);
    conversion::expect_kind(freq_unit, QuantityKind::Frequency)?;

    let fc = rf::cutoff_frequency(geo.a_m, geo.b_m, m, n, mu_r, eps_r)?;
    println!("{} (TE{m}{n}):", geo.label);
    println!(
        "{}: {} {freq_unit}",
        tr.t(keys::CUTOFF),
        fmt_value(tr, conversion::from_si(fc, freq_unit)?, 6)
    );
    if let Some(wg) = geo.wg {
        println!("{}: {}", tr.t(keys::RECOMMENDED_BAND), wg.band);
    }
    Ok(())
}

/// 도파관 종합 계산 명령을 처리한다.
pub fn handle_waveguide(
    tr: &Translator,
    cfg: &Config,
    args: &WaveguideArgs,
) -> Result<(), AppError> {
    let geo = resolve_geometry(cfg, &args.geometry)?;
    let (m, n, mu_r, eps_r) = resolve_mode(cfg, &args.mode);
    let freq_unit = args.freq_unit.as_deref().unwrap_or(&cfg.default_units.frequency);
    let f_hz = args.freq * conversion::expect_kind(freq_unit, QuantityKind::Frequency)?;
    let length_unit = args
        .length_unit
        .as_deref()
        .unwrap_or(&cfg.default_units.waveguide_length);
    let length_m = args.length.unwrap_or(rf::DEFAULT_WAVEGUIDE_LENGTH_M)
        * conversion::expect_kind(length_unit, QuantityKind::Length)?;

    let (material_label, sigma) = match args.sigma {
        Some(s) => (format!("σ={s:e} S/m"), s),
        None => {
            let name = args.material.as_deref().unwrap_or(&cfg.defaults.material);
            let mat = material_db::find_material(name)
                .ok_or_else(|| AppError::UnknownMaterial(name.to_string()))?;
            (
                format!("{} (σ={:e} S/m)", mat.name, mat.conductivity_s_per_m),
                mat.conductivity_s_per_m,
            )
        }
    };

    let res = rf::compute_rect_waveguide(&RectWaveguideInput {
        a_m: geo.a_m,
        b_m: geo.b_m,
        mode_m: m,
        mode_n: n,
        mu_r,
        eps_r,
        conductivity_s_per_m: sigma,
        frequency_hz: f_hz,
        length_m,
    })?;

    println!("{}, TE{m}{n}, {material_label}", geo.label);
    if let Some(wg) = geo.wg {
        println!("{}: {}", tr.t(keys::RECOMMENDED_BAND), wg.band);
    }
    println!(
        "{}: {} {freq_unit}",
        tr.t(keys::CUTOFF),
        fmt_value(tr, conversion::from_si(res.cutoff_hz, freq_unit)?, 6)
    );
    println!(
        "{}: {} dB/m",
        tr.t(keys::ATTENUATION),
        fmt_value(tr, res.loss.attenuation_db_per_m, 4)
    );
    println!(
        "{}: {} dB",
        tr.t(keys::TOTAL_LOSS),
        fmt_value(tr, res.loss.total_loss_db, 4)
    );
    if !res.loss.is_applicable() {
        println!("{}", tr.t(keys::BELOW_CUTOFF_NOTE));
    }
    Ok(())
}

/// VSWR 명령을 처리한다.
pub fn handle_mismatch(tr: &Translator, vswr: f64) -> Result<(), AppError> {
    let res = rf::mismatch_loss(vswr)?;
    println!("VSWR {vswr}");
    println!(
        "{}: {}",
        tr.t(keys::REFLECTION_COEFF),
        fmt_value(tr, res.reflection_coefficient, 4)
    );
    println!(
        "{}: {}",
        tr.t(keys::REFLECTED_POWER),
        fmt_value(tr, res.reflected_power_fraction, 4)
    );
    println!(
        "{}: {} dB",
        tr.t(keys::MISMATCH_LOSS),
        fmt_value(tr, res.loss_db, 4)
    );
    Ok(())
}

/// 편파 손실 명령을 처리한다. 알 수 없는 편파는 N/A로 표시한다.
pub fn handle_polarization(tr: &Translator, tx: &str, rx: &str) {
    match rf::polarization_loss_by_name(tx, rx) {
        Some(loss) => println!("{} ({tx} → {rx}): {loss} dB", tr.t(keys::POLARIZATION_LOSS)),
        None => {
            println!(
                "{} ({tx} → {rx}): {}",
                tr.t(keys::POLARIZATION_LOSS),
                tr.t(keys::NOT_APPLICABLE)
            );
            println!("{}", tr.t(keys::UNKNOWN_POLARIZATION));
        }
    }
}

/// 재질별 감쇠 스윕 명령을 처리한다.
pub fn handle_sweep(tr: &Translator, cfg: &Config, args: &SweepArgs) -> Result<(), AppError> {
    let geo = resolve_geometry(cfg, &args.geometry)?;
    let (m, n, mu_r, eps_r) = resolve_mode(cfg, &args.mode);
    let fc = rf::cutoff_frequency(geo.a_m, geo.b_m, m, n, mu_r, eps_r)?;

    let base = cfg.sweep.range();
    let range = SweepRange {
        start_hz: args.start_ghz.map_or(base.start_hz, |g| g * 1e9),
        stop_hz: args.stop_ghz.map_or(base.stop_hz, |g| g * 1e9),
        step_hz: args.step_ghz.map_or(base.step_hz, |g| g * 1e9),
    };
    let series = rf::attenuation_sweep(geo.a_m, geo.b_m, fc, &range)?;

    println!(
        "{}, TE{m}{n}, {}: {} GHz",
        geo.label,
        tr.t(keys::CUTOFF),
        fmt_value(tr, fc / 1e9, 4)
    );
    let mut header = format!("{:>16}", tr.t(keys::SWEEP_HEADER));
    for s in &series {
        header.push_str(&format!(" | {:>18}", s.material));
    }
    println!("{header}");
    if let Some(first) = series.first() {
        for (i, p) in first.points.iter().enumerate() {
            let mut row = format!("{:>16.3}", p.frequency_hz / 1e9);
            for s in &series {
                row.push_str(&format!(
                    " | {:>18}",
                    fmt_value(tr, s.points[i].attenuation_db_per_m, 4)
                ));
            }
            println!("{row}");
        }
    }

    if let Some(path) = &args.out {
        let opts = PlotOptions {
            width: cfg.sweep.width,
            height: cfg.sweep.height,
            y_max_db_per_m: None,
            title: format!("{} ({})", plot::DEFAULT_TITLE, geo.label),
        };
        plot::render_attenuation_png(&series, &opts, path)?;
        println!("{}: {}", tr.t(keys::PLOT_SAVED), path.display());
    }
    Ok(())
}

/// 내장 테이블을 출력한다.
pub fn handle_list(tr: &Translator, what: ListKind) {
    match what {
        ListKind::Materials => {
            println!("{}", tr.t(keys::LIST_MATERIALS));
            for m in material_db::materials() {
                println!("{:<20} {:>10.3e}", m.name, m.conductivity_s_per_m);
            }
        }
        ListKind::Waveguides => {
            println!("{}", tr.t(keys::LIST_WAVEGUIDES));
            for w in waveguide_db::waveguide_types() {
                println!(
                    "{:<8} {:>8} {:>8}  {}",
                    w.designator, w.a_inch, w.b_inch, w.band
                );
            }
        }
        ListKind::Units => {
            println!("{}", tr.t(keys::LIST_UNITS));
            for u in units::all_units() {
                println!("{:<10} {:>16e}  {}", u.symbol, u.to_si, u.kind.name());
            }
        }
    }
}

/// 단위 변환 명령을 처리한다.
pub fn handle_convert(tr: &Translator, value: f64, from: &str, to: &str) -> Result<(), AppError> {
    let result = conversion::convert(value, from, to)?;
    println!("{}: {value} {from} = {result} {to}", tr.t(keys::CONVERT_RESULT));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_waveguide_command() {
        let cli = Cli::try_parse_from([
            "rf_loss_toolbox_cli",
            "waveguide",
            "--type",
            "WR90",
            "-f",
            "10",
            "--material",
            "Copper",
        ])
        .unwrap();
        match cli.command {
            Command::Waveguide(args) => {
                assert_eq!(args.geometry.wg_type.as_deref(), Some("WR90"));
                assert_eq!(args.freq, 10.0);
                assert_eq!(args.material.as_deref(), Some("Copper"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn geometry_needs_both_dimensions() {
        let args = GeometryArgs {
            wg_type: None,
            a: Some(22.86),
            b: None,
            unit: None,
        };
        assert!(matches!(
            resolve_geometry(&Config::default(), &args),
            Err(AppError::MissingArgument(_))
        ));
    }

    #[test]
    fn geometry_from_dimensions_uses_unit() {
        let args = GeometryArgs {
            wg_type: None,
            a: Some(22.86),
            b: Some(10.16),
            unit: Some("mm".into()),
        };
        let geo = resolve_geometry(&Config::default(), &args).unwrap();
        assert!((geo.a_m - 0.02286).abs() < 1e-12);
        assert!(geo.wg.is_none());
    }

    #[test]
    fn not_applicable_formatting() {
        let tr = Translator::new("en");
        assert_eq!(fmt_value(&tr, f64::NAN, 3), "N/A");
        assert_eq!(fmt_value(&tr, f64::INFINITY, 3), "inf");
        assert_eq!(fmt_value(&tr, 0.51153, 3), "0.512");
    }
}
