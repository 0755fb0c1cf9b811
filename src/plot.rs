//! 재질별 도파관 감쇠 곡선 그래프.
//!
//! PNG는 plotters로 그리고, GUI(egui_plot)도 같은 축 범위 규칙([`axis_range`])과
//! 같은 곡선 색([`series_color`])을 쓴다.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use plotters::prelude::*;

use crate::rf::SweepSeries;

/// 기본 그래프 제목
pub const DEFAULT_TITLE: &str = "Rect. Waveguide Attenuation";
pub const X_LABEL: &str = "Frequency [GHz]";
pub const Y_LABEL: &str = "Attenuation [dB/m]";

const MIN_WIDTH: u32 = 200;
const MIN_HEIGHT: u32 = 150;

/// 자동 y축 상한 = 유한 감쇠값 중앙값 × 이 배수 (최대값을 넘지 않음)
const AUTO_Y_MEDIAN_FACTOR: f64 = 4.0;
const Y_HEADROOM: f64 = 1.05;

const PALETTE: [[u8; 3]; 12] = [
    [31, 119, 180],
    [255, 127, 14],
    [44, 160, 44],
    [214, 39, 40],
    [148, 103, 189],
    [140, 86, 75],
    [227, 119, 194],
    [127, 127, 127],
    [188, 189, 34],
    [23, 190, 207],
    [0, 0, 128],
    [128, 0, 0],
];

/// 그래프 생성 오류.
#[derive(Debug)]
pub enum PlotError {
    /// 그릴 유한한 데이터가 없음
    NoData,
    /// 이미지 크기가 너무 작음
    InvalidSize { width: u32, height: u32 },
    /// plotters 그리기 오류
    Draw(String),
    /// PNG 인코딩/저장 오류
    Image(image::ImageError),
}

impl std::fmt::Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotError::NoData => write!(f, "그릴 데이터가 없습니다 (모든 주파수가 차단 영역)"),
            PlotError::InvalidSize { width, height } => {
                write!(f, "이미지 크기가 너무 작습니다: {width}x{height}")
            }
            PlotError::Draw(msg) => write!(f, "그래프 그리기 오류: {msg}"),
            PlotError::Image(e) => write!(f, "이미지 저장 오류: {e}"),
        }
    }
}

impl std::error::Error for PlotError {}

impl From<image::ImageError> for PlotError {
    fn from(value: image::ImageError) -> Self {
        PlotError::Image(value)
    }
}

fn draw_err<E: std::fmt::Debug>(e: E) -> PlotError {
    PlotError::Draw(format!("{e:?}"))
}

/// 그래프 옵션.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    /// y축 상한 [dB/m]. None이면 [`axis_range`]의 자동 규칙을 따른다.
    pub y_max_db_per_m: Option<f64>,
    pub title: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            y_max_db_per_m: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// i번째 곡선 색상 (RGB). GUI와 PNG가 같은 색을 쓴다.
pub fn series_color(i: usize) -> [u8; 3] {
    PALETTE[i % PALETTE.len()]
}

/// 그래프 축 범위. 주파수는 GHz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub f_min_ghz: f64,
    pub f_max_ghz: f64,
    pub y_max_db_per_m: f64,
}

/// 유한한 점들로부터 축 범위를 정한다.
///
/// 차단주파수 바로 위의 점은 매우 커서 최대값으로 축을 잡으면 나머지 곡선이 바닥에 붙는다.
/// 그래서 자동 상한은 중앙값 × 4 (단, 최대값 이하)에 5% 여유를 둔다.
/// `y_max_override`가 양수면 그 값을 그대로 쓴다.
pub fn axis_range(
    series: &[SweepSeries],
    y_max_override: Option<f64>,
) -> Result<AxisRange, PlotError> {
    let mut values = Vec::new();
    let (mut f_min, mut f_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in series.iter().flat_map(|s| s.points.iter()) {
        if p.attenuation_db_per_m.is_finite() {
            values.push(p.attenuation_db_per_m);
            f_min = f_min.min(p.frequency_hz);
            f_max = f_max.max(p.frequency_hz);
        }
    }
    if values.is_empty() {
        return Err(PlotError::NoData);
    }
    values.sort_by(f64::total_cmp);
    let max = values[values.len() - 1];
    let median = values[values.len() / 2];

    let y_max = match y_max_override {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => ((median * AUTO_Y_MEDIAN_FACTOR).min(max) * Y_HEADROOM).max(f64::MIN_POSITIVE),
    };

    let (mut f_min_ghz, mut f_max_ghz) = (f_min / 1e9, f_max / 1e9);
    if f_max_ghz <= f_min_ghz {
        f_min_ghz -= 0.5;
        f_max_ghz += 0.5;
    }
    Ok(AxisRange {
        f_min_ghz,
        f_max_ghz,
        y_max_db_per_m: y_max,
    })
}

/// 곡선 점 목록 `[GHz, dB/m]`. 차단 영역(NaN)은 빼고 y는 축 상한에서 자른다.
pub fn clipped_curve(series: &SweepSeries, y_max_db_per_m: f64) -> Vec<[f64; 2]> {
    series
        .points
        .iter()
        .filter(|p| p.attenuation_db_per_m.is_finite())
        .map(|p| {
            [
                p.frequency_hz / 1e9,
                p.attenuation_db_per_m.min(y_max_db_per_m),
            ]
        })
        .collect()
}

/// 감쇠 곡선을 메모리 이미지로 그린다 (제목, 축 이름, 재질 범례 포함).
pub fn render_attenuation_image(
    series: &[SweepSeries],
    opts: &PlotOptions,
) -> Result<RgbImage, PlotError> {
    let (w, h) = (opts.width, opts.height);
    if w < MIN_WIDTH || h < MIN_HEIGHT {
        return Err(PlotError::InvalidSize {
            width: w,
            height: h,
        });
    }
    let range = axis_range(series, opts.y_max_db_per_m)?;

    let mut buffer = vec![0u8; w as usize * h as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (w, h)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&opts.title, ("sans-serif", 20).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(
                range.f_min_ghz..range.f_max_ghz,
                0.0..range.y_max_db_per_m,
            )
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .axis_desc_style(("sans-serif", 14).into_font())
            .label_style(("sans-serif", 12).into_font())
            .light_line_style(RGBColor(230, 230, 230))
            .draw()
            .map_err(draw_err)?;

        for (i, s) in series.iter().enumerate() {
            let [r, g, b] = series_color(i);
            let color = RGBColor(r, g, b);
            let data = clipped_curve(s, range.y_max_db_per_m);
            chart
                .draw_series(LineSeries::new(
                    data.into_iter().map(|[x, y]| (x, y)),
                    color.stroke_width(2),
                ))
                .map_err(draw_err)?
                .label(s.material)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .label_font(("sans-serif", 12).into_font())
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    RgbImage::from_raw(w, h, buffer).ok_or(PlotError::InvalidSize {
        width: w,
        height: h,
    })
}

/// 감쇠 곡선을 PNG 파일로 저장한다.
pub fn render_attenuation_png(
    series: &[SweepSeries],
    opts: &PlotOptions,
    path: &Path,
) -> Result<(), PlotError> {
    let img = render_attenuation_image(series, opts)?;
    img.save_with_format(path, ImageFormat::Png)?;
    tracing::info!("감쇠 그래프 저장: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rf::{attenuation_sweep, SweepPoint, SweepRange};

    fn point(f_ghz: f64, att: f64) -> SweepPoint {
        SweepPoint {
            frequency_hz: f_ghz * 1e9,
            attenuation_db_per_m: att,
        }
    }

    #[test]
    fn near_cutoff_spike_does_not_set_axis() {
        let series = attenuation_sweep(0.02286, 0.01016, 6.5571e9, &SweepRange::default()).unwrap();
        let range = axis_range(&series, None).unwrap();
        let max = series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.attenuation_db_per_m)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        assert!(range.y_max_db_per_m < max);
        assert!(range.y_max_db_per_m > 0.0);
        assert!((range.f_min_ghz - 6.6).abs() < 1e-9);
        assert!((range.f_max_ghz - 10.0).abs() < 1e-9);
    }

    #[test]
    fn flat_curve_uses_its_maximum() {
        let s = SweepSeries {
            material: "Copper",
            points: vec![point(1.0, 0.2), point(2.0, 0.2), point(3.0, 0.2)],
        };
        let range = axis_range(&[s], None).unwrap();
        assert!((range.y_max_db_per_m - 0.2 * Y_HEADROOM).abs() < 1e-12);
    }

    #[test]
    fn override_wins_and_curve_is_clipped() {
        let s = SweepSeries {
            material: "Copper",
            points: vec![point(1.0, f64::NAN), point(2.0, 5.0), point(3.0, 0.1)],
        };
        let range = axis_range(std::slice::from_ref(&s), Some(1.0)).unwrap();
        assert_eq!(range.y_max_db_per_m, 1.0);
        assert_eq!(clipped_curve(&s, 1.0), vec![[2.0, 1.0], [3.0, 0.1]]);
    }

    #[test]
    fn all_below_cutoff_is_no_data() {
        let series = vec![SweepSeries {
            material: "Copper",
            points: vec![point(1.0, f64::NAN)],
        }];
        assert!(matches!(axis_range(&series, None), Err(PlotError::NoData)));
        assert!(matches!(
            render_attenuation_image(&series, &PlotOptions::default()),
            Err(PlotError::NoData)
        ));
    }

    #[test]
    fn tiny_canvas_rejected() {
        let opts = PlotOptions {
            width: 50,
            height: 50,
            ..PlotOptions::default()
        };
        assert!(matches!(
            render_attenuation_image(&[], &opts),
            Err(PlotError::InvalidSize { .. })
        ));
    }
}
