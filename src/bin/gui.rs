#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use rfd::FileDialog;
use std::{env, fs, path::Path};
use rf_loss_toolbox::{
    config, conversion,
    i18n::{self, keys, Translator},
    material_db,
    plot::{self, PlotOptions},
    quantity::QuantityKind,
    rf::{self, Polarization, RectWaveguideInput, RectWaveguideResult, SweepRange, SweepSeries},
    waveguide_db,
};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // --lang xx 또는 --lang=xx (auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!("설정 로드 실패, 기본값 사용: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "RF Loss Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 등록한다.
/// 1) assets/fonts/malgun.ttf
/// 2) Windows 시스템 폰트
/// 모두 없으면 Err (기본 폰트 유지).
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Korean font not found; using default font.".into())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Waveguide,
    Vswr,
    Polarization,
    Sweep,
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    lang_input: String,
    status: Option<String>,
    tab: Tab,

    // 도파관 단면
    wg_index: usize,
    custom_dims: bool,
    dim_a: f64,
    dim_b: f64,
    mode_m: u32,
    mode_n: u32,
    mu_r: f64,
    eps_r: f64,
    // 재질
    material_index: usize,
    custom_sigma: bool,
    sigma: f64,
    freq: f64,
    length_m: f64,

    vswr: f64,
    tx_pol: Polarization,
    rx_pol: Polarization,

    sweep_start_ghz: f64,
    sweep_stop_ghz: f64,
    sweep_step_ghz: f64,
    sweep: Option<Result<(f64, Vec<SweepSeries>), String>>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::info!("GUI language resolved: {lang_code}");

        let wg_index = waveguide_db::waveguide_types()
            .iter()
            .position(|w| w.designator.eq_ignore_ascii_case(&config.defaults.waveguide))
            .unwrap_or(0);
        let material_index = material_db::materials()
            .iter()
            .position(|m| m.name.eq_ignore_ascii_case(&config.defaults.material))
            .unwrap_or(0);
        let wg = &waveguide_db::waveguide_types()[wg_index];
        let (dim_a, dim_b) = wg
            .dimensions_in(&config.default_units.length)
            .unwrap_or((wg.a_m(), wg.b_m()));
        let sigma = material_db::materials()[material_index].conductivity_s_per_m;

        Self {
            lang_input: config.language.clone(),
            tr,
            status: None,
            tab: Tab::Waveguide,
            wg_index,
            custom_dims: false,
            dim_a,
            dim_b,
            mode_m: config.defaults.mode_m,
            mode_n: config.defaults.mode_n,
            mu_r: config.defaults.mu_r,
            eps_r: config.defaults.eps_r,
            material_index,
            custom_sigma: false,
            sigma,
            freq: 10.0,
            length_m: rf::DEFAULT_WAVEGUIDE_LENGTH_M,
            vswr: 2.0,
            tx_pol: Polarization::Horizontal,
            rx_pol: Polarization::Horizontal,
            sweep_start_ghz: config.sweep.start_ghz,
            sweep_stop_ghz: config.sweep.stop_ghz,
            sweep_step_ghz: config.sweep.step_ghz,
            sweep: None,
            config,
        }
    }

    fn length_scale(&self) -> f64 {
        conversion::expect_kind(&self.config.default_units.length, QuantityKind::Length)
            .unwrap_or(1.0)
    }

    fn freq_scale(&self) -> f64 {
        conversion::expect_kind(&self.config.default_units.frequency, QuantityKind::Frequency)
            .unwrap_or(1.0)
    }

    /// 현재 선택된 규격(또는 직접 입력값)의 a, b [m]
    fn dims_m(&self) -> (f64, f64) {
        if self.custom_dims {
            let s = self.length_scale();
            (self.dim_a * s, self.dim_b * s)
        } else {
            let wg = &waveguide_db::waveguide_types()[self.wg_index];
            (wg.a_m(), wg.b_m())
        }
    }

    fn current_sigma(&self) -> f64 {
        if self.custom_sigma {
            self.sigma
        } else {
            material_db::materials()[self.material_index].conductivity_s_per_m
        }
    }

    fn compute_waveguide(&self) -> Result<RectWaveguideResult, rf::RfCalcError> {
        let (a_m, b_m) = self.dims_m();
        rf::compute_rect_waveguide(&RectWaveguideInput {
            a_m,
            b_m,
            mode_m: self.mode_m,
            mode_n: self.mode_n,
            mu_r: self.mu_r,
            eps_r: self.eps_r,
            conductivity_s_per_m: self.current_sigma(),
            frequency_hz: self.freq * self.freq_scale(),
            length_m: self.length_m,
        })
    }

    fn run_sweep(&mut self) {
        let (a_m, b_m) = self.dims_m();
        let range = SweepRange {
            start_hz: self.sweep_start_ghz * 1e9,
            stop_hz: self.sweep_stop_ghz * 1e9,
            step_hz: self.sweep_step_ghz * 1e9,
        };
        let result = rf::cutoff_frequency(a_m, b_m, self.mode_m, self.mode_n, self.mu_r, self.eps_r)
            .and_then(|fc| rf::attenuation_sweep(a_m, b_m, fc, &range).map(|s| (fc, s)))
            .map_err(|e| e.to_string());
        self.sweep = Some(result);
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        for (tab, key) in [
            (Tab::Waveguide, keys::GUI_TAB_WAVEGUIDE),
            (Tab::Vswr, keys::GUI_TAB_VSWR),
            (Tab::Polarization, keys::GUI_TAB_POLARIZATION),
            (Tab::Sweep, keys::GUI_TAB_SWEEP),
        ] {
            ui.selectable_value(&mut self.tab, tab, tr.t(key));
        }
        ui.separator();
        ui.label("Language");
        egui::ComboBox::from_id_source("lang_choice")
            .selected_text(&self.lang_input)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.lang_input, "auto".into(), "System");
                ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
            });
        if ui.button("Save").clicked() {
            self.config.language = self.lang_input.clone();
            let resolved = i18n::resolve_language(&self.config.language, None);
            self.tr = Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
            self.status = Some(match self.config.save() {
                Ok(()) => "Saved.".into(),
                Err(e) => format!("Save error: {e}"),
            });
        }
        if let Some(msg) = &self.status {
            ui.label(msg);
        }
    }

    fn ui_geometry(&mut self, ui: &mut egui::Ui) {
        let types = waveguide_db::waveguide_types();
        let len_unit = self.config.default_units.length.clone();
        egui::Grid::new("geometry_grid").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::GUI_WAVEGUIDE_TYPE));
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_source("wg_type")
                    .selected_text(types[self.wg_index].designator)
                    .show_ui(ui, |ui| {
                        for (i, w) in types.iter().enumerate() {
                            ui.selectable_value(&mut self.wg_index, i, w.designator);
                        }
                    });
                ui.checkbox(&mut self.custom_dims, "a/b");
            });
            ui.end_row();

            if !self.custom_dims {
                if let Ok((a, b)) = types[self.wg_index].dimensions_in(&len_unit) {
                    self.dim_a = a;
                    self.dim_b = b;
                }
            }
            ui.label(self.tr.t(keys::GUI_DIM_A));
            ui.add_enabled(
                self.custom_dims,
                egui::DragValue::new(&mut self.dim_a).speed(0.1).suffix(format!(" {len_unit}")),
            );
            ui.end_row();
            ui.label(self.tr.t(keys::GUI_DIM_B));
            ui.add_enabled(
                self.custom_dims,
                egui::DragValue::new(&mut self.dim_b).speed(0.1).suffix(format!(" {len_unit}")),
            );
            ui.end_row();

            ui.label(self.tr.t(keys::GUI_MODE));
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut self.mode_m).clamp_range(0..=10));
                ui.add(egui::DragValue::new(&mut self.mode_n).clamp_range(0..=10));
            });
            ui.end_row();
            ui.label(self.tr.t(keys::GUI_MU_R));
            ui.add(egui::DragValue::new(&mut self.mu_r).speed(0.01));
            ui.end_row();
            ui.label(self.tr.t(keys::GUI_EPS_R));
            ui.add(egui::DragValue::new(&mut self.eps_r).speed(0.01));
            ui.end_row();
        });
    }

    fn ui_waveguide(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_PARAMETERS));
        self.ui_geometry(ui);

        let materials = material_db::materials();
        let freq_unit = self.config.default_units.frequency.clone();
        egui::Grid::new("material_grid").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::GUI_MATERIAL));
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_source("material")
                    .selected_text(materials[self.material_index].name)
                    .show_ui(ui, |ui| {
                        for (i, m) in materials.iter().enumerate() {
                            ui.selectable_value(&mut self.material_index, i, m.name);
                        }
                    });
                ui.checkbox(&mut self.custom_sigma, "σ");
            });
            ui.end_row();
            if !self.custom_sigma {
                self.sigma = materials[self.material_index].conductivity_s_per_m;
            }
            ui.label(self.tr.t(keys::GUI_CONDUCTIVITY));
            ui.add_enabled(
                self.custom_sigma,
                egui::DragValue::new(&mut self.sigma).speed(1e5),
            );
            ui.end_row();
            ui.label(self.tr.t(keys::GUI_FREQUENCY));
            ui.add(egui::DragValue::new(&mut self.freq).speed(0.01).suffix(format!(" {freq_unit}")));
            ui.end_row();
            ui.label(self.tr.t(keys::GUI_LENGTH));
            ui.add(egui::DragValue::new(&mut self.length_m).speed(0.01).suffix(" m"));
            ui.end_row();
        });

        ui.separator();
        ui.heading(self.tr.t(keys::GUI_RESULTS));
        match self.compute_waveguide() {
            Ok(res) => {
                let fc = res.cutoff_hz / self.freq_scale();
                ui.label(format!("{}: {fc:.4} {freq_unit}", self.tr.t(keys::CUTOFF)));
                if !self.custom_dims {
                    let wg = &waveguide_db::waveguide_types()[self.wg_index];
                    ui.label(format!("{}: {}", self.tr.t(keys::RECOMMENDED_BAND), wg.band));
                }
                if res.loss.is_applicable() {
                    ui.label(format!(
                        "{}: {:.4} dB/m",
                        self.tr.t(keys::ATTENUATION),
                        res.loss.attenuation_db_per_m
                    ));
                    ui.label(format!(
                        "{}: {:.4} dB",
                        self.tr.t(keys::TOTAL_LOSS),
                        res.loss.total_loss_db
                    ));
                } else {
                    ui.label(format!(
                        "{}: {}",
                        self.tr.t(keys::ATTENUATION),
                        self.tr.t(keys::NOT_APPLICABLE)
                    ));
                    ui.label(self.tr.t(keys::BELOW_CUTOFF_NOTE));
                }
            }
            Err(e) => {
                ui.colored_label(egui::Color32::RED, e.to_string());
            }
        }
    }

    fn ui_vswr(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_PARAMETERS));
        ui.horizontal(|ui| {
            ui.label(self.tr.t(keys::GUI_VSWR));
            ui.add(egui::DragValue::new(&mut self.vswr).speed(0.01).clamp_range(1.0..=100.0));
        });
        ui.separator();
        ui.heading(self.tr.t(keys::GUI_RESULTS));
        match rf::mismatch_loss(self.vswr) {
            Ok(res) => {
                ui.label(format!(
                    "{}: {:.4}",
                    self.tr.t(keys::REFLECTION_COEFF),
                    res.reflection_coefficient
                ));
                ui.label(format!(
                    "{}: {:.4}",
                    self.tr.t(keys::REFLECTED_POWER),
                    res.reflected_power_fraction
                ));
                ui.label(format!("{}: {:.4} dB", self.tr.t(keys::MISMATCH_LOSS), res.loss_db));
            }
            Err(e) => {
                ui.colored_label(egui::Color32::RED, e.to_string());
            }
        }
    }

    fn ui_polarization(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_PARAMETERS));
        egui::Grid::new("pol_grid").num_columns(2).show(ui, |ui| {
            for (id, key, value) in [
                ("tx_pol", keys::GUI_TX_POL, &mut self.tx_pol),
                ("rx_pol", keys::GUI_RX_POL, &mut self.rx_pol),
            ] {
                ui.label(self.tr.t(key));
                egui::ComboBox::from_id_source(id)
                    .selected_text(value.label())
                    .show_ui(ui, |ui| {
                        for p in Polarization::ALL {
                            ui.selectable_value(value, p, p.label());
                        }
                    });
                ui.end_row();
            }
        });
        ui.separator();
        ui.heading(self.tr.t(keys::GUI_RESULTS));
        ui.label(format!(
            "{}: {} dB",
            self.tr.t(keys::POLARIZATION_LOSS),
            rf::polarization_loss(self.tx_pol, self.rx_pol)
        ));
    }

    fn ui_sweep(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_PARAMETERS));
        self.ui_geometry(ui);
        ui.horizontal(|ui| {
            ui.label("GHz");
            ui.add(egui::DragValue::new(&mut self.sweep_start_ghz).speed(0.1));
            ui.label("~");
            ui.add(egui::DragValue::new(&mut self.sweep_stop_ghz).speed(0.1));
            ui.label("step");
            ui.add(egui::DragValue::new(&mut self.sweep_step_ghz).speed(0.01));
        });
        ui.horizontal(|ui| {
            if ui.button("▶").clicked() {
                self.run_sweep();
            }
            let has_data = matches!(self.sweep, Some(Ok(_)));
            if ui
                .add_enabled(has_data, egui::Button::new(self.tr.t(keys::GUI_EXPORT_PNG)))
                .clicked()
            {
                self.export_png();
            }
        });
        if let Some(msg) = &self.status {
            ui.label(msg);
        }
        ui.separator();

        match &self.sweep {
            Some(Ok((fc, series))) => {
                ui.label(format!(
                    "{} | {}: {:.4} GHz",
                    self.tr.t(keys::GUI_PLOT_TITLE),
                    self.tr.t(keys::CUTOFF),
                    fc / 1e9
                ));
                draw_sweep(ui, series);
            }
            Some(Err(e)) => {
                ui.colored_label(egui::Color32::RED, e);
            }
            None => {}
        }
    }

    fn export_png(&mut self) {
        let Some(Ok((_, series))) = &self.sweep else {
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("attenuation.png")
            .save_file()
        else {
            return;
        };
        let title = if self.custom_dims {
            plot::DEFAULT_TITLE.to_string()
        } else {
            let wg = &waveguide_db::waveguide_types()[self.wg_index];
            format!("{} ({})", plot::DEFAULT_TITLE, wg.designator)
        };
        let opts = PlotOptions {
            width: self.config.sweep.width,
            height: self.config.sweep.height,
            y_max_db_per_m: None,
            title,
        };
        self.status = Some(match plot::render_attenuation_png(series, &opts, &path) {
            Ok(()) => format!("{}: {}", self.tr.t(keys::PLOT_SAVED), path.display()),
            Err(e) => {
                tracing::warn!("PNG 저장 실패: {e}");
                e.to_string()
            }
        });
    }
}

/// 감쇠 곡선을 그린다. 축 범위는 PNG와 같은 [`plot::axis_range`] 규칙을 따른다.
fn draw_sweep(ui: &mut egui::Ui, series: &[SweepSeries]) {
    let Ok(range) = plot::axis_range(series, None) else {
        return;
    };
    Plot::new("attenuation_plot")
        .height(360.0)
        .legend(Legend::default())
        .x_axis_label(plot::X_LABEL)
        .y_axis_label(plot::Y_LABEL)
        .include_x(range.f_min_ghz)
        .include_x(range.f_max_ghz)
        .include_y(0.0)
        .include_y(range.y_max_db_per_m)
        .show(ui, |plot_ui| {
            for (i, s) in series.iter().enumerate() {
                let [r, g, b] = plot::series_color(i);
                let points = PlotPoints::from(plot::clipped_curve(s, range.y_max_db_per_m));
                plot_ui.line(
                    Line::new(points)
                        .name(s.material)
                        .color(egui::Color32::from_rgb(r, g, b)),
                );
            }
        });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("RF Loss Toolbox");
                ui.label(" | Desktop GUI");
            });
        });

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Waveguide => self.ui_waveguide(ui),
                    Tab::Vswr => self.ui_vswr(ui),
                    Tab::Polarization => self.ui_polarization(ui),
                    Tab::Sweep => self.ui_sweep(ui),
                });
        });
    }
}
