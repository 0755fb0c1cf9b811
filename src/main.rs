use clap::Parser;
use rf_loss_toolbox::config::{self, Config};
use rf_loss_toolbox::i18n::{self, keys, Translator};
use rf_loss_toolbox::{app, ui_cli::Cli};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 명령을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("설정 로드 실패, 기본값 사용: {err}");
            Config::default()
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    if let Err(err) = app::run(cli, &cfg, &lang) {
        let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}
