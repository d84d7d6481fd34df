// SPDX-License-Identifier: MPL-2.0
use invest_compass::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Invest Compass - investment questionnaire

USAGE:
  invest_compass [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          Interface language (en-US, zh-CN)
  --data-dir <DIR>         Directory for the draft and saved responses
  --config-dir <DIR>       Directory for settings.toml

ENVIRONMENT:
  INVEST_COMPASS_DATA_DIR, INVEST_COMPASS_CONFIG_DIR, RUST_LOG
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    init_tracing();

    let lang: Option<String> = opt_value(&mut args, "--lang");
    let data_dir: Option<String> = opt_value(&mut args, "--data-dir");
    let config_dir: Option<String> = opt_value(&mut args, "--config-dir");

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(data_dir.clone(), config_dir.clone());

    app::run(Flags {
        lang,
        data_dir: data_dir.map(PathBuf::from),
        config_dir: config_dir.map(PathBuf::from),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("invest_compass=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "invalid value for {key}");
            None
        }
    }
}
