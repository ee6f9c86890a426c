// SPDX-License-Identifier: MPL-2.0
use iced_qr::app::{self, paths, Flags};

const HELP: &str = "\
iced_qr - QR code generator

USAGE:
  iced_qr [OPTIONS] [TEXT]

OPTIONS:
  --lang <LOCALE>      UI language (e.g. en-US, fr)
  --i18n-dir <DIR>     Directory with additional .ftl translation files
  --config-dir <DIR>   Directory for settings.toml
  --data-dir <DIR>     Directory for persisted application state
  -h, --help           Print help
  -V, --version        Print version

ARGS:
  [TEXT]               Text to pre-fill the generator input with
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("iced_qr {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        data_dir: args.opt_value_from_str("--data-dir").unwrap(),
        initial_text: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    // Path overrides must be registered before anything resolves a path
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
