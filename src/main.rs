// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toasts - toast notification demo

USAGE:
  iced_toasts [OPTIONS] [MESSAGE]

OPTIONS:
  -h, --help             Print this help
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml

ARGS:
  MESSAGE                Shown as an info toast at startup
";

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring --lang");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring --config-dir");
        None
    });
    let message = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        config_dir,
        message,
    })
}

/// Installs the fmt subscriber; `RUST_LOG` overrides the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iced_toasts=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
