// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::logging;

const HELP: &str = "\
iced_toast - toast notification demo

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --message <TEXT>      Show a toast with this message at startup
  --type <SEVERITY>     info, warning, error or success (default: info)
  --duration <MS>       Auto-dismiss delay in milliseconds (default: 3000)
  --config-dir <PATH>   Read settings.toml from this directory
  --log-level <FILTER>  Log filter when RUST_LOG is unset (default: info)
  -h, --help            Print help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        message: args.opt_value_from_str("--message")?,
        severity: args.opt_value_from_str("--type")?,
        duration_ms: args.opt_value_from_str("--duration")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }
    Ok(flags)
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(flags.log_level.as_deref());
    tracing::info!(?flags, "starting");

    app::run(flags)
}
