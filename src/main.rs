// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use iced_gallery::{config, diagnostics};

const HELP: &str = "\
iced_gallery - image search gallery

USAGE:
  iced_gallery [OPTIONS] [QUERY]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --query <TEXT>        Search submitted at startup
  --config-dir <PATH>   Directory holding settings.toml
  --api-key <KEY>       Pixabay API key
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, warning) = config::load();
    diagnostics::init_tracing(config.diagnostics.log_level.as_deref());

    if let Some(key) = &warning {
        tracing::warn!(key = %key, "settings file could not be loaded, using defaults");
    }

    app::run(flags, config, warning)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let query: Option<String> = args.opt_value_from_str("--query")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let api_key = args.opt_value_from_str("--api-key")?;

    // A bare positional argument is accepted as the query.
    let positional = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        query: query.or(positional),
        config_dir,
        api_key,
    })
}
