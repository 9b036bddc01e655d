// SPDX-License-Identifier: MPL-2.0
use docdesk::app::{self, Flags};
use docdesk::ui::notifications::Anchor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
DocDesk - document workspace with toast notifications

USAGE:
  docdesk [OPTIONS]

OPTIONS:
  --config <PATH>        Use this settings file instead of the default
  --duration-ms <MS>     Default toast lifetime (0 or less keeps toasts until dismissed)
  --anchor <CORNER>      top-right | top-left | bottom-right | bottom-left
  --verbose              Debug logging (RUST_LOG overrides)
  -h, --help             Print this help
";

fn parse_anchor(value: &str) -> Result<Anchor, String> {
    Anchor::from_name(value).ok_or_else(|| format!("unknown anchor '{value}'"))
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<(Flags, bool), pico_args::Error> {
    let flags = Flags {
        config_path: args.opt_value_from_os_str("--config", |s| {
            Ok::<PathBuf, String>(PathBuf::from(s))
        })?,
        duration_ms: args.opt_value_from_str("--duration-ms")?,
        anchor: args.opt_value_from_fn("--anchor", parse_anchor)?,
    };
    let verbose = args.contains("--verbose");
    Ok((flags, verbose))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "docdesk=debug" } else { "docdesk=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (flags, verbose) = match parse_flags(&mut args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_tracing(verbose);

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}
