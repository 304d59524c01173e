// SPDX-License-Identifier: MPL-2.0
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use valentine_portal::app::{self, config, Flags};

const ENV_LOG_JSON: &str = "VALENTINE_PORTAL_LOG_JSON";

const HELP: &str = "\
Ren's Valentine Portal

USAGE:
  valentine_portal [OPTIONS]

OPTIONS:
  --config-dir DIR   Directory holding settings.toml and secrets.toml
  --data-dir DIR     Directory holding timeline.json, letters.json and quiz.json
  --photos-dir DIR   Directory scanned for the photo wall
  --init-config      Write a default settings.toml and exit
  -h, --help         Print this help
";

struct Args {
    flags: Flags,
    init_config: bool,
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool(ENV_LOG_JSON, false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        init_config: args.contains("--init-config"),
        flags: Flags {
            config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
            data_dir: args.opt_value_from_str::<_, PathBuf>("--data-dir")?,
            photos_dir: args.opt_value_from_str::<_, PathBuf>("--photos-dir")?,
        },
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(arguments = ?rest, "ignoring unknown arguments");
    }

    Ok(Some(parsed))
}

fn write_default_config(config_dir: Option<PathBuf>) -> ExitCode {
    match config::save_with_override(&config::Config::default(), config_dir) {
        Ok(path) => {
            println!("wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("could not write settings: {err}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    if args.init_config {
        return write_default_config(args.flags.config_dir);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting valentine portal");
    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "GUI runtime failed");
            ExitCode::FAILURE
        }
    }
}
