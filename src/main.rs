//! Entry point for **monmenu**.
//!
//! Parses the CLI, resolves the runtime [`Config`] (flags over config file
//! over detection), installs the file logger, and runs the interactive
//! flow with the platform's backend and picker.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use log::info;

use monmenu::app::App;
use monmenu::backends;
use monmenu::config::{self, Config, ConfigFile, PickerKind, Platform};
use monmenu::error::Error;
use monmenu::logging;
use monmenu::picker;

fn cli() -> Command<'static> {
    Command::new("monmenu")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reconfigure connected displays through an interactive menu")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to the JSON config file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("picker")
                .long("picker")
                .value_name("KIND")
                .help("Menu frontend: auto, rofi, console, gridview")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("de")
                .long("de")
                .value_name("TAG")
                .help("Desktop environment to restart: i3, bspwm, sway")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .help("Append log lines to this file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print tool invocations instead of running them")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = cli().get_matches();

    let platform = match Platform::detect() {
        Some(platform) => platform,
        None => {
            eprintln!(
                "monmenu: {}",
                Error::UnsupportedPlatform(std::env::consts::OS.to_owned())
            );
            std::process::exit(1);
        }
    };

    let config_path = matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_file);
    let (file, file_note) = match ConfigFile::load(&config_path) {
        Ok(file) => (file, format!("loaded config from {}", config_path.display())),
        Err(e) => (
            ConfigFile::default(),
            format!("no config file ({}), using defaults", e),
        ),
    };

    let picker_flag = matches.get_one::<String>("picker").and_then(|tag| {
        let kind = PickerKind::from_tag(tag);
        if kind.is_none() {
            eprintln!("monmenu: unknown picker {:?}, using auto", tag);
        }
        kind
    });

    let config = Config::resolve(
        platform,
        &file,
        matches.get_one::<String>("de").map(String::as_str),
        picker_flag,
        matches.get_one::<String>("log-file").map(PathBuf::from),
        matches.get_one::<bool>("dry-run").copied().unwrap_or(false),
    );

    logging::init(&config.log_file);
    info!("{}", file_note);

    let backend = backends::for_platform(&config);
    let picker = picker::for_kind(config.picker, config.platform);
    info!(
        "monmenu starting: backend {}, desktop {}",
        backend.name(),
        config.desktop.as_tag()
    );

    App::new(&config, backend.as_ref(), picker.as_ref()).run();
}
