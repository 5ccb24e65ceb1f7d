//! rcalc - Terminal Calculator
//!
//! Interactive calculator for the terminal, with a one-shot `--eval` mode for scripts.

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, Command};
use rcalc::render::{ColorTheme, TerminalUI, ThemeName};
use rcalc::{Application, RcalcError, Settings};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = Command::new("rcalc")
        .version(rcalc::VERSION)
        .about("A keyboard-driven terminal calculator")
        .long_about(
            "rcalc is a terminal calculator with an on-screen keypad. Digits, '.', and \
             + - * / are typed directly; Enter or '=' evaluates, Esc clears, Delete clears \
             the current entry, 'n' toggles the sign, 'r' takes the square root and '%' \
             divides the current number by 100.",
        )
        .arg(
            Arg::new("eval")
                .short('e')
                .long("eval")
                .value_name("KEYS")
                .help("Type KEYS into the calculator, print the display and exit"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("THEME")
                .value_parser(["default", "monochrome", "high-contrast"])
                .help("Color theme for the interactive session"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Read settings from FILE instead of the default location"),
        )
        .arg(
            Arg::new("no-keypad")
                .long("no-keypad")
                .action(ArgAction::SetTrue)
                .help("Hide the on-screen keypad"),
        )
        .get_matches();

    if let Some(keys) = matches.get_one::<String>("eval") {
        let display = rcalc::run_keys(keys)?;
        println!("{}", display);
        if let Some(kind) = display.error() {
            return Err(RcalcError::from(kind).into());
        }
        return Ok(());
    }

    let mut settings = Settings::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    if let Some(theme) = matches.get_one::<String>("theme") {
        settings.theme = theme.parse::<ThemeName>()?;
    }
    if matches.get_flag("no-keypad") {
        settings.show_keypad = false;
    }
    log::debug!("settings: {:?}", settings);

    let ui_renderer = Box::new(TerminalUI::with_theme(ColorTheme::from_name(settings.theme))?);
    let mut app = Application::new(ui_renderer, &settings)?;

    app.run().await?;

    Ok(())
}
