use std::{ffi::OsString, time::Duration};

use anyhow::{ensure, Result};
use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser};
use log::warn;

/// Displays a simulation of John Conway's Game of Life
#[derive(Parser, Debug)]
#[command(name = "life_curses", bin_name = "life_curses", disable_help_flag = true)]
pub struct Args {
    /// Specifies the width of the game board.
    #[arg(short = 'w', value_name = "width", default_value = "80", value_parser = atoi)]
    pub width: u64,
    /// Specifies the height of the game board.
    #[arg(short = 'h', value_name = "height", default_value = "24", value_parser = atoi)]
    pub height: u64,
    /// Specifies the delay (in ms) between each generation.
    #[arg(short = 'd', value_name = "delay", default_value = "100", value_parser = atoi)]
    pub delay: u64,
    /// Specifies the number of generations to simulate.
    #[arg(short = 'g', value_name = "generations", default_value = "5000", value_parser = atoi)]
    pub generations: u64,
    /// Keep simulating until interrupted.
    #[arg(long, conflicts_with = "generations")]
    pub forever: bool,
    /// Seed for the initial board. Defaults to the current time.
    #[arg(long, value_name = "seed")]
    pub seed: Option<u64>,
    /// Display help.
    #[arg(short = '?', long = "help", action = ArgAction::Help)]
    #[allow(dead_code)]
    pub help: Option<bool>,
}

/// Validated run settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub delay: Duration,
    /// `None` runs until the process is stopped.
    pub generations: Option<u64>,
    pub seed: Option<u64>,
}

/// Reads a number the way C's `atoi` does: optional leading whitespace and
/// `+`, then as many digits as are present. No digits means 0.
fn atoi(s: &str) -> Result<u64, String> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    Ok(s[..digits].parse().unwrap_or(0))
}

impl Args {
    pub fn into_config(self) -> Result<Config> {
        ensure!(self.width > 0, "width must be a positive integer");
        ensure!(self.height > 0, "height must be a positive integer");
        ensure!(self.delay > 0, "delay must be a positive integer");
        ensure!(self.generations > 0, "generations must be a positive integer");
        Ok(Config {
            width: usize::try_from(self.width)?,
            height: usize::try_from(self.height)?,
            delay: Duration::from_millis(self.delay),
            generations: (!self.forever).then_some(self.generations),
            seed: self.seed,
        })
    }
}

pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Turns argv into a `Config`, or into the usage text to show in its place.
pub fn resolve<I, T>(argv: I) -> Result<Config, String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => args.into_config().map_err(|e| {
            warn!("invalid arguments: {}", e);
            usage()
        }),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => Err(usage()),
        Err(e) => {
            warn!("invalid arguments: {:?}", e.kind());
            Err(usage())
        }
    }
}
