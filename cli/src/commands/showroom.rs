use std::io::{self, BufRead};

use anyhow::Context;
use colored::*;
use dealer_common::{config::Config, info, success, warn};
use dealer_core::showroom::{self, Console, STOCKED_VEHICLES};

use crate::intake::StdinIntake;
use crate::mprint;
use crate::terminal::{colors, print};

/// Prints walkthrough output through the terminal layer.
pub struct TerminalConsole<'a> {
    cfg: &'a Config,
}

impl<'a> TerminalConsole<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }
}

impl Console for TerminalConsole<'_> {
    fn line(&mut self, msg: &str) {
        print::print(msg);
    }

    fn section(&mut self, title: &str) {
        if !self.cfg.quiet {
            mprint!();
        }
        print::header(title, self.cfg.quiet);
    }
}

pub fn showroom(cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    tour(stdin.lock(), cfg)
}

fn tour<R: BufRead>(source: R, cfg: &Config) -> anyhow::Result<()> {
    if !cfg.quiet {
        info!("answers may be separated by spaces or newlines");
    }

    let mut intake = StdinIntake::new(source, cfg);
    let mut console = TerminalConsole::new(cfg);

    showroom::run(&mut intake, &mut console).context("showroom tour aborted")?;

    let unread = intake.unread();
    if unread > 0 {
        warn!("ignored {unread} unread input token(s)");
    }

    tour_ends(cfg);
    Ok(())
}

fn tour_ends(cfg: &Config) {
    let stocked: ColoredString = format!("{STOCKED_VEHICLES} vehicles").bold().green();
    let output: &ColoredString =
        &format!("Showroom tour complete: {stocked} on display").color(colors::TEXT_DEFAULT);

    if cfg.quiet {
        success!("{}", output);
    } else {
        print::fat_separator();
        print::centerln(&output.to_string());
    }
}
