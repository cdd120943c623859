use colored::*;
use dealer_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
}

pub fn print(msg: &str) {
    info!(target: "dealer::print", raw_msg = msg);
}

pub fn banner(quiet: bool) {
    if quiet {
        return;
    }

    let text_content: String = format!("⟦ SAPPHIRE SHOWROOM v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_blue().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }
    print(&header_line(msg).to_string());
}

fn header_line(msg: &str) -> ColoredString {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_blue(),
        "─".repeat(right)
    )
    .bright_black()
}

/// Asks for the next answer. Nothing is shown in quiet mode.
pub fn prompt(text: &str, quiet: bool) {
    if quiet {
        return;
    }
    print(&format!("{}", text.trim_end().color(colors::PROMPT)));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}
