use anstyle::{AnsiColor, Color, Style};
use clap::builder::Styles;

use crate::utils::CHECK;

pub fn get_styles() -> Styles {
    let heading = Style::new()
        .bold()
        .underline()
        .fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

    Styles::styled()
        .usage(heading)
        .header(heading)
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .error(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
}

fn fmt_style(msg: &str, style: &Style) -> String {
    format!("{style}{msg}{style:#}")
}

pub(crate) fn fmt_green(msg: &str) -> String {
    fmt_style(msg, &Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
}

pub(crate) fn fmt_bold(msg: &str) -> String {
    fmt_style(msg, &Style::new().bold())
}

pub(crate) fn fmt_dimmed(msg: &str) -> String {
    fmt_style(msg, &Style::new().dimmed())
}

pub(crate) fn fmt_success(msg: &str) -> String {
    format!("{} {msg}", fmt_green(CHECK))
}
