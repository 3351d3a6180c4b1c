//! Terminal output for command results.
//!
//! Every status line starts with a mark: `✓` done, `✗` failed (stderr),
//! `⚠` needs attention, `→` what to run next. Styling is dropped when
//! `NO_COLOR` is set.

use console::Style;
use std::fmt::Display;

#[derive(Debug, Clone, Copy)]
enum Mark {
    Done,
    Failed,
    Attention,
    Next,
}

impl Mark {
    fn glyph(self) -> &'static str {
        match self {
            Mark::Done => "✓",
            Mark::Failed => "✗",
            Mark::Attention => "⚠",
            Mark::Next => "→",
        }
    }

    fn style(self) -> Style {
        match self {
            Mark::Done => Style::new().green(),
            Mark::Failed => Style::new().red(),
            Mark::Attention => Style::new().yellow(),
            Mark::Next => Style::new().cyan(),
        }
    }
}

fn paint(text: impl Display, style: Style) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        text.to_string()
    } else {
        style.apply_to(text).to_string()
    }
}

fn marked(mark: Mark, msg: &str) -> String {
    format!("{} {}", paint(mark.glyph(), mark.style()), msg)
}

/// `✓ encrypted config/secrets.yml`
pub fn success(msg: &str) {
    println!("{}", marked(Mark::Done, msg));
}

/// Printed on stderr.
pub fn error(msg: &str) {
    eprintln!("{}", marked(Mark::Failed, msg));
}

pub fn warn(msg: &str) {
    println!("{}", marked(Mark::Attention, msg));
}

/// `→ run: gcp-encrypt init`
pub fn hint(msg: &str) {
    println!("{}", marked(Mark::Next, &paint(msg, Mark::Next.style())));
}

/// Indented `label  value` line used by `status`.
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        paint(label, Style::new().dim()),
        paint(value, Style::new().bold())
    );
}

pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// A repository path, highlighted for inline use.
pub fn path(p: &str) -> String {
    paint(p, Style::new().cyan())
}

pub fn dimmed(msg: &str) {
    println!("{}", paint(msg, Style::new().dim()));
}

/// Blank line, bold title, then an underline as wide as the title.
pub fn section(title: &str) {
    let underline = "─".repeat(title.chars().count());
    println!();
    println!("{}", paint(title, Style::new().bold()));
    println!("{}", paint(underline, Style::new().dim()));
}
