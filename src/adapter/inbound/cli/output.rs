//! Terminal output for CLI handlers.
//!
//! Every helper honours the global flags. With `--json` each call becomes
//! one `{"type": .., "payload": ..}` line on stdout; with `--quiet` only
//! warnings, errors and the data a command was asked for are printed.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream, Style};
use serde_json::{json, Value};

/// Global flags that shape handler output.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn cell() -> &'static RwLock<OutputConfig> {
    OUTPUT.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn current() -> OutputConfig {
    *cell().read().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Install the flags parsed from the command line.
pub fn configure(config: OutputConfig) {
    *cell().write().unwrap_or_else(std::sync::PoisonError::into_inner) = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn is_quiet() -> bool {
    current().quiet
}

#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// Route one message: a JSON line in JSON mode, `human` otherwise.
///
/// `always` messages are printed in quiet mode too.
fn emit(kind: &str, payload: Value, always: bool, human: impl FnOnce()) {
    let config = current();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": payload }));
    } else if always || !config.quiet {
        human();
    }
}

/// Style `value` for stdout when color is supported or forced.
fn paint(value: impl Display, style: Style) -> String {
    value
        .if_supports_color(Stream::Stdout, |v| v.style(style))
        .to_string()
}

/// Style `value` unless JSON output is on.
fn tint(value: impl Display, style: Style) -> String {
    if is_json() {
        value.to_string()
    } else {
        paint(value, style)
    }
}

/// Application name and version.
pub fn header(version: &str) {
    emit(
        "header",
        json!({ "app": "headline-reactor", "version": version }),
        false,
        || {
            println!(
                "{} {}",
                paint("headline-reactor", Style::new().bold()),
                paint(version, Style::new().dimmed())
            );
            println!();
        },
    );
}

/// A labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        json!({ "label": label, "value": value }),
        false,
        || println!("  {} {value}", paint(format!("{label:<12}"), Style::new().dimmed())),
    );
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), false, || {
        println!("  {} {message}", paint("✓", Style::new().green()));
    });
}

pub fn warning(message: &str) {
    emit("warning", json!({ "message": message }), true, || {
        println!("  {} {message}", paint("⚠", Style::new().yellow()));
    });
}

/// An error line on stderr, in every mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
        return;
    }
    eprintln!(
        "  {} {message}",
        "×".if_supports_color(Stream::Stderr, |t| t.red())
    );
}

pub fn section(title: &str) {
    emit("section", json!({ "title": title }), false, || {
        println!();
        println!("{}", paint(title, Style::new().bold()));
    });
}

/// A timestamped line for streaming commands.
pub fn info(timestamp: &str, label: &str, message: &str) {
    emit(
        "info",
        json!({ "timestamp": timestamp, "label": label, "message": message }),
        false,
        || {
            println!(
                "  {} {} {message}",
                paint(timestamp, Style::new().dimmed()),
                paint(label, Style::new().cyan())
            );
        },
    );
}

pub fn positive(value: impl Display) -> String {
    tint(value, Style::new().green())
}

pub fn negative(value: impl Display) -> String {
    tint(value, Style::new().red())
}

pub fn highlight(value: impl Display) -> String {
    tint(value, Style::new().cyan())
}

pub fn muted(value: impl Display) -> String {
    tint(value, Style::new().dimmed())
}

pub fn note(message: &str) {
    emit("note", json!({ "message": message }), false, || {
        println!("  {}", paint(message, Style::new().dimmed()));
    });
}

pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), false, || {
        println!(
            "  {}: {}",
            paint("hint", Style::new().cyan().dimmed()),
            paint(message, Style::new().dimmed())
        );
    });
}

/// Indented block of text, e.g. a rendered table.
pub fn lines(content: &str) {
    emit("lines", json!({ "content": content }), false, || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// A whole JSON document for commands with their own `--json` shape.
pub fn json_output(value: Value) {
    println!("{value}");
}
