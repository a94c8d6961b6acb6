//! Console Logger
//!
//! A `log` backend for WASM frontends. Records are formatted as
//! `[LEVEL target] message` and routed to the matching `console.*` method.
//! Off-browser (host tests) the same line goes to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Logger writing to the browser console
pub struct ConsoleLogger;

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Format a record into a single console line
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{} {}] {}", level, short_target(target), message)
}

/// Strip the crate prefix from a module path (`gutendex_ui::api` -> `api`)
fn short_target(target: &str) -> &str {
    match target.split_once("::") {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => target,
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let stamp = String::from(js_sys::Date::new_0().to_iso_string());
    let value = JsValue::from_str(&format!("{} {}", stamp, line));
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug => console::debug_1(&value),
        Level::Trace => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}
