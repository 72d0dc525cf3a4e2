//! Console Logger
//!
//! `log` backend for the browser: records go to `console.*` on wasm32 and
//! to stderr everywhere else.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(self.app_name, record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the logger. Fails if another logger is already set.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger { app_name, level }));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Debug builds log everything, release builds info and above
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_line(app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {}: {}", app_name, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("ShopExplorer", Level::Warn, "shop_core::store", "quota exceeded");
        assert_eq!(line, "[ShopExplorer] WARN  shop_core::store: quota exceeded");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger { app_name: "Test", level: LevelFilter::Info };
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }
}
