//! Bridges the `log` facade to the browser console.
//!
//! Native builds never install the logger, so `log::*` calls are no-ops there.

use log::{Level, Log, Metadata, Record};

struct ConsoleLogger {
    level: Level,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        let msg = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls are ignored.
pub fn install(level: Level) {
    let logger = Box::new(ConsoleLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}
