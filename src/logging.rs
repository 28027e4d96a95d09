//! Browser console sink for the rolling logger

use log::{Level, LevelFilter};
use rolling_logger::LogSink;

pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: Level, line: &str) {
        let line = wasm_bindgen::JsValue::from_str(line);
        match level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

pub fn init(capacity: usize) {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = rolling_logger::init_logger("CourseAdmin", level, capacity, Box::new(ConsoleSink)) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
}
