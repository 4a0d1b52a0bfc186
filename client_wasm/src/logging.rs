//! Route `log` records to the browser console

use log::{Level, LevelFilter, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Install the console logger. Only the first call wins.
pub fn init(level: LevelFilter) {
    let result = fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(fern::Output::call(write_to_console))
        .apply();

    if result.is_err() {
        log::debug!("Console logger already installed");
    }
}

fn write_to_console(record: &Record) {
    let line = JsValue::from_str(&record.args().to_string());
    match record.level() {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug => console::debug_1(&line),
        Level::Trace => console::log_1(&line),
    }
}
