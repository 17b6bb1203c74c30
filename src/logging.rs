//! Logging configuration for the browser
//!
//! Sets up a tracing registry whose fmt layer writes each formatted event to
//! the browser console, using the console method matching the event level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Default level is INFO, with DEBUG for the catalog crates
const DEFAULT_FILTER: &str = "info,catalog_core=debug,catalog_frontend=debug";

/// Buffers one formatted event and hands it to the console on drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let message = JsValue::from_str(line);
        match self.level {
            Level::ERROR => console::error_1(&message),
            Level::WARN => console::warn_1(&message),
            Level::INFO => console::info_1(&message),
            Level::DEBUG => console::debug_1(&message),
            _ => console::log_1(&message),
        }
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Initialize logging to the browser console.
///
/// No timestamps (the console adds its own) and no ANSI colors.
pub fn init_logging() {
    let console_layer = fmt::layer()
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(true);

    let result = tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_FILTER))
        .with(console_layer)
        .try_init();

    if let Err(e) = result {
        console::warn_1(&format!("Logging already initialized: {}", e).into());
    }
}
