//! Structured JSON-line events routed through the `log` facade.
//!
//! The host installs the logger; this crate only formats the line.

use log::Level;
use serde_json::json;

/// Render the documented event schema as a single JSON line.
pub fn event_line(level: Level, module: &str, event: &str, code: u32, dur_ms: u128) -> String {
    json!({
        "ts": crate::common::time::now_ms() as u64,
        "level": level.as_str().to_ascii_lowercase(),
        "mod": module,
        "ev": event,
        "code": code,
        "dur_ms": dur_ms as u64,
    })
    .to_string()
}

/// Emit an event with `module` as the log target.
pub fn log_event(level: Level, module: &str, event: &str, code: u32, dur_ms: u128) {
    if log::log_enabled!(target: module, level) {
        log::log!(target: module, level, "{}", event_line(level, module, event, code, dur_ms));
    }
}
