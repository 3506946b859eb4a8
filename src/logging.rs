use std::cmp::Ordering;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::atomic::{AtomicU8, Ordering as AtomicOrdering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
static MIN_LEVEL: AtomicU8 = AtomicU8::new(1);

/// Sets the process-wide threshold. Only the preview server calls this; the
/// browser build keeps its compile-time default.
#[cfg(not(target_arch = "wasm32"))]
pub fn set_min_level(level: LogLevel) {
    let rank = match level {
        LogLevel::Debug => 0,
        LogLevel::Info => 1,
    };
    MIN_LEVEL.store(rank, AtomicOrdering::Relaxed);
}

#[cfg(not(target_arch = "wasm32"))]
fn min_level() -> LogLevel {
    match MIN_LEVEL.load(AtomicOrdering::Relaxed) {
        0 => LogLevel::Debug,
        _ => LogLevel::Info,
    }
}

#[cfg(target_arch = "wasm32")]
fn min_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

pub fn format_event(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < min_level() {
        return;
    }

    let line = format_event(level, event, fields).to_string();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&line));

    #[cfg(not(target_arch = "wasm32"))]
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn debug_ranks_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn event_fields_are_flattened_next_to_the_envelope() {
        let line = format_event(LogLevel::Info, "consent.saved", json!({ "analytics": true }));

        assert_eq!(line["level"], "info");
        assert_eq!(line["event"], "consent.saved");
        assert_eq!(line["analytics"], true);
        assert!(line["ts"].is_u64());
    }
}
