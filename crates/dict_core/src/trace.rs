//! Injectable trace sink for the debug side channel.
//!
//! The registry emits one human-readable line per operation call and per
//! outcome when debug tracing is enabled. The sink is a capability the
//! embedder injects; it carries no semantic weight and must never influence
//! what an operation returns.

use std::sync::Mutex;

use crate::DictId;

pub trait TraceSink {
    fn line(&self, line: &str);
}

/// Default sink: one line per call on standard error.
pub struct StderrTrace;

impl TraceSink for StderrTrace {
    fn line(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Sink that drops everything.
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn line(&self, _line: &str) {}
}

/// Sink that collects lines in memory, for tests and embedders that want to
/// inspect the trace. Mutex-backed so the registry stays `Send`.
#[derive(Default)]
pub struct BufferTrace {
    lines: Mutex<Vec<String>>,
}

impl BufferTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl TraceSink for BufferTrace {
    fn line(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

// Lets an embedder keep a handle to a sink it has injected.
impl<T: TraceSink + ?Sized> TraceSink for std::sync::Arc<T> {
    fn line(&self, line: &str) {
        (**self).line(line);
    }
}

/// Quotes a text argument for a trace line, or renders `NULL` for an absent
/// one.
pub fn quoted(arg: Option<&str>) -> String {
    match arg {
        Some(s) => format!("\"{s}\""),
        None => "NULL".to_string(),
    }
}

/// Human-readable name of a dictionary for trace lines.
pub fn dict_label(id: DictId) -> String {
    if id.is_global() {
        "the Global Dictionary".to_string()
    } else {
        format!("dict {id}")
    }
}
