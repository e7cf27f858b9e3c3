use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use tracing::warn;

use crate::trace::trace::FillTraceEvent;

/// JSONL sink for fill trace events. A logger whose file could not be
/// opened stays disabled; write failures are reported and dropped.
pub struct TraceLogger {
    sink: Option<Mutex<File>>,
}

impl TraceLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let sink = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .inspect_err(|e| warn!(path = %path.display(), error = %e, "trace file unavailable, tracing off"))
            .ok()
            .map(Mutex::new);

        Self { sink }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, event: &FillTraceEvent) {
        let Some(sink) = &self.sink else {
            return;
        };

        if let Err(e) = append_line(sink, event) {
            warn!(step = event.step, field = %event.field, error = %e, "dropped trace event");
        }
    }
}

fn append_line(sink: &Mutex<File>, event: &FillTraceEvent) -> io::Result<()> {
    let line = serde_json::to_string(event)?;
    let mut file = sink
        .lock()
        .map_err(|_| io::Error::other("trace file lock poisoned"))?;
    writeln!(file, "{line}")
}
