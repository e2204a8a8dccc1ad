//! Quiz transcript as JSON Lines.
//!
//! One line per [`QuizEvent`]: the payload fields at the top level, plus
//! `type` and an RFC 3339 `timestamp`.

use bender_application::{QuizEvent, QuizLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Transcript writer backed by an append-only file.
///
/// Earlier sessions in the same file are kept. Lines reach the file as
/// soon as they are complete.
pub struct JsonlQuizLogger {
    file: Mutex<LineWriter<File>>,
    path: PathBuf,
}

impl JsonlQuizLogger {
    /// Open `path` for appending, creating it and its directory if needed.
    ///
    /// A transcript is optional, so failure is a warning and `None`.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(dir)
        {
            warn!(dir = %dir.display(), error = %e, "Transcript directory unavailable");
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Self {
                file: Mutex::new(LineWriter::new(file)),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Transcript file unavailable");
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Flatten an event into the object written on its line.
///
/// `type` and `timestamp` win over payload keys of the same name. A
/// payload that is not an object goes under `data`.
fn record(event: QuizEvent, timestamp: String) -> Value {
    let mut fields = match event.payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    fields.insert("type".to_string(), Value::from(event.event_type));
    fields.insert("timestamp".to_string(), Value::from(timestamp));
    Value::Object(fields)
}

impl QuizLogger for JsonlQuizLogger {
    fn log(&self, event: QuizEvent) {
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let line = match serde_json::to_string(&record(event, now)) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Transcript event not serializable");
                return;
            }
        };

        let Ok(mut file) = self.file.lock() else {
            return;
        };
        if let Err(e) = writeln!(file, "{}", line) {
            warn!(path = %self.path.display(), error = %e, "Transcript write failed");
        }
    }
}
