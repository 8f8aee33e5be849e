//! Append-only JSONL session log for debugging.
//!
//! Written to `~/.local/share/signal-decode/session.jsonl` when
//! `[runtime] session_log = true`. Each run starts with a header line followed
//! by one line per handled action. Tailable via `tail -f`.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use decode_types::{GameAction, GameState, Phase};

/// Log directory: `~/.local/share/signal-decode/`
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("signal-decode")
}

pub fn default_log_path() -> PathBuf {
    log_dir().join("session.jsonl")
}

pub struct SessionLog {
    writer: BufWriter<File>,
}

#[derive(Serialize)]
struct SessionHeader {
    event: &'static str,
    epoch_ms: u128,
    pid: u32,
}

#[derive(Serialize)]
struct LogEntry<'a> {
    t_ms: u128,
    action: &'a GameAction,
    phase: Phase,
    round: u8,
    pattern_len: usize,
    input_len: usize,
}

/// One action line read back from a log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionEntry {
    pub t_ms: u128,
    pub action: GameAction,
    pub phase: Phase,
    pub round: u8,
    pub pattern_len: usize,
    pub input_len: usize,
}

#[derive(Deserialize)]
struct RawLine {
    #[serde(default)]
    event: Option<String>,
}

impl SessionLog {
    /// Open the default session log, creating its directory.
    pub fn open_default() -> Option<Self> {
        let dir = log_dir();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            log::warn!(target: "session_log", "cannot create {}: {}", dir.display(), e);
            return None;
        }
        match Self::open(&dir.join("session.jsonl")) {
            Ok(log) => Some(log),
            Err(e) => {
                log::warn!(target: "session_log", "cannot open session log: {}", e);
                None
            }
        }
    }

    /// Open (append) the log at `path` and write a session header.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut log = Self {
            writer: BufWriter::new(file),
        };

        let header = SessionHeader {
            event: "session_start",
            epoch_ms: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            pid: std::process::id(),
        };
        log.write_line(&header);
        Ok(log)
    }

    /// Record a handled action and the state it produced.
    pub fn record(&mut self, at: Duration, action: &GameAction, state: &GameState) {
        let entry = LogEntry {
            t_ms: at.as_millis(),
            action,
            phase: state.phase,
            round: state.round,
            pattern_len: state.pattern.len(),
            input_len: state.user_input.len(),
        };
        self.write_line(&entry);
    }

    fn write_line<T: Serialize>(&mut self, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            let _ = writeln!(self.writer, "{}", json);
            let _ = self.writer.flush();
        }
    }
}

/// Read every action entry from a log, skipping session headers.
pub fn read_entries(path: &Path) -> Result<Vec<SessionEntry>, String> {
    let file = File::open(path).map_err(|e| format!("open {}: {}", path.display(), e))?;
    let reader = BufReader::new(file);
    let mut entries = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("read line {}: {}", line_no + 1, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let raw: RawLine = serde_json::from_str(&line)
            .map_err(|e| format!("line {}: {}", line_no + 1, e))?;
        if raw.event.is_some() {
            continue;
        }
        let entry: SessionEntry = serde_json::from_str(&line)
            .map_err(|e| format!("line {}: {}", line_no + 1, e))?;
        entries.push(entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use decode_types::PadId;

    #[test]
    fn records_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");

        {
            let mut log = SessionLog::open(&path).unwrap();
            let mut state = GameState {
                phase: Phase::Ready,
                round: 1,
                pattern: vec![PadId::new(0).unwrap(); 3],
                ..Default::default()
            };
            log.record(Duration::from_millis(5), &GameAction::StartGame, &state);
            state.phase = Phase::Fail;
            state.user_input.push(PadId::new(1).unwrap());
            log.record(
                Duration::from_millis(2500),
                &GameAction::SubmitInput(PadId::new(1).unwrap()),
                &state,
            );
        }

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, GameAction::StartGame);
        assert_eq!(entries[0].pattern_len, 3);
        assert_eq!(entries[1].t_ms, 2500);
        assert_eq!(entries[1].phase, Phase::Fail);
        assert_eq!(entries[1].input_len, 1);
    }

    #[test]
    fn reopening_appends_new_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        for _ in 0..2 {
            let mut log = SessionLog::open(&path).unwrap();
            log.record(Duration::ZERO, &GameAction::Reset, &GameState::default());
        }
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("session_start").count(), 2);
        assert_eq!(read_entries(&path).unwrap().len(), 2);
    }

    #[test]
    fn garbage_line_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.jsonl");
        std::fs::write(&path, "{not json}\n").unwrap();
        let err = read_entries(&path).unwrap_err();
        assert!(err.starts_with("line 1"));
    }
}
