//! Task persistence.
//!
//! Flat text file, one `title|flag` line per task, UTF-16LE with an
//! optional BOM and CRLF terminators. The format predates this program;
//! keep it readable by the devices that already carry a `tasks.txt`.

use std::path::Path;

use tracing::{debug, warn};

use crate::task::Task;
use crate::{Error, Result};

const SEPARATOR: char = '|';
const BOM: char = '\u{feff}';

/// Seed tasks used when no readable file exists
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new("Eat Tofu"),
        Task::new("Stay Mental"),
        Task::new("Build PW-SH2 Apps"),
    ]
}

/// Load tasks from `path`.
///
/// A missing or undecodable file is not an error: it yields the default
/// seed tasks. An existing empty file yields an empty list. Lines without
/// a separator are skipped.
pub fn load_tasks(path: &Path) -> Vec<Task> {
    match read_tasks(path) {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!("could not read {}: {e}; seeding defaults", path.display());
            default_tasks()
        }
    }
}

/// Read and parse the task file, propagating failures
pub fn read_tasks(path: &Path) -> Result<Vec<Task>> {
    let bytes = std::fs::read(path)?;
    let content = decode_utf16le(&bytes)?;

    let mut tasks = Vec::new();
    for line in content.lines() {
        let line = line.strip_prefix(BOM).unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        // Last separator wins so titles may contain '|'
        match line.rsplit_once(SEPARATOR) {
            Some((title, flag)) => tasks.push(Task {
                title: title.to_string(),
                done: flag.starts_with('1'),
            }),
            None => debug!("skipping malformed line: {line:?}"),
        }
    }
    Ok(tasks)
}

/// Save tasks to `path`, creating parent directories as needed
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut text = String::from(BOM);
    for task in tasks {
        text.push_str(&task.title);
        text.push(SEPARATOR);
        text.push(if task.done { '1' } else { '0' });
        text.push_str("\r\n");
    }

    let mut bytes = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

fn decode_utf16le(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::Storage("odd byte length, not UTF-16".into()));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| Error::Storage(e.to_string()))
}
