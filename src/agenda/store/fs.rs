use super::{ContactStore, LoadOutcome};
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// File-backed contact store.
///
/// The backing file holds one `<number>,<name>` entry per non-blank line.
/// Names may contain commas; only the first comma on a line separates the
/// fields.
pub struct FileStore {
    path: PathBuf,
    contacts: BTreeMap<String, String>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contacts: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Split a backing line into (number, name) on the first comma.
/// Lines without a comma carry no entry.
fn parse_line(line: &str) -> Option<(String, String)> {
    let (number, name) = line.split_once(',')?;
    Some((number.trim().to_string(), name.trim().to_string()))
}

fn format_line(number: &str, name: &str) -> String {
    format!("{},{}\n", number, name)
}

impl ContactStore for FileStore {
    fn get(&self, number: &str) -> Option<&str> {
        self.contacts.get(number).map(String::as_str)
    }

    fn insert(&mut self, number: String, name: String) -> Option<String> {
        self.contacts.insert(number, name)
    }

    fn remove(&mut self, number: &str) -> Option<String> {
        self.contacts.remove(number)
    }

    fn contacts(&self) -> &BTreeMap<String, String> {
        &self.contacts
    }

    fn load(&mut self) -> Result<LoadOutcome> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadOutcome::FileMissing),
            Err(e) => return Err(e.into()),
        };

        // Entries are inserted as lines are read, so everything parsed
        // before a read fault stays in the map.
        let mut count = 0;
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some((number, name)) = parse_line(&line) {
                self.contacts.insert(number, name);
                count += 1;
            }
        }

        Ok(LoadOutcome::Loaded { count })
    }

    fn save(&mut self) -> Result<()> {
        let mut out = String::new();
        for (number, name) in &self.contacts {
            out.push_str(&format_line(number, name));
        }
        std::fs::write(&self.path, out)?;
        Ok(())
    }
}
