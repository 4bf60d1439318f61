#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::{NamedTempFile, TempDir};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// The three reference session lists with their expected machine counts.
pub const SCENARIOS: [(&[&str], usize); 3] = [
    (
        &["900 910", "940 1200", "950 1120", "1100 1130", "1300 1400", "1350 1420"],
        3,
    ),
    (
        &[
            "800 900", "830 1000", "845 920", "900 1000", "1100 1130", "1200 1300", "1245 1330",
            "1230 1400",
        ],
        4,
    ),
    (
        &[
            "1145 1230", "1200 1230", "700 800", "1500 1600", "730 845", "1530 1600", "1900 2000",
            "1900 2000", "1700 1800", "2000 2200", "2030 2100", "500 600",
        ],
        2,
    ),
];

/// Runs `f` with `ARCADE_*` style variables temporarily modified.
///
/// Access is serialized because the process environment is shared by every
/// test thread. `None` removes the variable for the duration of `f`.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Write one record per line into a fresh temp file.
pub fn session_file(records: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for record in records {
        writeln!(file, "{}", record).unwrap();
    }
    file.flush().unwrap();
    file
}

/// A scratch directory plus a not-yet-existing output path inside it.
pub fn output_target() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("machines.txt");
    (dir, path)
}
