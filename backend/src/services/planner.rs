//! File based planning run: read records, count, write the answer.
//!
//! Every step logs its progress so a run can be followed with `RUST_LOG=debug`.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::{ArcadeError, Result};
use crate::models::Interval;
use crate::parsing::{parse_records, InvertedPolicy};
use crate::services::concurrency::{count_with_strategy, CountStrategy};

/// Resolved knobs for a planning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOptions {
    pub strategy: CountStrategy,
    pub inverted: InvertedPolicy,
    /// Replace an existing output file instead of failing.
    pub overwrite: bool,
}

/// Outcome of a successful planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanReport {
    /// Number of sessions read from the input.
    pub sessions: usize,
    /// Machines required, as written to the output.
    pub machines: usize,
}

/// Read and parse every interval record in `path`.
pub fn read_intervals(path: &Path, policy: InvertedPolicy) -> Result<Vec<Interval>> {
    let file = File::open(path).map_err(|source| ArcadeError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_records(BufReader::new(file), policy).map_err(|source| ArcadeError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `count` followed by a newline to `path`.
///
/// Without `overwrite` the file must not exist yet; creation is atomic so a
/// concurrently created file is not clobbered either.
pub fn write_count(path: &Path, count: usize, overwrite: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let file = options.open(path).map_err(|source| {
        if source.kind() == ErrorKind::AlreadyExists {
            ArcadeError::OutputExists {
                path: path.to_path_buf(),
            }
        } else {
            ArcadeError::OutputWrite {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", count)
        .and_then(|_| writer.flush())
        .map_err(|source| ArcadeError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Run a full plan from `input` to `output`.
///
/// # Arguments
/// * `input` - File with one `begin end` record per line
/// * `output` - Destination for the machine count
/// * `options` - Counting strategy, inverted policy and overwrite flag
///
/// # Returns
/// * `Ok(PlanReport)` once the count has been written
/// * `Err(ArcadeError)` on the first parse or I/O failure; nothing is
///   written to `output` in that case
pub fn plan(input: &Path, output: &Path, options: &PlanOptions) -> Result<PlanReport> {
    // Fail before reading anything when the answer could not be written anyway
    if !options.overwrite && output.exists() {
        return Err(ArcadeError::OutputExists {
            path: output.to_path_buf(),
        });
    }

    log::info!("Reading play sessions from {}", input.display());
    let intervals = read_intervals(input, options.inverted)?;
    log::info!("Loaded {} play sessions", intervals.len());

    let machines = count_with_strategy(&intervals, options.strategy);
    log::debug!(
        "Counted {} machines using the {} strategy",
        machines,
        options.strategy
    );

    write_count(output, machines, options.overwrite)?;
    log::info!("Wrote machine count to {}", output.display());

    Ok(PlanReport {
        sessions: intervals.len(),
        machines,
    })
}
