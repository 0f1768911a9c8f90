use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// One accepted log row. Columns past the user agent are not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub path: String,
    pub timestamp_raw: String,
    pub user_agent: String,
}

impl RawRecord {
    pub fn new(
        path: impl Into<String>,
        timestamp_raw: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            timestamp_raw: timestamp_raw.into(),
            user_agent: user_agent.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<RawRecord>,
    pub rows_rejected: u64,
}

impl LoadedRecords {
    pub fn total_hits(&self) -> u64 {
        self.records.len() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start { after_delimiter: bool },
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Drops spaces that directly follow an unquoted delimiter, so `, "a,b"`
/// still opens a quoted field when the csv tokenizer sees it.
struct SkipInitialSpace<R> {
    inner: R,
    state: FieldState,
}

impl<R: Read> SkipInitialSpace<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            state: FieldState::Start {
                after_delimiter: false,
            },
        }
    }

    fn next_state(&self, byte: u8) -> FieldState {
        let field_end = |byte: u8| match byte {
            b',' => Some(FieldState::Start {
                after_delimiter: true,
            }),
            b'\n' | b'\r' => Some(FieldState::Start {
                after_delimiter: false,
            }),
            _ => None,
        };

        match self.state {
            FieldState::Start { .. } if byte == b'"' => FieldState::Quoted,
            FieldState::Start { .. } | FieldState::Unquoted => {
                field_end(byte).unwrap_or(FieldState::Unquoted)
            }
            FieldState::Quoted if byte == b'"' => FieldState::QuoteInQuoted,
            FieldState::Quoted => FieldState::Quoted,
            // doubled quote is an escaped quote
            FieldState::QuoteInQuoted if byte == b'"' => FieldState::Quoted,
            FieldState::QuoteInQuoted => field_end(byte).unwrap_or(FieldState::Unquoted),
        }
    }
}

impl<R: Read> Read for SkipInitialSpace<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let read = self.inner.read(buf)?;
            if read == 0 {
                return Ok(0);
            }

            let mut kept = 0;
            for i in 0..read {
                let byte = buf[i];
                let skip = matches!(
                    self.state,
                    FieldState::Start {
                        after_delimiter: true
                    }
                );
                if skip && byte == b' ' {
                    continue;
                }
                self.state = self.next_state(byte);
                buf[kept] = byte;
                kept += 1;
            }

            // a chunk made only of skipped spaces is not end of input
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}

/// Reads headerless CSV rows, dropping any that are short or undecodable.
///
/// Spaces after a delimiter are skipped before tokenizing, so quoted fields
/// may follow `", "`. Remaining surrounding whitespace is trimmed per field.
pub fn read_records<R: Read>(source: R, min_columns: usize) -> LoadedRecords {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(SkipInitialSpace::new(source));

    let mut loaded = LoadedRecords::default();

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!(action = "reject", component = "record_loader", error = %e, "Undecodable row");
                loaded.rows_rejected += 1;
                continue;
            }
        };

        // the user agent column must exist whatever the threshold
        if row.len() < min_columns.max(3) {
            debug!(
                action = "reject",
                component = "record_loader",
                line = row.position().map(|p| p.line()),
                columns = row.len(),
                "Row has too few columns"
            );
            loaded.rows_rejected += 1;
            continue;
        }

        loaded
            .records
            .push(RawRecord::new(&row[0], &row[1], &row[2]));
    }

    loaded
}

pub fn load_records(path: &Path, min_columns: usize) -> Result<LoadedRecords> {
    let start_time = Instant::now();
    info!(action = "start", component = "record_loader", file_path = ?path, "Loading log records");

    let file = File::open(path).with_context(|| format!("Failed to open log file {:?}", path))?;
    let loaded = read_records(file, min_columns);

    info!(
        action = "complete",
        component = "record_loader",
        accepted = loaded.records.len(),
        rejected = loaded.rows_rejected,
        duration_ms = start_time.elapsed().as_millis(),
        "Loaded log records"
    );
    Ok(loaded)
}
