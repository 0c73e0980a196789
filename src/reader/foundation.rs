//! Dialect-neutral trace reader.
//!
//! Drives the pipeline: read a line, classify it, feed comments to the
//! dialect's metadata scanner, index trace lines, filter them by range and
//! hand the survivors to the dialect's job builder and then the factory.
//!
//! Reading is lazy. Each pass borrows the reader through a `Jobs`
//! iterator; the file handle lives as long as the reader and is released
//! when it is closed or dropped.

use super::dialect::{Dialect, RawRecord};
use super::factory::JobFactory;
use super::filter::{Decision, RangeSpec, RecordFilter};
use crate::parser::line::LineKind;
use crate::parser::metadata::TraceMetadata;
use crate::utils::error::ReaderError;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Lifecycle of a reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Opened, nothing read yet
    Fresh,
    /// A pass is in progress
    Scanning,
    /// The `[from, to]` window is complete; reading further may resume
    Paused,
    /// End of file (or an unrecoverable I/O error) ended the pass
    Done,
}

/// Lazy trace reader over one file
pub struct TraceReader<D: Dialect, F: JobFactory> {
    path: PathBuf,
    source: BufReader<File>,
    dialect: D,
    factory: F,
    filter: RecordFilter,
    metadata: TraceMetadata,
    rng: StdRng,
    state: ReaderState,
    deferred: Option<ReaderError>,
}

impl<D: Dialect, F: JobFactory> TraceReader<D, F> {
    /// Open a trace file for reading
    ///
    /// **Public** - main entry point of the reader
    ///
    /// # Arguments
    /// * `path` - Trace file to read
    /// * `range` - TraceIndex window and read-further policy
    /// * `dialect` - Format of the trace
    /// * `factory` - Receives one `JobSpec` per accepted record
    ///
    /// # Errors
    /// * `ReaderError::InvalidRange` - `to < from`, checked before any I/O
    /// * `ReaderError::Open` - the file cannot be opened
    pub fn open(
        path: impl AsRef<Path>,
        range: RangeSpec,
        dialect: D,
        factory: F,
    ) -> Result<Self, ReaderError> {
        range.validate()?;
        let path = path.as_ref().to_path_buf();

        let file = File::open(&path).map_err(|source| ReaderError::Open {
            path: path.clone(),
            source,
        })?;

        info!(
            "Opened {} trace {} (records {}..={}, reading further: {})",
            dialect.label(),
            path.display(),
            range.from,
            range.to,
            range.allow_reading_further
        );

        Ok(Self {
            path,
            source: BufReader::new(file),
            dialect,
            factory,
            filter: RecordFilter::new(range),
            metadata: TraceMetadata::new(),
            rng: StdRng::from_os_rng(),
            state: ReaderState::Fresh,
            deferred: None,
        })
    }

    /// Seed the PRNG used by the dialect, for reproducible job sequences
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Jobs of the `[from, to]` window
    ///
    /// **Public** - every call starts a new pass from the top of the file
    /// and clears previously collected metadata.
    pub fn produce_jobs(&mut self) -> Jobs<'_, D, F> {
        self.filter.reset();
        self.metadata = TraceMetadata::new();
        self.deferred = None;

        if self.state != ReaderState::Fresh {
            if let Err(source) = self.source.seek(SeekFrom::Start(0)) {
                self.deferred = Some(ReaderError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        }

        debug!("Starting pass over {}", self.path.display());
        self.state = ReaderState::Scanning;
        Jobs {
            reader: self,
            active: true,
        }
    }

    /// Jobs after the `to` bound, up to end of file
    ///
    /// **Public** - yields nothing unless reading further was allowed at
    /// construction. On a reader that was never enumerated the window is
    /// skipped without building jobs.
    pub fn read_further(&mut self) -> Jobs<'_, D, F> {
        let active = match self.state {
            ReaderState::Done => false,
            _ => self.filter.continue_past_window(),
        };

        if active {
            debug!(
                "Reading past record {} of {}",
                self.filter.range().to,
                self.path.display()
            );
            self.state = ReaderState::Scanning;
        } else {
            debug!("Reading further not available for {}", self.path.display());
        }

        Jobs {
            reader: self,
            active,
        }
    }

    /// Eagerly collect the `[from, to]` window, stopping at the first error
    pub fn collect_jobs(&mut self) -> Result<Vec<F::Job>, ReaderError> {
        self.produce_jobs().collect()
    }

    /// Processor count announced in the comments read so far
    pub fn max_proc_count(&self) -> Option<i64> {
        self.metadata.max_proc_count
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// TraceIndex the next trace line will get
    pub fn trace_index(&self) -> u64 {
        self.filter.index()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn range(&self) -> &RangeSpec {
        self.filter.range()
    }

    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Release the file handle
    pub fn close(self) {
        debug!(
            "Closing {} after {} trace lines",
            self.path.display(),
            self.filter.index()
        );
    }

    /// Advance to the next produced job of the current pass
    ///
    /// **Private** - the body of `Jobs::next`
    fn next_job(&mut self) -> Option<Result<F::Job, ReaderError>> {
        loop {
            if let Some(err) = self.deferred.take() {
                self.state = ReaderState::Done;
                return Some(Err(err));
            }

            if self.state != ReaderState::Scanning {
                return None;
            }

            if self.filter.window_exhausted() {
                debug!("Window satisfied at trace line {}", self.filter.index());
                self.state = ReaderState::Paused;
                return None;
            }

            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!(
                        "Reached end of {} after {} trace lines",
                        self.path.display(),
                        self.filter.index()
                    );
                    self.state = ReaderState::Done;
                    return None;
                }
                Err(err) => {
                    self.state = ReaderState::Done;
                    return Some(Err(err));
                }
            };

            match self.dialect.classify(&line) {
                LineKind::Blank => continue,
                LineKind::Comment => {
                    self.dialect.scan_metadata(&line, &mut self.metadata);
                    continue;
                }
                LineKind::Trace => {}
            }

            let index = self.filter.index();
            let decision = self.filter.decide();
            self.filter.advance();

            if decision != Decision::Offer {
                continue;
            }

            let record = RawRecord { index, line };
            match self.dialect.build_job(&record, &mut self.rng) {
                Ok(Some(spec)) => {
                    return Some(self.factory.create(spec).map_err(|source| {
                        ReaderError::Factory {
                            path: self.path.clone(),
                            index,
                            source,
                        }
                    }));
                }
                Ok(None) => {
                    debug!("Trace line {} rejected", index);
                }
                Err(source) => {
                    return Some(Err(ReaderError::Record {
                        path: self.path.clone(),
                        index,
                        source,
                    }));
                }
            }
        }
    }

    /// Read one line, tolerating invalid UTF-8
    ///
    /// **Private** - `Ok(None)` at end of file
    fn read_line(&mut self) -> Result<Option<String>, ReaderError> {
        let mut buf = Vec::new();
        let read = self
            .source
            .read_until(b'\n', &mut buf)
            .map_err(|source| ReaderError::Io {
                path: self.path.clone(),
                source,
            })?;

        if read == 0 {
            return Ok(None);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Lazy sequence of jobs for one pass of a `TraceReader`
///
/// Yields `Err` for records that fail to parse or build; the TraceIndex
/// has already moved past them, so iteration may go on.
pub struct Jobs<'a, D: Dialect, F: JobFactory> {
    reader: &'a mut TraceReader<D, F>,
    active: bool,
}

impl<D: Dialect, F: JobFactory> Jobs<'_, D, F> {
    /// Processor count seen so far in this pass
    pub fn max_proc_count(&self) -> Option<i64> {
        self.reader.max_proc_count()
    }
}

impl<D: Dialect, F: JobFactory> Iterator for Jobs<'_, D, F> {
    type Item = Result<F::Job, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.active {
            return None;
        }
        let next = self.reader.next_job();
        if next.is_none() {
            self.active = false;
        }
        next
    }
}
