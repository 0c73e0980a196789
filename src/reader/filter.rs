//! Index-window filtering of trace records.
//!
//! Records are addressed by TraceIndex, the 0-based ordinal of a trace
//! line. The first pass yields `[from, to]`; a continuation pass yields
//! everything after `to` when reading further was allowed.

use crate::utils::error::ReaderError;

/// Inclusive TraceIndex window plus the read-further policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub from: u64,
    pub to: u64,
    pub allow_reading_further: bool,
}

impl RangeSpec {
    /// Build a range, rejecting `to < from`
    ///
    /// # Errors
    /// * `ReaderError::InvalidRange` - the window is inverted
    pub fn new(from: u64, to: u64, allow_reading_further: bool) -> Result<Self, ReaderError> {
        let range = Self {
            from,
            to,
            allow_reading_further,
        };
        range.validate()?;
        Ok(range)
    }

    /// Window covering the whole file
    pub fn everything() -> Self {
        Self {
            from: 0,
            to: u64::MAX,
            allow_reading_further: false,
        }
    }

    pub fn validate(&self) -> Result<(), ReaderError> {
        if self.to < self.from {
            return Err(ReaderError::InvalidRange {
                from: self.from,
                to: self.to,
            });
        }
        Ok(())
    }

    pub fn contains(&self, index: u64) -> bool {
        self.from <= index && index <= self.to
    }
}

/// What to do with the next trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Consume without building a job
    Skip,
    /// Hand to the job builder
    Offer,
    /// Stop before reading further
    Halt,
}

/// TraceIndex bookkeeping for one pass over a file
#[derive(Debug, Clone)]
pub struct RecordFilter {
    range: RangeSpec,
    index: u64,
    continuation: bool,
    past_window_only: bool,
}

impl RecordFilter {
    pub fn new(range: RangeSpec) -> Self {
        Self {
            range,
            index: 0,
            continuation: false,
            past_window_only: false,
        }
    }

    pub fn range(&self) -> &RangeSpec {
        &self.range
    }

    /// TraceIndex the next trace line will get
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn is_continuation(&self) -> bool {
        self.continuation
    }

    /// Start over from the first line of the file
    pub fn reset(&mut self) {
        self.index = 0;
        self.continuation = false;
        self.past_window_only = false;
    }

    /// Switch to the read-further pass
    ///
    /// Returns false (and changes nothing) when reading further was not
    /// allowed at construction. Window records not yet consumed are
    /// skipped, so the pass resumes at `to + 1`.
    pub fn continue_past_window(&mut self) -> bool {
        if !self.range.allow_reading_further {
            return false;
        }
        self.continuation = true;
        self.past_window_only = true;
        true
    }

    /// Decide on the trace line carrying the current index
    ///
    /// Does not advance; call `advance` once the line has been consumed.
    pub fn decide(&self) -> Decision {
        let index = self.index;
        if index < self.range.from {
            Decision::Skip
        } else if index <= self.range.to {
            if self.past_window_only {
                Decision::Skip
            } else {
                Decision::Offer
            }
        } else if self.continuation {
            Decision::Offer
        } else {
            Decision::Halt
        }
    }

    /// Whether enumeration must stop before reading another line
    pub fn window_exhausted(&self) -> bool {
        self.decide() == Decision::Halt
    }

    pub fn advance(&mut self) {
        self.index = self.index.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(filter: &mut RecordFilter, lines: u64) -> Vec<u64> {
        let mut offered = Vec::new();
        for _ in 0..lines {
            match filter.decide() {
                Decision::Halt => break,
                Decision::Offer => offered.push(filter.index()),
                Decision::Skip => {}
            }
            filter.advance();
        }
        offered
    }

    #[test]
    fn test_invalid_range() {
        assert!(matches!(
            RangeSpec::new(3, 2, false),
            Err(ReaderError::InvalidRange { from: 3, to: 2 })
        ));
        assert!(RangeSpec::new(2, 2, false).is_ok());
    }

    #[test]
    fn test_window() {
        let mut filter = RecordFilter::new(RangeSpec::new(1, 3, false).unwrap());
        assert_eq!(walk(&mut filter, 5), vec![1, 2, 3]);
        assert!(filter.window_exhausted());
        assert!(filter.range().contains(3) && !filter.range().contains(4));
        assert!(!filter.continue_past_window());
        assert_eq!(walk(&mut filter, 5), Vec::<u64>::new());
    }

    #[test]
    fn test_continuation() {
        let mut filter = RecordFilter::new(RangeSpec::new(1, 3, true).unwrap());
        assert_eq!(walk(&mut filter, 5), vec![1, 2, 3]);
        assert!(filter.continue_past_window());
        assert_eq!(walk(&mut filter, 2), vec![4, 5]);
    }

    #[test]
    fn test_continuation_without_first_pass() {
        let mut filter = RecordFilter::new(RangeSpec::new(1, 2, true).unwrap());
        assert!(filter.continue_past_window());
        assert_eq!(walk(&mut filter, 6), vec![3, 4, 5]);
    }

    #[test]
    fn test_reset() {
        let mut filter = RecordFilter::new(RangeSpec::new(0, 0, true).unwrap());
        walk(&mut filter, 3);
        filter.continue_past_window();
        filter.reset();
        assert_eq!(filter.index(), 0);
        assert!(!filter.is_continuation());
        assert_eq!(walk(&mut filter, 3), vec![0]);
    }

    #[test]
    fn test_everything() {
        let mut filter = RecordFilter::new(RangeSpec::everything());
        assert_eq!(walk(&mut filter, 4), vec![0, 1, 2, 3]);
    }
}
