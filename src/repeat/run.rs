use crate::error::{Error, Result};
use serde::Serialize;

/// A run of back-to-back copies of a pattern inside a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSpan {
    pub start: usize,
    pub count: usize,
    pub unit_len: usize,
}

impl RunSpan {
    /// Number of bases covered by the run
    pub fn len(&self) -> usize {
        self.count * self.unit_len
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.start + self.len()
    }
}

fn check_pattern(pattern: &[u8]) -> Result<()> {
    if pattern.is_empty() {
        return Err(Error::EmptyPattern);
    }
    Ok(())
}

/// Run length at every offset: runs[i] = 1 + runs[i + |p|] when the pattern
/// matches at i, otherwise 0.
fn run_table(seq: &[u8], pattern: &[u8]) -> Vec<usize> {
    let unit = pattern.len();
    let mut runs = vec![0usize; seq.len()];
    if seq.len() < unit {
        return runs;
    }

    for i in (0..=seq.len() - unit).rev() {
        if &seq[i..i + unit] == pattern {
            let next = runs.get(i + unit).copied().unwrap_or(0);
            runs[i] = next + 1;
        }
    }

    runs
}

/// Longest run of consecutive, non-overlapping copies of `pattern` starting
/// at any offset in `sequence`.
///
/// Returns 0 when the pattern never occurs, including when it is longer than
/// the sequence. An empty pattern is rejected with [`Error::EmptyPattern`].
///
/// ```
/// use strmatch::repeat::longest_run;
///
/// assert_eq!(longest_run("AATGAATGAATGAATGAT", "AATG").unwrap(), 4);
/// assert_eq!(longest_run("GATTACA", "TA").unwrap(), 1);
/// ```
pub fn longest_run(sequence: &str, pattern: &str) -> Result<usize> {
    let pattern = pattern.as_bytes();
    check_pattern(pattern)?;

    let runs = run_table(sequence.as_bytes(), pattern);
    Ok(runs.into_iter().max().unwrap_or(0))
}

/// Nested-loop scan: for each offset, count matches until the next window
/// differs or runs off the end. Same results as [`longest_run`] in O(n²).
pub fn longest_run_naive(sequence: &str, pattern: &str) -> Result<usize> {
    let seq = sequence.as_bytes();
    let pattern = pattern.as_bytes();
    check_pattern(pattern)?;

    let unit = pattern.len();
    let mut longest = 0;

    for i in 0..seq.len() {
        let mut count = 0;
        loop {
            let start = i + count * unit;
            let end = start + unit;
            if end > seq.len() || &seq[start..end] != pattern {
                break;
            }
            count += 1;
        }
        longest = longest.max(count);
    }

    Ok(longest)
}

/// Run count starting exactly at `offset` (0 if the offset is out of range)
pub fn run_at(sequence: &str, pattern: &str, offset: usize) -> Result<usize> {
    let seq = sequence.as_bytes();
    let pattern = pattern.as_bytes();
    check_pattern(pattern)?;

    let unit = pattern.len();
    let mut count = 0;
    let mut pos = offset;
    while pos.saturating_add(unit) <= seq.len() && &seq[pos..pos + unit] == pattern {
        count += 1;
        pos += unit;
    }

    Ok(count)
}

/// Leftmost offset holding the longest run, or `None` if the pattern is absent
pub fn longest_run_span(sequence: &str, pattern: &str) -> Result<Option<RunSpan>> {
    let pattern = pattern.as_bytes();
    check_pattern(pattern)?;

    let runs = run_table(sequence.as_bytes(), pattern);
    let mut best: Option<RunSpan> = None;
    for (start, &count) in runs.iter().enumerate() {
        if count > best.map_or(0, |b| b.count) {
            best = Some(RunSpan { start, count, unit_len: pattern.len() });
        }
    }

    Ok(best)
}
