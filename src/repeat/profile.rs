use crate::error::Result;
use crate::repeat::run::longest_run;
use rayon::prelude::*;
use serde::Serialize;

/// Longest-run count for one STR pattern
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StrCount {
    pub pattern: String,
    pub count: usize,
}

/// STR counts for a sequence, kept in the order the patterns were requested
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StrProfile {
    pub counts: Vec<StrCount>,
}

impl StrProfile {
    /// Compute the longest run of every pattern in `sequence`.
    ///
    /// Patterns are counted in parallel; any empty pattern fails the whole
    /// profile.
    pub fn compute<S: AsRef<str> + Sync>(sequence: &str, patterns: &[S]) -> Result<Self> {
        let counts = patterns
            .par_iter()
            .map(|p| {
                let pattern = p.as_ref();
                longest_run(sequence, pattern).map(|count| StrCount {
                    pattern: pattern.to_string(),
                    count,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Profiled {} STRs over {} bases", counts.len(), sequence.len());
        Ok(StrProfile { counts })
    }

    pub fn get(&self, pattern: &str) -> Option<usize> {
        self.counts.iter().find(|c| c.pattern == pattern).map(|c| c.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|c| (c.pattern.as_str(), c.count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
