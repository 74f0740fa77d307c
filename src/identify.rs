use crate::error::Result;
use crate::io::database::{Individual, StrDatabase};
use crate::repeat::StrProfile;
use serde::Serialize;
use std::fmt;

/// Outcome of matching a query sequence against an STR database
#[derive(Serialize, Debug, Clone)]
pub struct Identification {
    pub matched: Option<String>,
    pub profile: StrProfile,
}

impl fmt::Display for Identification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.matched {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "No match"),
        }
    }
}

/// Profile `sequence` for exactly the STR columns of `db`
pub fn profile_for(db: &StrDatabase, sequence: &str) -> Result<StrProfile> {
    StrProfile::compute(sequence, db.strs())
}

fn matches_profile(db: &StrDatabase, individual: &Individual, profile: &StrProfile) -> bool {
    db.strs()
        .iter()
        .zip(&individual.counts)
        .all(|(s, &expected)| profile.get(s) == Some(expected))
}

/// First individual, in file order, whose every STR count equals the profile
pub fn identify<'a>(db: &'a StrDatabase, profile: &StrProfile) -> Option<&'a Individual> {
    db.individuals()
        .iter()
        .find(|ind| matches_profile(db, ind, profile))
}

/// Every matching individual, in file order
pub fn identify_all<'a>(db: &'a StrDatabase, profile: &StrProfile) -> Vec<&'a Individual> {
    db.individuals()
        .iter()
        .filter(|ind| matches_profile(db, ind, profile))
        .collect()
}

/// Profile the sequence and look it up in one step
pub fn identify_sequence(db: &StrDatabase, sequence: &str) -> Result<Identification> {
    let profile = profile_for(db, sequence)?;
    let matched = identify(db, &profile).map(|ind| ind.name.clone());

    match &matched {
        Some(name) => tracing::info!("Sequence matches {}", name),
        None => tracing::info!("No individual matches the sequence profile"),
    }

    Ok(Identification { matched, profile })
}
