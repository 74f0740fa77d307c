//! Short tandem repeat counting: longest back-to-back runs of a pattern and
//! per-sequence STR profiles.

pub mod profile;
pub mod run;

pub use profile::{StrCount, StrProfile};
pub use run::{longest_run, longest_run_naive, longest_run_span, run_at, RunSpan};
