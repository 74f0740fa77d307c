//! Short tandem repeat (STR) profiling of DNA sequences and lookup of the
//! resulting profile in an STR database.

pub mod error;
pub mod identify;
pub mod io;
pub mod repeat;

pub use error::{Error, Result};
