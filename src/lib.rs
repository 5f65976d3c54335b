pub mod align;
pub mod codon;
pub mod compare;
pub mod config;
pub mod report;
pub mod runner;
pub mod seq;
pub mod errors;

use crate::errors::MutalignError;

pub use crate::align::{align, AlignmentScore};
pub use crate::codon::translate;
pub use crate::compare::{compare_all, ComparisonRecord};
pub use crate::seq::{nucleotide::NucleotideSequence, protein::AminoAcidSequence};

pub fn run() -> Result<(), MutalignError> {
    runner::run()
}
