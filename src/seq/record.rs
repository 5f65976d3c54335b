// A record for sequences, consisting of some description and a raw sequence, as read from a FastA
// file. The raw text is kept as is; it only becomes a NucleotideSequence (and is only validated)
// when the record is used as a reference or candidate.

use crate::errors::MutalignError;
use crate::seq::nucleotide::NucleotideSequence;

// A sequence file is just the records it holds, in file order.
pub type SeqFile = Vec<SeqRecord>;

#[derive(Debug, Clone, PartialEq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    // First whitespace-delimited word of the header, as most tools use it for an ID.
    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }

    pub fn to_nucleotides(&self) -> Result<NucleotideSequence, MutalignError> {
        NucleotideSequence::new(&self.sequence)
    }
}
