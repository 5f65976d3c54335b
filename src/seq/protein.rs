// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    Stop,
    // Codon could not be resolved to a single residue (or to stop).
    Unknown,
}

impl AminoAcid {
    /// One-letter code; `*` for stop, `X` for unknown.
    pub fn symbol(self) -> char {
        use AminoAcid::*;
        match self {
            Ala => 'A',
            Arg => 'R',
            Asn => 'N',
            Asp => 'D',
            Cys => 'C',
            Gln => 'Q',
            Glu => 'E',
            Gly => 'G',
            His => 'H',
            Ile => 'I',
            Leu => 'L',
            Lys => 'K',
            Met => 'M',
            Phe => 'F',
            Pro => 'P',
            Ser => 'S',
            Thr => 'T',
            Trp => 'W',
            Tyr => 'Y',
            Val => 'V',
            Stop => '*',
            Unknown => 'X',
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A translated protein. Only produced by [`crate::codon::translate`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AminoAcidSequence {
    residues: Vec<AminoAcid>,
}

impl AminoAcidSequence {
    pub(crate) fn from_residues(residues: Vec<AminoAcid>) -> Self {
        AminoAcidSequence { residues }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn as_slice(&self) -> &[AminoAcid] {
        &self.residues
    }

    /// Index of the first stop marker. Translation runs past stops, so anything before the end
    /// of the sequence is a premature stop.
    pub fn first_stop(&self) -> Option<usize> {
        self.residues.iter().position(|&aa| aa == AminoAcid::Stop)
    }

    pub fn count_unknown(&self) -> usize {
        self.residues
            .iter()
            .filter(|&&aa| aa == AminoAcid::Unknown)
            .count()
    }

    /// Number of positions, over the shorter of the two sequences, at which both carry the same
    /// residue. Unknown never matches, not even another unknown.
    pub fn identical_residues(&self, other: &AminoAcidSequence) -> usize {
        self.residues
            .iter()
            .zip(other.residues.iter())
            .filter(|(a, b)| a == b && **a != AminoAcid::Unknown)
            .count()
    }
}

impl fmt::Display for AminoAcidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aa in &self.residues {
            write!(f, "{}", aa.symbol())?;
        }
        Ok(())
    }
}

// Serialised as its linear symbol string, which is also what a structure viewer consumes.
impl Serialize for AminoAcidSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
