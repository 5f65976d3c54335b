// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::errors::MutalignError;

/// A DNA base. `N` stands for an unresolved base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    N,
}

impl Nucleotide {
    /// The four resolved bases, in table order.
    pub const RESOLVED: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Parses a single symbol. Case is ignored.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            'N' => Some(Nucleotide::N),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
            Nucleotide::N => 'N',
        }
    }

    pub fn is_resolved(self) -> bool {
        self != Nucleotide::N
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable DNA sequence over {A, C, G, T, N}.
///
/// Validation happens here, once: a `NucleotideSequence` that exists is always well-formed, so
/// alignment and translation have no error paths of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NucleotideSequence {
    bases: Vec<Nucleotide>,
}

impl NucleotideSequence {
    pub fn new(text: &str) -> Result<Self, MutalignError> {
        let bases = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Nucleotide::from_symbol(symbol)
                    .ok_or(MutalignError::InvalidSequence { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NucleotideSequence { bases })
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.bases
    }

    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.bases.iter().copied()
    }

    /// Complete, non-overlapping triplets starting at position 0. A trailing partial codon (1 or
    /// 2 bases) is not yielded.
    pub fn codons(&self) -> impl Iterator<Item = [Nucleotide; 3]> + '_ {
        self.iter().tuples().map(|(a, b, c)| [a, b, c])
    }
}

impl FromStr for NucleotideSequence {
    type Err = MutalignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NucleotideSequence::new(s)
    }
}

impl TryFrom<&str> for NucleotideSequence {
    type Error = MutalignError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        NucleotideSequence::new(s)
    }
}

impl From<Vec<Nucleotide>> for NucleotideSequence {
    fn from(bases: Vec<Nucleotide>) -> Self {
        NucleotideSequence { bases }
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bases.iter().map(|b| b.symbol()).join(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_case() {
        let seq: NucleotideSequence = "acgTN".parse().expect("valid sequence");
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_string(), "ACGTN");
    }

    #[test]
    fn test_parse_empty() {
        let seq = NucleotideSequence::new("").expect("empty is valid");
        assert!(seq.is_empty());
        assert_eq!(seq.codons().count(), 0);
    }

    #[test]
    fn test_reject_gap() {
        let err = NucleotideSequence::new("ATG-CTG").unwrap_err();
        assert!(matches!(
            err,
            MutalignError::InvalidSequence {
                symbol: '-',
                position: 3
            }
        ));
    }

    #[test]
    fn test_reject_iupac_ambiguity_code() {
        // Only N is accepted as an unresolved base.
        let err = NucleotideSequence::new("ATGR").unwrap_err();
        assert!(matches!(
            err,
            MutalignError::InvalidSequence {
                symbol: 'R',
                position: 3
            }
        ));
    }

    #[test]
    fn test_reject_whitespace() {
        assert!(NucleotideSequence::new("ATG CTG").is_err());
    }

    #[test]
    fn test_codons_drop_trailing_bases() {
        let seq = NucleotideSequence::new("ATGGCCTA").unwrap();
        let codons: Vec<String> = seq
            .codons()
            .map(|c| c.iter().map(|b| b.symbol()).collect())
            .collect();
        assert_eq!(codons, vec!["ATG", "GCC"]);
    }
}
