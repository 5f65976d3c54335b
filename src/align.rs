// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::seq::nucleotide::{Nucleotide, NucleotideSequence};

/// Number of matching positions in the best local ungapped alignment. Only [`align`] and
/// [`best_offset`] produce scores; callers read them through [`AlignmentScore::value`].
///
/// ```compile_fail
/// let forged = mutalign::AlignmentScore(7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlignmentScore(pub(crate) usize);

impl AlignmentScore {
    pub fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for AlignmentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The best diagonal found by [`best_offset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalMatch {
    pub score: AlignmentScore,
    // candidate index minus reference index along the diagonal
    pub offset: isize,
}

// Matches along the diagonal where candidate position j is paired with reference position
// j - offset.
fn diagonal_matches(reference: &[Nucleotide], candidate: &[Nucleotide], offset: isize) -> usize {
    let (ref_start, cand_start) = if offset >= 0 {
        (0, offset as usize)
    } else {
        ((-offset) as usize, 0)
    };
    reference[ref_start..]
        .iter()
        .zip(&candidate[cand_start..])
        .filter(|(r, c)| r == c)
        .count()
}

/// Scans every diagonal of the reference/candidate dot plot and returns the first one with the
/// most matches. Diagonals are visited from the most negative offset upwards. Returns `None` if
/// either sequence is empty.
///
/// With +1 per match, 0 per mismatch and no gaps, a running local score never decreases along a
/// diagonal, so the best window on a diagonal is the whole diagonal and the local alignment score
/// is the maximum over diagonals of their match counts.
pub fn best_offset(reference: &NucleotideSequence, candidate: &NucleotideSequence) -> Option<LocalMatch> {
    if reference.is_empty() || candidate.is_empty() {
        return None;
    }
    let (r, c) = (reference.as_slice(), candidate.as_slice());
    let lowest = -(r.len() as isize - 1);
    let highest = c.len() as isize - 1;

    let mut best = LocalMatch {
        score: AlignmentScore(0),
        offset: lowest,
    };
    for offset in lowest..=highest {
        let matches = diagonal_matches(r, c, offset);
        if matches > best.score.0 {
            best = LocalMatch {
                score: AlignmentScore(matches),
                offset,
            };
        }
    }
    Some(best)
}

/// Local ungapped alignment score of `candidate` against `reference` (match +1, mismatch 0).
/// Symmetric in its arguments; 0 if either sequence is empty.
pub fn align(reference: &NucleotideSequence, candidate: &NucleotideSequence) -> AlignmentScore {
    best_offset(reference, candidate)
        .map(|m| m.score)
        .unwrap_or_default()
}
