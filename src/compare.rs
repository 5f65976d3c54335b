// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::{debug, warn};

use crate::{
    align::{align, AlignmentScore},
    codon::translate,
    errors::MutalignError,
    seq::{
        nucleotide::NucleotideSequence,
        protein::AminoAcidSequence,
        record::SeqFile,
    },
};

/// Result for one candidate. Read-only once produced.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRecord {
    id: usize,
    label: String,
    score: AlignmentScore,
    protein: AminoAcidSequence,
}

impl ComparisonRecord {
    /// 1-based position of the candidate in the input list.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn score(&self) -> AlignmentScore {
        self.score
    }

    pub fn protein(&self) -> &AminoAcidSequence {
        &self.protein
    }

    /// Alignment score as a percentage of the reference length (0 for an empty reference).
    pub fn percent_identity(&self, reference_len: usize) -> f64 {
        if reference_len == 0 {
            return 0.0;
        }
        100.0 * self.score.value() as f64 / reference_len as f64
    }

    /// Residues identical, position by position, to the reference protein.
    pub fn residue_identity(&self, reference_protein: &AminoAcidSequence) -> usize {
        self.protein.identical_residues(reference_protein)
    }
}

fn default_label(id: usize) -> String {
    format!("candidate_{}", id)
}

fn compare_one(
    reference: &NucleotideSequence,
    id: usize,
    label: String,
    candidate: &NucleotideSequence,
) -> ComparisonRecord {
    let score = align(reference, candidate);
    let protein = translate(candidate);
    debug!("{} ({}): score {}, {} residues", id, label, score, protein.len());
    ComparisonRecord {
        id,
        label,
        score,
        protein,
    }
}

/// Scores and translates each candidate against `reference`. One record per candidate, in input
/// order, with 1-based ids.
pub fn compare_all(
    reference: &NucleotideSequence,
    candidates: &[NucleotideSequence],
) -> Vec<ComparisonRecord> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, cand)| compare_one(reference, i + 1, default_label(i + 1), cand))
        .collect()
}

/// Like [`compare_all`], but each candidate carries its own label.
pub fn compare_labelled(
    reference: &NucleotideSequence,
    candidates: &[(String, NucleotideSequence)],
) -> Vec<ComparisonRecord> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, (label, cand))| compare_one(reference, i + 1, label.clone(), cand))
        .collect()
}

/// Validates raw candidate texts. The first invalid candidate aborts the whole batch.
pub fn parse_batch<S: AsRef<str>>(texts: &[S]) -> Result<Vec<NucleotideSequence>, MutalignError> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            NucleotideSequence::new(text.as_ref()).map_err(|e| {
                warn!("Rejecting batch: {} is invalid: {}", default_label(i + 1), e);
                e
            })
        })
        .collect()
}

/// A reference and its labelled candidates, as taken from a sequence file.
#[derive(Debug)]
pub struct Batch {
    pub reference_label: String,
    pub reference: NucleotideSequence,
    pub candidates: Vec<(String, NucleotideSequence)>,
}

impl Batch {
    /// Splits `records` into a reference and candidates. The reference is the record whose ID
    /// (first header word) or full header equals `reference_label`, or the first record if no
    /// label is given. All other records are candidates, in file order. Fails on the first
    /// invalid sequence.
    pub fn from_records(records: SeqFile, reference_label: Option<&str>) -> Result<Self, MutalignError> {
        if records.is_empty() {
            return Err(MutalignError::Format(String::from("No sequences found")));
        }
        let ref_idx = match reference_label {
            None => 0,
            Some(wanted) => records
                .iter()
                .position(|rec| rec.id() == wanted || rec.header == wanted)
                .ok_or_else(|| MutalignError::Format(format!("Reference '{}' not found", wanted)))?,
        };

        let mut reference: Option<(String, NucleotideSequence)> = None;
        let mut candidates = Vec::with_capacity(records.len() - 1);
        for (idx, rec) in records.into_iter().enumerate() {
            let seq = rec.to_nucleotides().map_err(|e| {
                warn!("Rejecting batch: record '{}' is invalid: {}", rec.header, e);
                e
            })?;
            let label = rec.id().to_string();
            if idx == ref_idx {
                reference = Some((label, seq));
            } else {
                candidates.push((label, seq));
            }
        }
        let (reference_label, reference) =
            reference.ok_or_else(|| MutalignError::Format(String::from("No reference sequence")))?;

        Ok(Batch {
            reference_label,
            reference,
            candidates,
        })
    }

    pub fn compare(&self) -> Vec<ComparisonRecord> {
        compare_labelled(&self.reference, &self.candidates)
    }
}

#[cfg(test)]
mod tests;
