// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::sync::OnceLock;

use crate::seq::{
    nucleotide::{Nucleotide, NucleotideSequence},
    protein::{AminoAcid, AminoAcidSequence},
};

use AminoAcid::*;

/// The standard genetic code (NCBI translation table 1).
pub const STANDARD_CODE: [(&[u8; 3], AminoAcid); 64] = [
    // Phenylalanine (F)
    (b"TTT", Phe),
    (b"TTC", Phe),
    // Leucine (L)
    (b"TTA", Leu),
    (b"TTG", Leu),
    (b"CTT", Leu),
    (b"CTC", Leu),
    (b"CTA", Leu),
    (b"CTG", Leu),
    // Isoleucine (I)
    (b"ATT", Ile),
    (b"ATC", Ile),
    (b"ATA", Ile),
    // Methionine (M)
    (b"ATG", Met),
    // Valine (V)
    (b"GTT", Val),
    (b"GTC", Val),
    (b"GTA", Val),
    (b"GTG", Val),
    // Serine (S)
    (b"TCT", Ser),
    (b"TCC", Ser),
    (b"TCA", Ser),
    (b"TCG", Ser),
    (b"AGT", Ser),
    (b"AGC", Ser),
    // Proline (P)
    (b"CCT", Pro),
    (b"CCC", Pro),
    (b"CCA", Pro),
    (b"CCG", Pro),
    // Threonine (T)
    (b"ACT", Thr),
    (b"ACC", Thr),
    (b"ACA", Thr),
    (b"ACG", Thr),
    // Alanine (A)
    (b"GCT", Ala),
    (b"GCC", Ala),
    (b"GCA", Ala),
    (b"GCG", Ala),
    // Tyrosine (Y)
    (b"TAT", Tyr),
    (b"TAC", Tyr),
    // Stop codons (*)
    (b"TAA", Stop),
    (b"TAG", Stop),
    (b"TGA", Stop),
    // Histidine (H)
    (b"CAT", His),
    (b"CAC", His),
    // Glutamine (Q)
    (b"CAA", Gln),
    (b"CAG", Gln),
    // Asparagine (N)
    (b"AAT", Asn),
    (b"AAC", Asn),
    // Lysine (K)
    (b"AAA", Lys),
    (b"AAG", Lys),
    // Aspartic acid (D)
    (b"GAT", Asp),
    (b"GAC", Asp),
    // Glutamic acid (E)
    (b"GAA", Glu),
    (b"GAG", Glu),
    // Cysteine (C)
    (b"TGT", Cys),
    (b"TGC", Cys),
    // Tryptophan (W)
    (b"TGG", Trp),
    // Arginine (R)
    (b"CGT", Arg),
    (b"CGC", Arg),
    (b"CGA", Arg),
    (b"CGG", Arg),
    (b"AGA", Arg),
    (b"AGG", Arg),
    // Glycine (G)
    (b"GGT", Gly),
    (b"GGC", Gly),
    (b"GGA", Gly),
    (b"GGG", Gly),
];

// Row-major index of a resolved codon in a 4x4x4 cube (A=0, C=1, G=2, T=3).
fn cube_index(codon: [Nucleotide; 3]) -> Option<usize> {
    codon.iter().try_fold(0, |acc, &base| {
        let digit = match base {
            Nucleotide::A => 0,
            Nucleotide::C => 1,
            Nucleotide::G => 2,
            Nucleotide::T => 3,
            Nucleotide::N => return None,
        };
        Some(acc * 4 + digit)
    })
}

fn lookup_resolved(codon: [Nucleotide; 3]) -> AminoAcid {
    let wanted = codon.map(|b| b.symbol() as u8);
    STANDARD_CODE
        .iter()
        .find(|(triplet, _)| **triplet == wanted)
        .map(|&(_, aa)| aa)
        .unwrap_or(Unknown)
}

// STANDARD_CODE re-indexed by cube_index(). Built on first use.
struct CodonCube([AminoAcid; 64]);

static CODON_CUBE: OnceLock<CodonCube> = OnceLock::new();

impl CodonCube {
    fn shared() -> &'static CodonCube {
        CODON_CUBE.get_or_init(CodonCube::new)
    }

    fn new() -> Self {
        let mut cube = [Unknown; 64];
        for &first in &Nucleotide::RESOLVED {
            for &second in &Nucleotide::RESOLVED {
                for &third in &Nucleotide::RESOLVED {
                    let codon = [first, second, third];
                    if let Some(idx) = cube_index(codon) {
                        cube[idx] = lookup_resolved(codon);
                    }
                }
            }
        }
        CodonCube(cube)
    }

    fn get(&self, codon: [Nucleotide; 3]) -> AminoAcid {
        if let Some(idx) = cube_index(codon) {
            return self.0[idx];
        }
        // At least one N: expand every N over the resolved bases. The codon resolves only if all
        // expansions agree (e.g. CTN -> L); otherwise it is unknown.
        let mut agreed: Option<AminoAcid> = None;
        for idx in expanded_indices(codon) {
            let aa = self.0[idx];
            match agreed {
                None => agreed = Some(aa),
                Some(prev) if prev == aa => {}
                Some(_) => return Unknown,
            }
        }
        agreed.unwrap_or(Unknown)
    }
}

// Cube indices of every resolution of `codon`, one per combination of bases at its N positions.
fn expanded_indices(codon: [Nucleotide; 3]) -> Vec<usize> {
    let mut expansions = vec![codon];
    for pos in 0..3 {
        if codon[pos].is_resolved() {
            continue;
        }
        expansions = expansions
            .into_iter()
            .flat_map(|partial| {
                Nucleotide::RESOLVED.iter().map(move |&base| {
                    let mut next = partial;
                    next[pos] = base;
                    next
                })
            })
            .collect();
    }
    expansions.into_iter().filter_map(cube_index).collect()
}

/// Translates one codon. Codons with unresolved bases map to a residue only when every possible
/// resolution agrees.
pub fn translate_codon(codon: [Nucleotide; 3]) -> AminoAcid {
    CodonCube::shared().get(codon)
}

/// Translates `seq` in frame 0. The result has `seq.len() / 3` residues: trailing bases that do
/// not form a full codon are dropped, and stop codons are emitted as `*` without ending the
/// translation.
pub fn translate(seq: &NucleotideSequence) -> AminoAcidSequence {
    let cube = CodonCube::shared();
    AminoAcidSequence::from_residues(seq.codons().map(|codon| cube.get(codon)).collect())
}
