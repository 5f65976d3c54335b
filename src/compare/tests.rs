use approx::assert_relative_eq;

use super::{compare_all, compare_labelled, parse_batch, Batch};
use crate::{
    align::AlignmentScore,
    codon::translate,
    errors::MutalignError,
    seq::{fasta::read_fasta_str, nucleotide::NucleotideSequence},
};

fn nt(s: &str) -> NucleotideSequence {
    NucleotideSequence::new(s).expect("valid test sequence")
}

const WT: &str = "ATGTCTGAAAAGATCGTTCAAGGTTTCCCAGACTATAAAGCTGGCTTGTAA";

#[test]
fn test_compare_all_identical() {
    let reference = nt("ATGATGATG");
    let records = compare_all(&reference, &[nt("ATGATGATG")]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), 1);
    assert_eq!(records[0].score(), AlignmentScore(9));
    assert_eq!(records[0].protein().to_string(), "MMM");
    assert_eq!(records[0].label(), "candidate_1");
}

#[test]
fn test_compare_all_preserves_order() {
    let reference = nt(WT);
    let candidates = vec![
        nt("TTTTTT"),
        nt(WT),
        nt("AAANNN"),
        nt(""),
    ];
    let records = compare_all(&reference, &candidates);
    assert_eq!(records.len(), candidates.len());
    let ids: Vec<usize> = records.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    for (rec, cand) in records.iter().zip(&candidates) {
        assert_eq!(rec.protein(), &translate(cand));
    }
    assert_eq!(records[1].score(), AlignmentScore(WT.len()));
    assert_eq!(records[2].protein().to_string(), "KX");
    assert_eq!(records[3].score(), AlignmentScore(0));
    assert!(records[3].protein().is_empty());
}

#[test]
fn test_compare_all_no_candidates() {
    assert!(compare_all(&nt(WT), &[]).is_empty());
}

#[test]
fn test_compare_labelled() {
    let candidates = vec![
        (String::from("m2"), nt("ATGTCTGAAAAGATCGTTTAAGGTTTCCCAGACTATAAAGCTGGCTTGTAA")),
        (String::from("m1"), nt("ATGTCTGAAAAGAACGTTCAAGGTTTCCCAGACTATAAAGCTGGCTTGTAA")),
    ];
    let records = compare_labelled(&nt(WT), &candidates);
    assert_eq!(records[0].label(), "m2");
    assert_eq!(records[0].id(), 1);
    assert_eq!(records[0].protein().to_string(), "MSEKIV*GFPDYKAGL*");
    assert_eq!(records[0].protein().first_stop(), Some(6));
    assert_eq!(records[1].label(), "m1");
    assert_eq!(records[1].score(), AlignmentScore(50));
}

#[test]
fn test_percent_identity() {
    let records = compare_all(&nt("ACGTTGCAC"), &[nt("ACGTAGCAC")]);
    assert_relative_eq!(records[0].percent_identity(9), 800.0 / 9.0, epsilon = 1e-9);
    assert_relative_eq!(records[0].percent_identity(0), 0.0);
}

#[test]
fn test_residue_identity() {
    let reference = nt(WT);
    let wt_protein = translate(&reference);
    let records = compare_all(&reference, &[nt("ATGTCTGAAAAGAACGTTCAAGGTTTCCCAGACTATAAAGCTGGCTTGTAA")]);
    // One missense change out of 17 residues.
    assert_eq!(records[0].residue_identity(&wt_protein), 16);
}

#[test]
fn test_parse_batch_aborts_on_first_invalid() {
    let err = parse_batch(&["ATG", "AT-G", "XXX"]).unwrap_err();
    assert!(matches!(
        err,
        MutalignError::InvalidSequence {
            symbol: '-',
            position: 2
        }
    ));
    let ok = parse_batch(&["ATG", "ccn"]).unwrap();
    assert_eq!(ok.len(), 2);
}

#[test]
fn test_batch_from_records_first_is_reference() {
    let records = read_fasta_str(">wt gene\nATGAAA\n>m1\nATGTAA\n>m2\nATGAAG\n").unwrap();
    let batch = Batch::from_records(records, None).unwrap();
    assert_eq!(batch.reference_label, "wt");
    assert_eq!(batch.reference.to_string(), "ATGAAA");
    let labels: Vec<&str> = batch.candidates.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["m1", "m2"]);

    let compared = batch.compare();
    assert_eq!(compared[0].score(), AlignmentScore(5));
    assert_eq!(compared[0].protein().to_string(), "M*");
    assert_eq!(compared[1].protein().to_string(), "MK");
}

#[test]
fn test_batch_from_records_named_reference() {
    let records = read_fasta_str(">m1\nATGTAA\n>wt\nATGAAA\n>m2\nATGAAG\n").unwrap();
    let batch = Batch::from_records(records, Some("wt")).unwrap();
    assert_eq!(batch.reference_label, "wt");
    let labels: Vec<&str> = batch.candidates.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["m1", "m2"]);
}

#[test]
fn test_batch_from_records_unknown_reference() {
    let records = read_fasta_str(">m1\nATGTAA\n").unwrap();
    let err = Batch::from_records(records, Some("wt")).unwrap_err();
    assert!(matches!(err, MutalignError::Format(ref m) if m.contains("'wt' not found")));
}

#[test]
fn test_batch_from_records_invalid_candidate() {
    let records = read_fasta_str(">wt\nATGAAA\n>m1\nATG-AA\n").unwrap();
    let err = Batch::from_records(records, None).unwrap_err();
    assert!(matches!(err, MutalignError::InvalidSequence { position: 3, .. }));
}
