// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use mutalign::{errors::MutalignError, runner, NucleotideSequence};

#[allow(dead_code)]
pub const YFG1_FASTA: &str = "tests/data/yfg1_mutants.fa";

#[allow(dead_code)]
pub fn nt(s: &str) -> NucleotideSequence {
    NucleotideSequence::new(s).expect("valid test sequence")
}

// Runs the CLI on `args` (without the program name), never reading a user config.
#[allow(dead_code)]
pub fn run_cli(args: &[&str]) -> Result<String, MutalignError> {
    let mut argv = vec!["mutalign", "--no-config"];
    argv.extend_from_slice(args);
    let mut out: Vec<u8> = Vec::new();
    runner::run_from(argv, &mut out)?;
    Ok(String::from_utf8(out).expect("report is UTF-8"))
}

// A small, fixed pool of sequences for property checks: repeats, N runs, empty, and
// lengths not divisible by 3.
#[allow(dead_code)]
pub fn sequence_pool() -> Vec<NucleotideSequence> {
    [
        "",
        "A",
        "AC",
        "ATG",
        "ATGATGATG",
        "AAAAAA",
        "TTTTTT",
        "ACGTTGCAC",
        "ACGTAGCAC",
        "NNNNN",
        "AAANNN",
        "GATTACAGATTACA",
        "CCGNNTAGGCA",
        "TGCATGCATGCA",
    ]
    .iter()
    .map(|s| nt(s))
    .collect()
}
