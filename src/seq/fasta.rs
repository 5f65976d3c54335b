// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::errors::MutalignError;
use crate::seq::record::{SeqFile, SeqRecord};

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, MutalignError> {
    let file = File::open(path.as_ref())?;
    debug!("Reading FastA from {}", path.as_ref().display());
    read_fasta(BufReader::new(file))
}

pub fn read_fasta_str(text: &str) -> Result<SeqFile, MutalignError> {
    read_fasta(text.as_bytes())
}

pub fn read_fasta<R: BufRead>(reader: R) -> Result<SeqFile, MutalignError> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for (linenum, line) in reader.lines().enumerate() {
        let l = line?;
        let trimmed = l.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(hdr) = trimmed.strip_prefix('>') {
            if let Some(rec) = current_record.take() {
                // push existing record
                result.push(rec);
            }
            current_record = Some(SeqRecord {
                header: hdr.trim().to_string(),
                sequence: String::new(),
            });
        } else {
            // append line to current record's sequence
            match current_record.as_mut() {
                Some(rec) => rec.sequence.push_str(trimmed),
                None => {
                    return Err(MutalignError::Format(format!(
                        "Sequence data before first header (line {})",
                        linenum + 1
                    )))
                }
            }
        }
    }
    if let Some(rec) = current_record {
        result.push(rec);
    }

    if result.is_empty() {
        return Err(MutalignError::Format(String::from("No sequences found")));
    }

    Ok(result)
}
