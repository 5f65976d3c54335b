// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{cmp::Reverse, fmt};

use clap::ValueEnum;
use itertools::Itertools;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    compare::ComparisonRecord,
    errors::MutalignError,
    report::RowOrdering::{Input, ScoreDecr, ScoreIncr},
    seq::protein::AminoAcidSequence,
};

pub const REPORT_FILE_VERSION: u32 = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[clap(name = "table")]
    #[clap(alias = "t")]
    Table,
    #[clap(name = "tsv")]
    #[clap(alias = "s")]
    Tsv,
    #[clap(name = "json")]
    #[clap(alias = "j")]
    Json,
}

impl ReportFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        ReportFormat::from_str(name, true).ok()
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportFormat::Table => "table",
            ReportFormat::Tsv => "tsv",
            ReportFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

// Order in which rows are shown. This never changes the records themselves, which stay in
// candidate order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RowOrdering {
    #[clap(name = "input")]
    Input,
    #[clap(name = "incr")]
    #[clap(alias = "score-incr")]
    ScoreIncr,
    #[clap(name = "decr")]
    #[clap(alias = "score-decr")]
    ScoreDecr,
}

impl RowOrdering {
    pub fn from_name(name: &str) -> Option<Self> {
        RowOrdering::from_str(name, true).ok()
    }
}

impl fmt::Display for RowOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sord = match self {
            Input => '-',
            ScoreIncr => '↑',
            ScoreDecr => '↓',
        };
        write!(f, "{}", sord)
    }
}

pub struct Report {
    reference_label: String,
    reference_len: usize,
    reference_protein: AminoAcidSequence,
    records: Vec<ComparisonRecord>,
    ordering: RowOrdering,
    selection: Option<Regex>,
    protein_width: Option<usize>,
}

impl Report {
    pub fn new(
        reference_label: &str,
        reference_len: usize,
        reference_protein: AminoAcidSequence,
        records: Vec<ComparisonRecord>,
    ) -> Self {
        Report {
            reference_label: reference_label.to_string(),
            reference_len,
            reference_protein,
            records,
            ordering: Input,
            selection: None,
            protein_width: None,
        }
    }

    pub fn records(&self) -> &[ComparisonRecord] {
        &self.records
    }

    pub fn set_ordering(&mut self, ordering: RowOrdering) {
        self.ordering = ordering;
    }

    /// Only rows whose label matches `pattern` are rendered.
    pub fn select_labels(&mut self, pattern: &str) -> Result<(), MutalignError> {
        self.selection = Some(Regex::new(pattern)?);
        Ok(())
    }

    /// Truncates the protein column of the table rendering.
    pub fn set_protein_width(&mut self, width: Option<usize>) {
        self.protein_width = width;
    }

    /// Indices into `records()`, in display order, after label selection.
    pub fn row_indices(&self) -> Vec<usize> {
        let scores: Vec<usize> = self.records.iter().map(|r| r.score().value()).collect();
        let ordering = match self.ordering {
            Input => (0..self.records.len()).collect(),
            ScoreIncr => order(&scores),
            ScoreDecr => {
                let mut ord: Vec<usize> = (0..scores.len()).collect();
                ord.sort_by_key(|&i| Reverse(scores[i]));
                ord
            }
        };
        let rows: Vec<usize> = ordering
            .into_iter()
            .filter(|&i| match &self.selection {
                Some(re) => re.is_match(self.records[i].label()),
                None => true,
            })
            .collect();
        debug!("{} of {} rows selected ({})", rows.len(), self.records.len(), self.ordering);
        rows
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, MutalignError> {
        match format {
            ReportFormat::Table => Ok(self.render_table()),
            ReportFormat::Tsv => Ok(self.render_tsv()),
            ReportFormat::Json => self.render_json(),
        }
    }

    fn cells(&self, rec: &ComparisonRecord, protein: String) -> [String; 6] {
        [
            rec.id().to_string(),
            rec.label().to_string(),
            rec.score().to_string(),
            format!("{:.1}", rec.percent_identity(self.reference_len)),
            rec.protein()
                .first_stop()
                .map(|i| (i + 1).to_string())
                .unwrap_or_else(|| String::from("-")),
            protein,
        ]
    }

    pub fn render_table(&self) -> String {
        let header = ["id", "label", "score", "%id", "stop", "protein"].map(String::from);
        let mut rows = vec![header];
        for i in self.row_indices() {
            let rec = &self.records[i];
            let protein = truncate(&rec.protein().to_string(), self.protein_width);
            rows.push(self.cells(rec, protein));
        }

        let widths: Vec<usize> = (0..6)
            .map(|col| rows.iter().map(|r| r[col].chars().count()).max().unwrap_or(0))
            .collect();
        let mut out = String::new();
        for row in &rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
                .join("  ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    pub fn render_tsv(&self) -> String {
        let mut out = String::from("id\tlabel\tscore\tpct_id\tfirst_stop\tprotein\n");
        for i in self.row_indices() {
            let rec = &self.records[i];
            out.push_str(&self.cells(rec, rec.protein().to_string()).join("\t"));
            out.push('\n');
        }
        out
    }

    pub fn to_report_file(&self) -> ReportFile {
        let records = self
            .row_indices()
            .into_iter()
            .map(|i| {
                let rec = &self.records[i];
                ReportRecord {
                    id: rec.id(),
                    label: rec.label().to_string(),
                    score: rec.score().value(),
                    percent_identity: rec.percent_identity(self.reference_len),
                    first_stop: rec.protein().first_stop().map(|s| s + 1),
                    residue_identity: rec.residue_identity(&self.reference_protein),
                    protein: rec.protein().to_string(),
                }
            })
            .collect();
        ReportFile {
            version: REPORT_FILE_VERSION,
            reference: ReportReference {
                label: self.reference_label.clone(),
                length: self.reference_len,
                protein: self.reference_protein.to_string(),
            },
            records,
        }
    }

    pub fn render_json(&self) -> Result<String, MutalignError> {
        let mut text = serde_json::to_string_pretty(&self.to_report_file())?;
        text.push('\n');
        Ok(text)
    }
}

// Keeps the first `width` symbols, marking the cut with "...".
fn truncate(s: &str, width: Option<usize>) -> String {
    match width {
        Some(w) if s.chars().count() > w => format!("{}...", s.chars().take(w).collect::<String>()),
        _ => s.to_string(),
    }
}

// Computes an ordering WRT an array, that is, an array of indices of elements of the source array,
// after sorting. Eg [3, 1, 7] -> [1, 0, 2], because the smallest element has index 1, the next
// has index 0, and the largest has index 2 (in the original array). Ties keep their input order.
fn order(nums: &[usize]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..nums.len()).collect();
    indices.sort_by_key(|&i| nums[i]);
    indices
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportFile {
    pub version: u32,
    pub reference: ReportReference,
    pub records: Vec<ReportRecord>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportReference {
    pub label: String,
    pub length: usize,
    pub protein: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportRecord {
    pub id: usize,
    pub label: String,
    pub score: usize,
    pub percent_identity: f64,
    // 1-based residue position
    pub first_stop: Option<usize>,
    pub residue_identity: usize,
    pub protein: String,
}

impl ReportFile {
    pub fn from_json(text: &str) -> Result<Self, MutalignError> {
        let file: ReportFile = serde_json::from_str(text)?;
        if file.version != REPORT_FILE_VERSION {
            return Err(MutalignError::Format(format!(
                "Unsupported report version {}",
                file.version
            )));
        }
        Ok(file)
    }
}
