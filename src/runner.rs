// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    ffi::OsString,
    io::{stdout, Write},
};

use log::{info, warn};

use clap::{error::ErrorKind, Parser};

use crate::codon::translate;
use crate::compare::Batch;
use crate::config::{find_config, MutalignConfig};
use crate::errors::MutalignError;
use crate::report::{Report, ReportFormat, RowOrdering};
use crate::seq::fasta::read_fasta_file;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// FastA file: reference allele and mutant candidates
    seq_fname: String,

    /// Header ID of the reference record (default: first record)
    #[arg(short, long)]
    reference: Option<String>,

    /// Report format
    #[arg(short, long = "format",
        help = "Report format [table|tsv|json] (or just t|s|j); default: table",
        hide_possible_values = true,
    )]
    format: Option<ReportFormat>,

    /// Row order [input|incr|decr] (by alignment score)
    #[arg(short, long, hide_possible_values = true)]
    order: Option<RowOrdering>,

    /// Only show candidates whose label matches this regex
    #[arg(short, long)]
    select: Option<String>,

    /// Truncate the protein column of the table to this many residues
    #[arg(short = 'w', long = "protein-width")]
    protein_width: Option<usize>,

    /// Info mode (print reference summary and exit)
    #[arg(short, long)]
    info: bool,

    /// Do not read ~/.mutalignconfig or ./.mutalignconfig
    #[arg(long = "no-config")]
    no_config: bool,
}

fn load_config(cli: &Cli) -> MutalignConfig {
    if cli.no_config {
        return MutalignConfig::default();
    }
    match find_config() {
        Some(path) => match MutalignConfig::from_file(&path) {
            Ok(cfg) => {
                info!("Using config {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                MutalignConfig::default()
            }
        },
        None => MutalignConfig::default(),
    }
}

fn output_info<W: Write>(out: &mut W, seq_fname: &str, batch: &Batch) -> Result<(), MutalignError> {
    writeln!(out, "name: {}", seq_fname)?;
    writeln!(out, "reference: {}", batch.reference_label)?;
    writeln!(out, "reference_length: {}", batch.reference.len())?;
    writeln!(out, "reference_protein: {}", translate(&batch.reference))?;
    writeln!(out, "nb_candidates: {}", batch.candidates.len())?;
    Ok(())
}

/// Parses `args` (program name first) and writes the report to `out`.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> Result<(), MutalignError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e)?;
            return Ok(());
        }
        Err(e) => return Err(MutalignError::Format(e.to_string())),
    };
    let config = load_config(&cli);

    let seq_file = read_fasta_file(&cli.seq_fname)?;
    info!("Read {} records from {}", seq_file.len(), cli.seq_fname);
    let batch = Batch::from_records(seq_file, cli.reference.as_deref())?;

    if cli.info {
        return output_info(out, &cli.seq_fname, &batch);
    }

    let records = batch.compare();
    info!(
        "Compared {} candidates against {}",
        records.len(),
        batch.reference_label
    );

    let mut report = Report::new(
        &batch.reference_label,
        batch.reference.len(),
        translate(&batch.reference),
        records,
    );
    let settings = config.resolve(cli.format, cli.order, cli.protein_width);
    if let Some(ordering) = settings.order {
        report.set_ordering(ordering);
    }
    if let Some(pattern) = &cli.select {
        report.select_labels(pattern)?;
    }
    report.set_protein_width(settings.protein_width);

    out.write_all(report.render(settings.format)?.as_bytes())?;
    Ok(())
}

pub fn run() -> Result<(), MutalignError> {
    env_logger::init();
    info!("Starting log");

    let mut out = stdout().lock();
    run_from(std::env::args_os(), &mut out)
}
