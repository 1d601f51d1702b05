//! CSV sample input
//!
//! One `rank,magnitude` record per line, no header row.

use crate::error::{CliError, DataError};
use csv::{ReaderBuilder, StringRecord, Trim};
use eva_stats::Sample;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a ranked sample from CSV
pub fn read_sample<R: Read>(reader: R) -> Result<Sample, CliError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(index as u64 + 1);
        pairs.push(parse_record(&record, line)?);
    }
    tracing::debug!(rows = pairs.len(), "read sample");

    Ok(Sample::from_pairs(pairs)?)
}

pub fn read_sample_file(path: &Path) -> Result<Sample, CliError> {
    let file = File::open(path).map_err(|e| CliError::io(path, e))?;
    read_sample(file)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<(usize, f64), DataError> {
    if record.len() != 2 {
        return Err(DataError::new(
            line,
            format!("expected 2 fields (rank,magnitude), found {}", record.len()),
        ));
    }
    let rank = parse_rank(&record[0], line)?;
    let magnitude: f64 = record[1]
        .parse()
        .map_err(|_| DataError::new(line, format!("magnitude '{}' is not a number", &record[1])))?;
    Ok((rank, magnitude))
}

// "3" and "3.0" are both rank 3
fn parse_rank(cell: &str, line: u64) -> Result<usize, DataError> {
    let value: f64 = cell
        .parse()
        .map_err(|_| DataError::new(line, format!("rank '{}' is not a number", cell)))?;
    if !value.is_finite() || value < 1.0 || value.fract() != 0.0 {
        return Err(DataError::new(line, format!("rank '{}' is not a positive integer", cell)));
    }
    Ok(value as usize)
}
