/*!
# CSV Validation & I/O

Validated readers and writers for the raffle work files. Headers are checked
in exact order before any row is deserialized, so a column swap fails loudly
instead of silently mixing up fields.
*/

use std::fs::File;
use std::path::Path;

use csv::{Reader, Writer};

use crate::errors::{CsvError, CsvResult};
use crate::schemas::{
    sample_participants, sample_prizes, CsvKind, ParticipantRow, PrizeRow, WinnerRow,
    PARTICIPANTS_CSV_HEADERS, PRIZES_CSV_HEADERS, WINNERS_CSV_HEADERS,
};

// ================================================================================================
// CSV Reading with Validation
// ================================================================================================

/// Read and validate the participants file. At least one row is required.
pub fn read_participants_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<ParticipantRow>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let headers = rdr.headers()?;
    validate_headers(headers.iter(), PARTICIPANTS_CSV_HEADERS, "participants.csv")?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: ParticipantRow = result?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(
            "participants file has no rows".to_string(),
        ));
    }

    Ok(rows)
}

/// Read and validate the prizes file. At least one row is required.
pub fn read_prizes_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<PrizeRow>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let headers = rdr.headers()?;
    validate_headers(headers.iter(), PRIZES_CSV_HEADERS, "prizes.csv")?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: PrizeRow = result?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(
            "prizes file has no rows".to_string(),
        ));
    }

    Ok(rows)
}

/// Read and validate the winners file. An empty file body is fine; a run
/// that has not happened yet has no winners.
pub fn read_winners_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<WinnerRow>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let headers = rdr.headers()?;
    validate_headers(headers.iter(), WINNERS_CSV_HEADERS, "winners.csv")?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: WinnerRow = result?;
        rows.push(row);
    }

    Ok(rows)
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write the winners file. The header row is always present, even with no
/// winners to report.
pub fn write_winners_csv<P: AsRef<Path>>(path: P, rows: &[WinnerRow]) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    if rows.is_empty() {
        wtr.write_record(WINNERS_CSV_HEADERS)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the canned starter content for a work-file kind: a small sample
/// roster and prize list, and a header-only winners table.
pub fn write_sample_csv<P: AsRef<Path>>(kind: CsvKind, path: P) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    match kind {
        CsvKind::Participants => {
            for row in sample_participants() {
                wtr.serialize(row)?;
            }
        }
        CsvKind::Prizes => {
            for row in sample_prizes() {
                wtr.serialize(row)?;
            }
        }
        CsvKind::Winners => {
            wtr.write_record(WINNERS_CSV_HEADERS)?;
        }
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> CsvResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    if actual_headers.len() != expected.len() {
        return Err(CsvError::SchemaValidation(format!(
            "{}: expected {} headers, found {}",
            file_type,
            expected.len(),
            actual_headers.len()
        )));
    }

    for (i, (actual, expected)) in actual_headers.iter().zip(expected.iter()).enumerate() {
        if actual != expected {
            return Err(CsvError::SchemaValidation(format!(
                "{}: header {} should be '{}', found '{}'",
                file_type,
                i + 1,
                expected,
                actual
            )));
        }
    }

    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
