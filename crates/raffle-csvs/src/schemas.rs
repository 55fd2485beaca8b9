/*!
# CSV Schema Definitions

Row structures and header contracts for the raffle work files, plus the
conversions between wire rows and the engine's domain types.
*/

use raffle_engine::{Assignment, Participant, Prize};
use serde::{Deserialize, Serialize};

// ================================================================================================
// Headers
// ================================================================================================

/// Expected headers for participants.csv in exact order
pub const PARTICIPANTS_CSV_HEADERS: &[&str] = &["name", "lastname"];

/// Expected headers for prizes.csv in exact order
pub const PRIZES_CSV_HEADERS: &[&str] = &["item", "qty"];

/// Expected headers for winners.csv in exact order
pub const WINNERS_CSV_HEADERS: &[&str] = &["name", "lastname", "item"];

// ================================================================================================
// Row structures
// ================================================================================================

/// Row structure for participants.csv
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantRow {
    /// Given name
    pub name: String,

    /// Family name
    pub lastname: String,
}

/// Row structure for prizes.csv
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrizeRow {
    /// Prize name shown to the room
    pub item: String,

    /// Units to hand out; rejected at parse time if negative
    pub qty: u64,
}

/// Row structure for winners.csv
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerRow {
    pub name: String,
    pub lastname: String,
    pub item: String,
}

// ================================================================================================
// Domain conversions
// ================================================================================================

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        Participant::new(row.name, row.lastname)
    }
}

impl From<PrizeRow> for Prize {
    fn from(row: PrizeRow) -> Self {
        Prize::new(row.item, row.qty)
    }
}

impl From<&Assignment> for WinnerRow {
    fn from(assignment: &Assignment) -> Self {
        WinnerRow {
            name: assignment.participant.given.clone(),
            lastname: assignment.participant.family.clone(),
            item: assignment.prize.clone(),
        }
    }
}

// ================================================================================================
// File kinds
// ================================================================================================

/// The three work-file kinds and their fixed shapes.
///
/// Callers select a file through this tag; headers, default names and sample
/// content all hang off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvKind {
    Participants,
    Prizes,
    Winners,
}

impl CsvKind {
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            CsvKind::Participants => PARTICIPANTS_CSV_HEADERS,
            CsvKind::Prizes => PRIZES_CSV_HEADERS,
            CsvKind::Winners => WINNERS_CSV_HEADERS,
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            CsvKind::Participants => "participants.csv",
            CsvKind::Prizes => "prizes.csv",
            CsvKind::Winners => "winners.csv",
        }
    }
}

/// Starter roster written by `write_sample_csv`.
pub fn sample_participants() -> Vec<ParticipantRow> {
    vec![
        ParticipantRow {
            name: "John".to_string(),
            lastname: "Doe".to_string(),
        },
        ParticipantRow {
            name: "Juan".to_string(),
            lastname: "Perez".to_string(),
        },
    ]
}

/// Starter prize list written by `write_sample_csv`.
pub fn sample_prizes() -> Vec<PrizeRow> {
    vec![
        PrizeRow {
            item: "Laptop".to_string(),
            qty: 1,
        },
        PrizeRow {
            item: "Keyboard".to_string(),
            qty: 1,
        },
    ]
}

// ================================================================================================
// Tests
// ================================================================================================
