/*!
# Raffle CSV Schema Definitions

This crate provides the **authoritative CSV schemas** for the three work
files a raffle run reads and writes.

## Schema Files

### Participants CSV (`participants.csv`)
The draw roster, one person per row:
- `name`: given name
- `lastname`: family name

### Prizes CSV (`prizes.csv`)
The prize list, one prize per row:
- `item`: prize name
- `qty`: units to hand out (non-negative integer)

### Winners CSV (`winners.csv`)
The exported result, one row per participant holding a prize at the end:
- `name`, `lastname`, `item`

Headers are validated in exact order. Participants and prizes files must
contain at least one row; the winners file may be empty. [`CsvKind`] maps
each file kind to its fixed headers, default file name and sample content.

## Usage

```rust
use raffle_csvs::{read_participants_csv, read_prizes_csv, CsvResult};

fn example() -> CsvResult<()> {
    let participants = read_participants_csv("participants.csv")?;
    let prizes = read_prizes_csv("prizes.csv")?;

    let units: u64 = prizes.iter().map(|p| p.qty).sum();
    println!("{} participants, {} prize units", participants.len(), units);

    Ok(())
}
```
*/

pub mod errors;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use schemas::{
    sample_participants, sample_prizes, CsvKind, ParticipantRow, PrizeRow, WinnerRow,
    PARTICIPANTS_CSV_HEADERS, PRIZES_CSV_HEADERS, WINNERS_CSV_HEADERS,
};
pub use validation::{
    read_participants_csv, read_prizes_csv, read_winners_csv, write_sample_csv, write_winners_csv,
};
