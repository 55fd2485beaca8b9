use std::path::PathBuf;

use raffle_csvs::{read_participants_csv, read_prizes_csv, read_winners_csv};
use raffle_engine::OrderMode;

use crate::config::RaffleConfig;
use crate::error::CliResult;

/// Validate the config file and the shape of the three work files.
pub fn execute(config_path: PathBuf) -> CliResult<()> {
    println!("Checking {}...", config_path.display());
    let config = RaffleConfig::load(&config_path)?;
    config.prize_order.parse::<OrderMode>()?;
    println!("✅ config OK, prize order '{}'", config.prize_order);

    let participants = read_participants_csv(&config.participants_file)?;
    println!(
        "✅ {}: {} participants",
        config.participants_file.display(),
        participants.len()
    );

    let prizes = read_prizes_csv(&config.prizes_file)?;
    let units: u64 = prizes.iter().map(|p| p.qty).sum();
    println!(
        "✅ {}: {} prizes, {} units",
        config.prizes_file.display(),
        prizes.len(),
        units
    );

    let winners = read_winners_csv(&config.winners_file)?;
    println!(
        "✅ {}: {} winner rows",
        config.winners_file.display(),
        winners.len()
    );

    if (participants.len() as u64) < units {
        println!(
            "⚠️  only {} participants for {} units; the draw cannot finish until the prize list shrinks",
            participants.len(),
            units
        );
    }

    println!("All good.");
    Ok(())
}
