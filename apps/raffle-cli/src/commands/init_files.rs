use std::path::PathBuf;

use raffle_csvs::{write_sample_csv, CsvKind};

use crate::config::RaffleConfig;
use crate::error::{CliError, CliResult};

/// Create the default config file and sample work files.
pub fn execute(config_path: PathBuf, force: bool) -> CliResult<()> {
    let config = RaffleConfig::default();

    if config_path.exists() && !force {
        return Err(CliError::InvalidConfig(format!(
            "{} already exists, pass --force to overwrite",
            config_path.display()
        )));
    }
    config.save(&config_path)?;
    println!("✅ Created {}", config_path.display());

    let files = [
        (CsvKind::Participants, &config.participants_file),
        (CsvKind::Prizes, &config.prizes_file),
        (CsvKind::Winners, &config.winners_file),
    ];
    for (kind, path) in files {
        if path.exists() && !force {
            println!("   Kept existing {}", path.display());
            continue;
        }
        write_sample_csv(kind, path)?;
        println!("✅ Created {} with sample content", path.display());
    }

    println!();
    println!("Edit the files, then start the draw with `raffle run`.");
    Ok(())
}
