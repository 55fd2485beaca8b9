use std::fs;
use std::path::{Path, PathBuf};

use raffle_csvs::CsvKind;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Raffle run configuration, stored as YAML next to the work files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaffleConfig {
    /// Participant roster, one name,lastname row per person
    pub participants_file: PathBuf,

    /// Prize list, one item,qty row per prize
    pub prizes_file: PathBuf,

    /// Where the final winners table is written
    pub winners_file: PathBuf,

    /// Recreate a missing or malformed winners file instead of failing
    pub recreate_from_winners: bool,

    /// Prize order before the draw: shuffle, ascending or descending
    #[serde(default = "default_prize_order")]
    pub prize_order: String,

    /// Delay between announced words, in milliseconds
    #[serde(default = "default_pace_ms")]
    pub pace_ms: u64,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            participants_file: PathBuf::from(CsvKind::Participants.default_file_name()),
            prizes_file: PathBuf::from(CsvKind::Prizes.default_file_name()),
            winners_file: PathBuf::from(CsvKind::Winners.default_file_name()),
            recreate_from_winners: true,
            prize_order: default_prize_order(),
            pace_ms: default_pace_ms(),
        }
    }
}

impl RaffleConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> CliResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CliError::InvalidConfig(format!(
                "config file {} not found, run `raffle init` to create one",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        let config: RaffleConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> CliResult<()> {
        let contents = serde_yaml::to_string(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

fn default_prize_order() -> String {
    "descending".to_string()
}

fn default_pace_ms() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_round_trips_through_yaml() {
        let config = RaffleConfig::default();
        let temp_file = NamedTempFile::new().unwrap();
        config.save(temp_file.path()).unwrap();

        let loaded = RaffleConfig::load(temp_file.path()).unwrap();
        assert_eq!(loaded.participants_file, config.participants_file);
        assert_eq!(loaded.prize_order, "descending");
        assert_eq!(loaded.pace_ms, 300);
    }

    #[test]
    fn test_missing_optional_fields_take_defaults() {
        let yaml = "\
participants_file: participants.csv
prizes_file: prizes.csv
winners_file: winners.csv
recreate_from_winners: true
";
        let config: RaffleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.prize_order, "descending");
        assert_eq!(config.pace_ms, 300);
    }

    #[test]
    fn test_missing_config_file_points_at_init() {
        let err = RaffleConfig::load("definitely-not-here.yaml").unwrap_err();
        assert!(err.to_string().contains("raffle init"));
    }
}
