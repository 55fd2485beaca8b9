use std::path::PathBuf;

use raffle_csvs::{
    read_participants_csv, read_prizes_csv, read_winners_csv, write_sample_csv, write_winners_csv,
    CsvKind, WinnerRow,
};
use raffle_engine::{
    DistributionEngine, OrderMode, Participant, Prize, PrizePool, UniformDraw, WinnerLedger,
};

use crate::config::RaffleConfig;
use crate::console::{ConsoleOracle, ConsolePresenter};
use crate::error::CliResult;

/// Load the work files, run the interactive draw, export the winners.
pub fn execute(config_path: PathBuf, order_override: Option<String>, fast: bool) -> CliResult<()> {
    let config = RaffleConfig::load(&config_path)?;
    let pace_ms = if fast { 0 } else { config.pace_ms };

    let presenter = ConsolePresenter::new(pace_ms, !fast);
    presenter.banner("WELCOME TO THE RAFFLE");

    let participant_rows = read_participants_csv(&config.participants_file)?;
    let prize_rows = read_prizes_csv(&config.prizes_file)?;
    prepare_winners_file(&config)?;

    let participants: Vec<Participant> = participant_rows
        .into_iter()
        .map(Participant::from)
        .collect();
    let prizes: Vec<Prize> = prize_rows.into_iter().map(Prize::from).collect();
    let mut pool = PrizePool::new(prizes)?;

    let order: OrderMode = order_override
        .as_deref()
        .unwrap_or(&config.prize_order)
        .parse()?;
    pool.order(order, &mut rand::thread_rng());

    println!(
        "{} participants, {} prize units, {} order",
        participants.len(),
        pool.total_remaining(),
        order
    );
    if (participants.len() as u64) < pool.total_remaining() {
        println!(
            "⚠️  fewer participants than prize units; the pool cannot empty, stop the draw with ctrl-c when you are done"
        );
    }
    presenter.announce_paced("The draw starts in...");
    presenter.announce_paced("3 2 1 Go");

    let observer = ConsolePresenter::new(pace_ms, !fast);
    let mut engine = DistributionEngine::new(UniformDraw::new(), ConsoleOracle)
        .with_observer(Box::new(observer));
    let ledger = engine.distribute(&mut pool, &participants)?;

    export_winners(&config, &ledger)?;

    presenter.banner("RAFFLE RESULTS");
    presenter.print_winners(&ledger);
    println!();
    println!("🎉 Congratulations to all winners!");
    println!(
        "Winners written to {} at {}",
        config.winners_file.display(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}

/// The winners file only has to be well-formed; a previous run's content is
/// overwritten at export time. When the config allows it, a missing or
/// malformed file is reset to the blank template instead of failing.
fn prepare_winners_file(config: &RaffleConfig) -> CliResult<()> {
    match read_winners_csv(&config.winners_file) {
        Ok(_) => Ok(()),
        Err(err) if config.recreate_from_winners => {
            log::warn!("resetting winners file: {}", err);
            write_sample_csv(CsvKind::Winners, &config.winners_file)?;
            println!(
                "Reset {} to a blank winners table",
                config.winners_file.display()
            );
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn export_winners(config: &RaffleConfig, ledger: &WinnerLedger) -> CliResult<()> {
    let rows: Vec<WinnerRow> = ledger.entries().iter().map(WinnerRow::from).collect();
    write_winners_csv(&config.winners_file, &rows)?;
    Ok(())
}
