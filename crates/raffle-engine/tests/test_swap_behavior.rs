use raffle_engine::{
    DistributionEngine, DrawOutcome, DrawSource, EngineError, Participant, Prize, PrizePool,
    WinnerLedger,
};

/// Always picks the first roster entry.
struct FirstPick;

impl DrawSource for FirstPick {
    fn next<'a>(&mut self, participants: &'a [Participant]) -> &'a Participant {
        &participants[0]
    }
}

fn remaining(pool: &PrizePool, name: &str) -> u64 {
    pool.prizes()
        .iter()
        .find(|p| p.name == name)
        .unwrap()
        .remaining
}

fn two_prize_pool() -> PrizePool {
    PrizePool::new(vec![Prize::new("Laptop", 1), Prize::new("Keyboard", 1)]).unwrap()
}

#[test]
fn test_declined_swap_changes_nothing() {
    let mut pool = two_prize_pool();
    let participants = vec![Participant::new("A", "X")];
    let mut ledger = WinnerLedger::new();

    let mut engine = DistributionEngine::new(FirstPick, |_: &str| -> bool { false });

    // First draw: A wins the Laptop outright.
    let outcome = engine
        .draw_once(&mut pool, &participants, &mut ledger)
        .unwrap()
        .unwrap();
    assert!(matches!(outcome, DrawOutcome::Awarded { .. }));

    // Second draw targets the Keyboard; A declines the trade.
    let outcome = engine
        .draw_once(&mut pool, &participants, &mut ledger)
        .unwrap()
        .unwrap();
    assert!(matches!(outcome, DrawOutcome::SwapDeclined { .. }));
    assert!(outcome.is_wasted());

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.find(&participants[0]).unwrap().prize, "Laptop");
    assert_eq!(remaining(&pool, "Keyboard"), 1);
    assert_eq!(remaining(&pool, "Laptop"), 0);
}

#[test]
fn test_accepted_swap_conserves_total_units() {
    let mut pool = two_prize_pool();
    let participants = vec![Participant::new("A", "X")];
    let mut ledger = WinnerLedger::new();

    let mut engine = DistributionEngine::new(FirstPick, |_: &str| -> bool { true });

    engine
        .draw_once(&mut pool, &participants, &mut ledger)
        .unwrap();
    let outcome = engine
        .draw_once(&mut pool, &participants, &mut ledger)
        .unwrap()
        .unwrap();

    assert_eq!(
        outcome,
        DrawOutcome::Swapped {
            participant: participants[0].clone(),
            returned: "Laptop".to_string(),
            taken: "Keyboard".to_string(),
        }
    );
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.find(&participants[0]).unwrap().prize, "Keyboard");
    assert_eq!(remaining(&pool, "Laptop"), 1);
    assert_eq!(remaining(&pool, "Keyboard"), 0);
    assert_eq!(pool.total_remaining() + ledger.len() as u64, 2);
}

#[test]
fn test_redraw_for_the_held_prize_skips_the_oracle() {
    let mut pool = PrizePool::new(vec![Prize::new("Laptop", 2)]).unwrap();
    let participants = vec![Participant::new("A", "X")];
    let mut ledger = WinnerLedger::new();

    let oracle = |prompt: &str| -> bool { panic!("unexpected swap offer: {}", prompt) };
    let mut engine = DistributionEngine::new(FirstPick, oracle);

    engine
        .draw_once(&mut pool, &participants, &mut ledger)
        .unwrap();
    let outcome = engine
        .draw_once(&mut pool, &participants, &mut ledger)
        .unwrap()
        .unwrap();

    assert!(matches!(outcome, DrawOutcome::AlreadyHeld { .. }));
    assert_eq!(remaining(&pool, "Laptop"), 1);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_missing_held_prize_aborts_the_run() {
    let mut pool = PrizePool::new(vec![Prize::new("Laptop", 1)]).unwrap();
    let participants = vec![Participant::new("A", "X")];

    // A holds a prize the pool has never seen; the swap return has nowhere
    // to put the unit back.
    let mut ledger = WinnerLedger::new();
    ledger.upsert(&participants[0], "Ghost");

    let mut engine = DistributionEngine::new(FirstPick, |_: &str| -> bool { true });
    let err = engine
        .draw_once(&mut pool, &participants, &mut ledger)
        .unwrap_err();
    assert!(matches!(err, EngineError::InconsistentState(_)));
}

#[test]
fn test_wasted_draws_retarget_the_same_prize() {
    let mut pool = two_prize_pool();
    let participants = vec![Participant::new("A", "X"), Participant::new("B", "Y")];
    let mut ledger = WinnerLedger::new();

    let mut engine = DistributionEngine::new(FirstPick, |_: &str| -> bool { false });

    engine
        .draw_once(&mut pool, &participants, &mut ledger)
        .unwrap();
    // A keeps declining; the Keyboard stays the target every time.
    for _ in 0..3 {
        let outcome = engine
            .draw_once(&mut pool, &participants, &mut ledger)
            .unwrap()
            .unwrap();
        assert_eq!(
            outcome,
            DrawOutcome::SwapDeclined {
                participant: participants[0].clone(),
                held: "Laptop".to_string(),
                offered: "Keyboard".to_string(),
            }
        );
    }
    assert_eq!(remaining(&pool, "Keyboard"), 1);
}
