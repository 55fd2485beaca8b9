/*!
# Raffle Distribution Engine

Core state machine for an interactive prize draw: prizes with remaining
quantities are handed out one unit at a time to randomly drawn participants
until every quantity reaches zero.

## Pieces

- [`PrizePool`]: ordered prizes with mutable remaining quantities, arranged
  up front by an [`OrderMode`] (shuffle / ascending / descending).
- [`WinnerLedger`]: at most one (participant, prize) assignment per
  participant; a swap replaces the held prize in place.
- [`DistributionEngine`]: the draw loop. A participant who already holds a
  different prize is offered a swap; accepting returns one unit of the old
  prize to the pool. Declined swaps and repeat draws of the same prize are
  wasted draws, not errors.

The engine is driven through injected collaborators: a [`DrawSource`] for
random picks, a [`DecisionOracle`] for swap confirmations, and an optional
[`DrawObserver`] for presentation. Yes/no closures work as oracles directly.

## Invariant

At every observation point, pool units plus ledger entries equal the initial
unit count. Swaps trade units; only first-time awards consume them.

## Usage

```rust
use raffle_engine::{
    DistributionEngine, EngineResult, Participant, Prize, PrizePool, UniformDraw,
};

fn example() -> EngineResult<()> {
    let mut pool = PrizePool::new(vec![Prize::new("Laptop", 1), Prize::new("Keyboard", 2)])?;
    let participants = vec![
        Participant::new("John", "Doe"),
        Participant::new("Juan", "Perez"),
        Participant::new("Jane", "Roe"),
    ];

    let mut engine = DistributionEngine::new(UniformDraw::seeded(42), |_prompt: &str| true);
    let ledger = engine.distribute(&mut pool, &participants)?;

    assert_eq!(ledger.len(), 3);
    Ok(())
}
```
*/

pub mod draw;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod participant;
pub mod prizes;

pub use draw::{DecisionOracle, DrawObserver, DrawSource, UniformDraw};
pub use engine::{DistributionEngine, DrawOutcome};
pub use errors::{EngineError, EngineResult};
pub use ledger::{Assignment, WinnerLedger};
pub use participant::Participant;
pub use prizes::{OrderMode, Prize, PrizePool};
