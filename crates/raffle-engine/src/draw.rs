//! Collaborator interfaces the distribution engine is driven by: where
//! random picks come from, who answers swap confirmations, and the advisory
//! presentation hooks.

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::ledger::WinnerLedger;
use crate::participant::Participant;
use crate::prizes::Prize;

/// Selects the next participant for a draw.
pub trait DrawSource {
    /// Pick one participant, uniformly at random, from the full roster.
    ///
    /// The roster is never reduced as prizes are handed out; repeat picks of
    /// someone who already holds a prize are expected.
    fn next<'a>(&mut self, participants: &'a [Participant]) -> &'a Participant;
}

/// Uniform selection backed by any `rand` RNG.
pub struct UniformDraw<R> {
    rng: R,
}

impl UniformDraw<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for UniformDraw<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformDraw<StdRng> {
    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> DrawSource for UniformDraw<R> {
    fn next<'a>(&mut self, participants: &'a [Participant]) -> &'a Participant {
        // The engine rejects empty rosters before any draw.
        participants
            .choose(&mut self.rng)
            .expect("draw from an empty roster")
    }
}

/// Answers yes/no swap confirmations. May block on interactive input.
pub trait DecisionOracle {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> DecisionOracle for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Advisory presentation hooks. The engine calls them at fixed points but
/// never depends on them; the default bodies do nothing.
pub trait DrawObserver {
    /// Called with the current pool and ledger before every draw.
    fn render(&mut self, prizes: &[Prize], ledger: &WinnerLedger) {
        let _ = (prizes, ledger);
    }

    /// Called with a short human-readable message before the draw and after
    /// the outcome is settled.
    fn announce(&mut self, message: &str) {
        let _ = message;
    }
}
