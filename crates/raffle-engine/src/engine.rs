use std::fmt;

use log::{debug, info};

use crate::draw::{DecisionOracle, DrawObserver, DrawSource};
use crate::errors::{EngineError, EngineResult};
use crate::ledger::WinnerLedger;
use crate::participant::Participant;
use crate::prizes::PrizePool;

/// What a single draw did to the run state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// First win for this participant; one unit left the pool.
    Awarded { participant: Participant, prize: String },
    /// Held prize traded for the target; one unit of the old prize went back
    /// to the pool.
    Swapped {
        participant: Participant,
        returned: String,
        taken: String,
    },
    /// Swap offered and turned down; nothing changed.
    SwapDeclined {
        participant: Participant,
        held: String,
        offered: String,
    },
    /// Drawn participant already holds the target prize; nothing changed.
    AlreadyHeld { participant: Participant, prize: String },
}

impl DrawOutcome {
    /// Wasted draws change no state; the caller simply draws again.
    pub fn is_wasted(&self) -> bool {
        matches!(
            self,
            DrawOutcome::SwapDeclined { .. } | DrawOutcome::AlreadyHeld { .. }
        )
    }
}

impl fmt::Display for DrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOutcome::Awarded { participant, prize } => {
                write!(f, "{} wins the {}!", participant, prize)
            }
            DrawOutcome::Swapped {
                participant,
                returned,
                taken,
            } => write!(
                f,
                "{} traded their {} for the {}. The {} is back in the pool!",
                participant, returned, taken, returned
            ),
            DrawOutcome::SwapDeclined {
                participant, held, ..
            } => write!(f, "{} keeps their {}. Back to the draw!", participant, held),
            DrawOutcome::AlreadyHeld { participant, prize } => {
                write!(f, "{} already has a {}. Drawing again!", participant, prize)
            }
        }
    }
}

/// The distribution loop: consumes a [`PrizePool`] and produces a
/// [`WinnerLedger`], drawing participants from a [`DrawSource`] and settling
/// repeat winners through a [`DecisionOracle`].
pub struct DistributionEngine<D, O> {
    source: D,
    oracle: O,
    observer: Option<Box<dyn DrawObserver>>,
}

impl<D, O> DistributionEngine<D, O>
where
    D: DrawSource,
    O: DecisionOracle,
{
    pub fn new(source: D, oracle: O) -> Self {
        Self {
            source,
            oracle,
            observer: None,
        }
    }

    /// Attach an advisory presentation sink. Correctness never depends on it.
    pub fn with_observer(mut self, observer: Box<dyn DrawObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Run draws until no prize has units left, returning the final ledger.
    ///
    /// Total units are conserved throughout: every draw either moves one
    /// unit from the pool into the ledger, trades one unit for another, or
    /// changes nothing. An empty roster with units still to hand out is
    /// rejected up front.
    ///
    /// With fewer participants than total units the loop cannot exhaust the
    /// pool (each participant holds at most one prize), and a source that
    /// keeps picking the same holder while the oracle keeps declining will
    /// re-draw forever. Callers who need a bound drive [`Self::draw_once`]
    /// themselves.
    pub fn distribute(
        &mut self,
        pool: &mut PrizePool,
        participants: &[Participant],
    ) -> EngineResult<WinnerLedger> {
        if participants.is_empty() && pool.total_remaining() > 0 {
            return Err(EngineError::InvalidArgument(
                "cannot distribute prizes to an empty participant roster".to_string(),
            ));
        }

        let total_units = pool.total_remaining();
        info!(
            "starting distribution of {} prize units to {} participants",
            total_units,
            participants.len()
        );

        let mut ledger = WinnerLedger::new();
        let mut draws: u64 = 0;
        while let Some(outcome) = self.draw_once(pool, participants, &mut ledger)? {
            draws += 1;
            debug!("draw {}: {:?}", draws, outcome);
            debug_assert_eq!(pool.total_remaining() + ledger.len() as u64, total_units);
        }

        info!(
            "distribution finished after {} draws with {} winners",
            draws,
            ledger.len()
        );
        Ok(ledger)
    }

    /// Execute one draw against the first prize that still has units.
    ///
    /// Returns `Ok(None)` once no prize has `remaining > 0`; pool and ledger
    /// are untouched in that case. Selection restarts from the front of the
    /// pool on every call, so a wasted draw re-targets the same prize next
    /// time around.
    pub fn draw_once(
        &mut self,
        pool: &mut PrizePool,
        participants: &[Participant],
        ledger: &mut WinnerLedger,
    ) -> EngineResult<Option<DrawOutcome>> {
        let Some(target) = pool.first_available() else {
            return Ok(None);
        };
        if participants.is_empty() {
            return Err(EngineError::InvalidArgument(
                "cannot draw from an empty participant roster".to_string(),
            ));
        }
        let prize_name = pool.prizes()[target].name.clone();

        self.notify(|obs| obs.render(pool.prizes(), &*ledger));
        self.notify(|obs| obs.announce(&format!("The next prize up is... {}", prize_name)));

        let participant = self.source.next(participants).clone();
        let held = ledger.find(&participant).map(|a| a.prize.clone());

        let outcome = match held {
            None => {
                pool.take_unit(target)?;
                ledger.upsert(&participant, &prize_name);
                DrawOutcome::Awarded {
                    participant,
                    prize: prize_name,
                }
            }
            Some(held) if held == prize_name => DrawOutcome::AlreadyHeld {
                participant,
                prize: prize_name,
            },
            Some(held) => {
                let prompt = format!(
                    "{} already holds '{}'. Swap it for '{}'?",
                    participant, held, prize_name
                );
                if self.oracle.confirm(&prompt) {
                    pool.return_unit(&held)?;
                    pool.take_unit(target)?;
                    ledger.upsert(&participant, &prize_name);
                    DrawOutcome::Swapped {
                        participant,
                        returned: held,
                        taken: prize_name,
                    }
                } else {
                    DrawOutcome::SwapDeclined {
                        participant,
                        held,
                        offered: prize_name,
                    }
                }
            }
        };

        self.notify(|obs| obs.announce(&outcome.to_string()));
        Ok(Some(outcome))
    }

    fn notify<F: FnOnce(&mut dyn DrawObserver)>(&mut self, f: F) {
        if let Some(observer) = self.observer.as_deref_mut() {
            f(observer);
        }
    }
}
