use crate::participant::Participant;

/// A participant and the prize they currently hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub participant: Participant,
    pub prize: String,
}

/// The (participant, prize) assignments of a run, at most one per
/// participant. A swap replaces the held prize in place, so the ledger is a
/// mapping rather than an append-only log. Entries keep insertion order for
/// export.
#[derive(Debug, Clone, Default)]
pub struct WinnerLedger {
    entries: Vec<Assignment>,
}

impl WinnerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact match on the (given, family) pair.
    pub fn find(&self, participant: &Participant) -> Option<&Assignment> {
        self.entries.iter().find(|a| &a.participant == participant)
    }

    /// Insert a fresh assignment, or replace the held prize if one exists.
    pub fn upsert(&mut self, participant: &Participant, prize: &str) {
        match self
            .entries
            .iter_mut()
            .find(|a| &a.participant == participant)
        {
            Some(entry) => entry.prize = prize.to_string(),
            None => self.entries.push(Assignment {
                participant: participant.clone(),
                prize: prize.to_string(),
            }),
        }
    }

    pub fn entries(&self) -> &[Assignment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
