use std::fmt;

/// A person eligible to win, identified by the (given, family) name pair.
///
/// The pair is assumed unique within a run; duplicate rows in the roster are
/// legal but share one ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    pub given: String,
    pub family: String,
}

impl Participant {
    pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            family: family.into(),
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given, self.family)
    }
}
