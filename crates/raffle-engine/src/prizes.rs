use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{EngineError, EngineResult};

/// One prize line: a name and how many units are still unclaimed.
///
/// A prize with `remaining == 0` is inert but stays in the pool so renders
/// and swap returns can still see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prize {
    pub name: String,
    pub remaining: u64,
}

impl Prize {
    pub fn new(name: impl Into<String>, remaining: u64) -> Self {
        Self {
            name: name.into(),
            remaining,
        }
    }
}

/// How the pool is arranged before distribution starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderMode {
    /// Uniform random permutation
    Shuffle,
    /// Stable sort, smallest quantity first
    Ascending,
    /// Stable sort, largest quantity first
    Descending,
}

impl FromStr for OrderMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shuffle" => Ok(OrderMode::Shuffle),
            "ascending" => Ok(OrderMode::Ascending),
            "descending" => Ok(OrderMode::Descending),
            other => Err(EngineError::InvalidArgument(format!(
                "unknown order mode '{}', expected shuffle, ascending or descending",
                other
            ))),
        }
    }
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderMode::Shuffle => "shuffle",
            OrderMode::Ascending => "ascending",
            OrderMode::Descending => "descending",
        };
        f.write_str(name)
    }
}

/// Ordered collection of prizes with mutable remaining quantities.
///
/// Only the distribution engine mutates quantities once a run has started.
#[derive(Debug, Clone)]
pub struct PrizePool {
    prizes: Vec<Prize>,
}

impl PrizePool {
    pub fn new(prizes: Vec<Prize>) -> EngineResult<Self> {
        for prize in &prizes {
            if prize.name.trim().is_empty() {
                return Err(EngineError::InvalidArgument(
                    "prize with an empty name".to_string(),
                ));
            }
        }
        Ok(Self { prizes })
    }

    /// Rearrange the pool. Identities and quantities are untouched.
    pub fn order<R: Rng>(&mut self, mode: OrderMode, rng: &mut R) {
        match mode {
            OrderMode::Shuffle => self.prizes.shuffle(rng),
            OrderMode::Ascending => self.prizes.sort_by_key(|p| p.remaining),
            OrderMode::Descending => self.prizes.sort_by(|a, b| b.remaining.cmp(&a.remaining)),
        }
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn total_remaining(&self) -> u64 {
        self.prizes.iter().map(|p| p.remaining).sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.prizes.iter().all(|p| p.remaining == 0)
    }

    /// Index of the first prize that still has units to hand out.
    pub fn first_available(&self) -> Option<usize> {
        self.prizes.iter().position(|p| p.remaining > 0)
    }

    pub(crate) fn take_unit(&mut self, index: usize) -> EngineResult<()> {
        let prize = self.prizes.get_mut(index).ok_or_else(|| {
            EngineError::InconsistentState(format!("no prize at index {}", index))
        })?;
        if prize.remaining == 0 {
            return Err(EngineError::InconsistentState(format!(
                "prize '{}' has no units left to take",
                prize.name
            )));
        }
        prize.remaining -= 1;
        Ok(())
    }

    pub(crate) fn return_unit(&mut self, name: &str) -> EngineResult<()> {
        let prize = self
            .prizes
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| {
                EngineError::InconsistentState(format!(
                    "prize '{}' is no longer in the pool",
                    name
                ))
            })?;
        prize.remaining += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_pool(quantities: &[(&str, u64)]) -> PrizePool {
        PrizePool::new(
            quantities
                .iter()
                .map(|(name, qty)| Prize::new(*name, *qty))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_ascending_order_is_non_decreasing() {
        let mut pool = make_pool(&[("a", 3), ("b", 1), ("c", 2)]);
        pool.order(OrderMode::Ascending, &mut StdRng::seed_from_u64(0));
        let quantities: Vec<u64> = pool.prizes().iter().map(|p| p.remaining).collect();
        assert_eq!(quantities, vec![1, 2, 3]);
    }

    #[test]
    fn test_descending_order_is_non_increasing() {
        let mut pool = make_pool(&[("a", 3), ("b", 1), ("c", 2)]);
        pool.order(OrderMode::Descending, &mut StdRng::seed_from_u64(0));
        let quantities: Vec<u64> = pool.prizes().iter().map(|p| p.remaining).collect();
        assert_eq!(quantities, vec![3, 2, 1]);
    }

    #[test]
    fn test_sorts_are_stable_for_equal_quantities() {
        let mut pool = make_pool(&[("first", 1), ("second", 1), ("third", 1)]);
        pool.order(OrderMode::Ascending, &mut StdRng::seed_from_u64(0));
        let names: Vec<&str> = pool.prizes().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);

        pool.order(OrderMode::Descending, &mut StdRng::seed_from_u64(0));
        let names: Vec<&str> = pool.prizes().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut pool = make_pool(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        let mut before: Vec<Prize> = pool.prizes().to_vec();
        pool.order(OrderMode::Shuffle, &mut StdRng::seed_from_u64(7));
        let mut after: Vec<Prize> = pool.prizes().to_vec();

        before.sort_by(|a, b| a.name.cmp(&b.name));
        after.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(before, after);
    }

    #[test]
    fn test_unknown_order_mode_is_rejected() {
        let err = "high-low".parse::<OrderMode>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
        assert_eq!("shuffle".parse::<OrderMode>().unwrap(), OrderMode::Shuffle);
    }

    #[test]
    fn test_first_available_skips_exhausted_prizes() {
        let pool = make_pool(&[("a", 0), ("b", 0), ("c", 2)]);
        assert_eq!(pool.first_available(), Some(2));
        assert!(!pool.is_exhausted());

        let empty = make_pool(&[("a", 0)]);
        assert_eq!(empty.first_available(), None);
        assert!(empty.is_exhausted());
    }

    #[test]
    fn test_take_and_return_preserve_accounting() {
        let mut pool = make_pool(&[("a", 2), ("b", 1)]);
        assert_eq!(pool.total_remaining(), 3);

        pool.take_unit(0).unwrap();
        assert_eq!(pool.total_remaining(), 2);

        pool.return_unit("a").unwrap();
        assert_eq!(pool.total_remaining(), 3);

        let err = pool.return_unit("missing").unwrap_err();
        assert!(matches!(err, EngineError::InconsistentState(_)));
    }

    #[test]
    fn test_empty_prize_name_is_rejected() {
        let err = PrizePool::new(vec![Prize::new("  ", 1)]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }
}
