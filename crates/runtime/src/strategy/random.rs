use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use game_core::BoxedAction;

use super::{SelectActionStrategy, SelectionContext, SelectionError};

/// Picks uniformly among the legal actions.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: SmallRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeded variant for deterministic tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectActionStrategy for RandomStrategy {
    fn select(
        &mut self,
        mut actions: Vec<BoxedAction>,
        _ctx: &SelectionContext<'_>,
    ) -> Result<BoxedAction, SelectionError> {
        if actions.is_empty() {
            return Err(SelectionError::Failed("empty action set".to_string()));
        }
        let index = self.rng.gen_range(0..actions.len());
        Ok(actions.swap_remove(index))
    }

    fn name(&self) -> &'static str {
        "random"
    }

    fn description(&self) -> &'static str {
        "Picks uniformly among the legal actions"
    }
}
