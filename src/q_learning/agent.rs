//! The Q-learning agent: ε-greedy policy plus online TD updates

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::GameConfig,
    grid::{Action, Position},
    q_learning::q_table::QTable,
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Q-learning agent (off-policy TD control).
///
/// Owns the value table and the exploration rate. All mutation of the table
/// goes through [`QLearningAgent::update`]; the exploration rate only ever
/// shrinks within a session, via [`QLearningAgent::decay_exploration`], and
/// is restored to its initial value by [`QLearningAgent::reset_exploration`].
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    epsilon: f64,
    initial_epsilon: f64,
    epsilon_decay: f64,
    min_epsilon: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create a new Q-learning agent with a zero-initialized value table.
    ///
    /// # Arguments
    ///
    /// * `grid_size` - Side length of the (square) state space
    /// * `learning_rate` - α parameter (0.0 to 1.0)
    /// * `discount_factor` - γ parameter (0.0 to 1.0)
    /// * `epsilon` - Initial exploration rate
    /// * `epsilon_decay` - Multiplicative decay per agent turn
    /// * `min_epsilon` - Exploration floor
    pub fn new(
        grid_size: usize,
        learning_rate: f64,
        discount_factor: f64,
        epsilon: f64,
        epsilon_decay: f64,
        min_epsilon: f64,
    ) -> Self {
        Self {
            q_table: QTable::new(grid_size, learning_rate, discount_factor),
            epsilon,
            initial_epsilon: epsilon,
            epsilon_decay,
            min_epsilon,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    /// Create an agent from a game configuration, honoring its seed.
    pub fn from_config(config: &GameConfig) -> Self {
        let agent = Self::new(
            config.grid_size,
            config.learning_rate,
            config.discount_factor,
            config.initial_epsilon,
            config.epsilon_decay,
            config.min_epsilon,
        );
        match config.seed {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// ε-greedy action selection.
    ///
    /// With probability ε, a uniformly random direction; otherwise the
    /// greedy action from the value table (ties broken by index order).
    pub fn select_action(&mut self, state: Position) -> Action {
        if self.rng.random::<f64>() < self.epsilon {
            // Explore: random action
            Action::ALL[self.rng.random_range(0..Action::COUNT)]
        } else {
            // Exploit: greedy action based on Q-values
            self.q_table.greedy_action(state)
        }
    }

    /// Apply the one-step TD update for an observed transition.
    pub fn update(&mut self, state: Position, action: Action, reward: f64, next_state: Position) {
        self.q_table.update(state, action, reward, next_state);
    }

    /// Decay ε after an agent turn, flooring at the minimum.
    pub fn decay_exploration(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.min_epsilon);
    }

    /// Restore ε (and the RNG, when seeded) to initial values.
    ///
    /// The value table is deliberately left alone: learning persists across
    /// session restarts.
    pub fn reset_exploration(&mut self) {
        self.epsilon = self.initial_epsilon;
        self.reset_rng();
    }

    fn reset_rng(&mut self) {
        if let Some(seed) = self.rng_seed {
            self.rng = StdRng::seed_from_u64(seed);
        } else {
            self.rng = build_rng(None);
        }
    }

    /// Current exploration rate.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Read access to the value table.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn agent_with_epsilon(epsilon: f64) -> QLearningAgent {
        QLearningAgent::new(8, 0.1, 0.9, epsilon, 0.999, 0.0).with_seed(42)
    }

    #[test]
    fn test_zero_epsilon_is_always_greedy() {
        let mut agent = agent_with_epsilon(0.0);
        let state = Position::new(3, 3);
        agent.q_table.set(state, Action::Left, 5.0);
        for _ in 0..100 {
            assert_eq!(agent.select_action(state), Action::Left);
        }
    }

    #[test]
    fn test_full_epsilon_is_roughly_uniform() {
        let mut agent = agent_with_epsilon(1.0);
        let state = Position::new(0, 0);
        // Bias the table hard so any greedy leak would show up as a skew
        agent.q_table.set(state, Action::Up, 100.0);

        let mut counts: HashMap<Action, usize> = HashMap::new();
        let samples = 4000;
        for _ in 0..samples {
            *counts.entry(agent.select_action(state)).or_default() += 1;
        }

        for action in Action::ALL {
            let n = counts.get(&action).copied().unwrap_or(0);
            // Expect ~1000 per action; allow a generous band for the seeded RNG
            assert!(
                (700..=1300).contains(&n),
                "action {action} drawn {n} times out of {samples}"
            );
        }
    }

    #[test]
    fn test_decay_is_non_increasing_and_floors() {
        let mut agent = QLearningAgent::new(8, 0.1, 0.9, 0.2, 0.999, 0.05);
        let mut previous = agent.epsilon();
        for _ in 0..5000 {
            agent.decay_exploration();
            assert!(agent.epsilon() <= previous);
            assert!(agent.epsilon() >= 0.05);
            previous = agent.epsilon();
        }
        assert_eq!(agent.epsilon(), 0.05);
    }

    #[test]
    fn test_reset_exploration_restores_epsilon_not_table() {
        let mut agent = QLearningAgent::new(8, 0.1, 0.9, 0.2, 0.999, 0.05).with_seed(7);
        let state = Position::new(1, 1);
        agent.update(state, Action::Down, -0.01, Position::new(2, 1));
        for _ in 0..50 {
            agent.decay_exploration();
        }
        assert!(agent.epsilon() < 0.2);

        agent.reset_exploration();

        assert_eq!(agent.epsilon(), 0.2);
        assert!(agent.q_table().touched_entries() > 0);
    }
}
