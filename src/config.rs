//! Configuration surface consumed by the core.
//!
//! [`GameConfig::default`] reproduces the fixed layout and learning constants
//! of the game: an 8x8 grid, five obstacles, goal in the bottom-right corner,
//! and the Q-learning hyperparameters.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    grid::Position,
};

/// Default grid side length.
pub const DEFAULT_GRID_SIZE: usize = 8;

/// Full configuration for a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid side length
    pub grid_size: usize,
    /// The goal cell both tokens race toward
    pub goal: Position,
    /// Fixed obstacle cells
    pub obstacles: Vec<Position>,
    /// Human token starting cell
    pub human_start: Position,
    /// Agent token starting cell
    pub agent_start: Position,
    /// Learning rate α
    pub learning_rate: f64,
    /// Discount factor γ
    pub discount_factor: f64,
    /// Initial exploration rate ε
    pub initial_epsilon: f64,
    /// Multiplicative ε decay per agent turn
    pub epsilon_decay: f64,
    /// Exploration floor
    pub min_epsilon: f64,
    /// Reward for every non-terminal agent step
    pub step_reward: f64,
    /// Reward when the agent's move reaches the goal
    pub win_reward: f64,
    /// Penalty reserved for the human winning the race
    pub loss_reward: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            goal: Position::new(DEFAULT_GRID_SIZE - 1, DEFAULT_GRID_SIZE - 1),
            obstacles: vec![
                Position::new(2, 2),
                Position::new(3, 3),
                Position::new(1, 5),
                Position::new(5, 1),
                Position::new(6, 6),
            ],
            human_start: Position::new(0, 0),
            agent_start: Position::new(0, DEFAULT_GRID_SIZE - 1),
            learning_rate: 0.1,
            discount_factor: 0.9,
            initial_epsilon: 0.2,
            epsilon_decay: 0.999,
            min_epsilon: 0.05,
            step_reward: -0.01,
            win_reward: 1.0,
            loss_reward: -1.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the random seed (builder style).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration.
    ///
    /// The grid layout itself (goal and obstacles within bounds, goal off the
    /// obstacle set) is validated by [`crate::grid::GridWorld::new`]; this
    /// checks everything on top of it: start cells legal and obstacle-free,
    /// hyperparameters within range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] describing the first violation
    /// found.
    pub fn validate(&self) -> Result<()> {
        for (name, cell) in [("human start", self.human_start), ("agent start", self.agent_start)] {
            if cell.row >= self.grid_size || cell.col >= self.grid_size {
                return Err(Error::InvalidConfiguration {
                    message: format!(
                        "{name} {cell} is outside the {size}x{size} grid",
                        size = self.grid_size
                    ),
                });
            }
            // Start cells must never sit on an obstacle or resets would
            // strand a token there.
            if self.obstacles.contains(&cell) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} {cell} coincides with an obstacle"),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.learning_rate) || self.learning_rate == 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!("learning rate {} must be in (0, 1]", self.learning_rate),
            });
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            return Err(Error::InvalidConfiguration {
                message: format!("discount factor {} must be in [0, 1]", self.discount_factor),
            });
        }
        if !(0.0..=1.0).contains(&self.min_epsilon) {
            return Err(Error::InvalidConfiguration {
                message: format!("exploration floor {} must be in [0, 1]", self.min_epsilon),
            });
        }
        if self.initial_epsilon < self.min_epsilon || self.initial_epsilon > 1.0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "initial exploration rate {} must be in [{}, 1]",
                    self.initial_epsilon, self.min_epsilon
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.epsilon_decay) || self.epsilon_decay == 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!("exploration decay {} must be in (0, 1]", self.epsilon_decay),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn test_default_layout_constants() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.goal, Position::new(7, 7));
        assert_eq!(config.obstacles.len(), 5);
        assert_eq!(config.human_start, Position::new(0, 0));
        assert_eq!(config.agent_start, Position::new(0, 7));
        assert_eq!(config.initial_epsilon, 0.2);
        assert_eq!(config.min_epsilon, 0.05);
    }

    #[test]
    fn test_rejects_start_on_obstacle() {
        let config = GameConfig {
            human_start: Position::new(2, 2),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_epsilon() {
        let config = GameConfig {
            initial_epsilon: 1.5,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_epsilon: 0.01,
            ..GameConfig::default()
        };
        // Below the floor
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = GameConfig::default().with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed, Some(42));
        assert_eq!(restored.goal, config.goal);
        assert_eq!(restored.obstacles, config.obstacles);
    }
}
