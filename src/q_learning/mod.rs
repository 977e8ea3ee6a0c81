//! Tabular Q-learning: the value table and the learning agent
//!
//! This module is the one genuinely algorithmic part of the crate. The agent
//! learns a state-action value function online, one turn at a time, with no
//! model of the environment's transitions.
//!
//! ## Algorithm
//!
//! - **Policy**: ε-greedy. With probability ε the agent samples one of the
//!   four directions uniformly at random (exploration); otherwise it takes
//!   the action with the highest current estimate (exploitation).
//! - **Update**: one-step temporal difference (Q-learning, off-policy):
//!
//!   `Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]`
//!
//!   Each update bootstraps the current estimate toward the observed reward
//!   plus the discounted best value of the successor state.
//! - **Decay**: ε shrinks multiplicatively after every agent turn and floors
//!   at a minimum, so the agent keeps exploring (and the table keeps
//!   receiving corrective signal) even late in a long session.
//!
//! ## Usage Example
//!
//! ```
//! use gridrace::{grid::Position, q_learning::QLearningAgent};
//!
//! let mut agent = QLearningAgent::new(
//!     8,     // grid_size
//!     0.1,   // learning_rate
//!     0.9,   // discount_factor
//!     0.2,   // epsilon (exploration)
//!     0.999, // epsilon_decay
//!     0.05,  // min_epsilon
//! )
//! .with_seed(7);
//!
//! let state = Position::new(0, 7);
//! let action = agent.select_action(state);
//! agent.update(state, action, -0.01, Position::new(1, 7));
//! agent.decay_exploration();
//! ```

pub mod agent;
pub mod q_table;

// Public re-exports
pub use agent::QLearningAgent;
pub use q_table::QTable;
