//! Dense Q-table over (row, col, action) triples

use serde::{Deserialize, Serialize};

use crate::grid::{Action, Position};

/// Q-table mapping (cell, action) pairs to value estimates.
///
/// The state space is the fixed grid, so the table is a dense
/// `size x size x 4` array stored flat with a strided index rather than a
/// hash map; every state-action pair always has an entry, zero-initialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    values: Vec<f64>,
    grid_size: usize,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a zero-initialized Q-table for a `grid_size` x `grid_size` grid.
    pub fn new(grid_size: usize, learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: vec![0.0; grid_size * grid_size * Action::COUNT],
            grid_size,
            learning_rate,
            discount_factor,
        }
    }

    fn offset(&self, state: Position, action: Action) -> usize {
        (state.row * self.grid_size + state.col) * Action::COUNT + action.index()
    }

    /// Get the value estimate for a state-action pair.
    pub fn get(&self, state: Position, action: Action) -> f64 {
        self.values[self.offset(state, action)]
    }

    /// Set the value estimate for a state-action pair.
    pub fn set(&mut self, state: Position, action: Action, value: f64) {
        let offset = self.offset(state, action);
        self.values[offset] = value;
    }

    /// Maximum value estimate over all four actions in a state.
    pub fn max_q(&self, state: Position) -> f64 {
        Action::ALL
            .iter()
            .map(|&action| self.get(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Greedy action for a state, breaking ties by first-encountered order.
    ///
    /// Iteration follows the fixed [`Action::ALL`] index order, so among
    /// equal-valued actions the lowest-indexed one wins.
    pub fn greedy_action(&self, state: Position) -> Action {
        let mut best = Action::ALL[0];
        let mut best_q = self.get(state, best);
        for &action in &Action::ALL[1..] {
            let q = self.get(state, action);
            if q > best_q {
                best = action;
                best_q = q;
            }
        }
        best
    }

    /// Q-learning update: off-policy one-step TD control.
    ///
    /// `Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]`
    ///
    /// Mutates exactly the `(state, action)` entry; every other entry is
    /// untouched.
    pub fn update(&mut self, state: Position, action: Action, reward: f64, next_state: Position) {
        let current_q = self.get(state, action);
        let max_next_q = self.max_q(next_state);
        let td_target = reward + self.discount_factor * max_next_q;
        let td_error = td_target - current_q;
        let new_q = current_q + self.learning_rate * td_error;
        self.set(state, action, new_q);
    }

    /// Total number of entries (states x actions).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of entries that have moved off their zero initialization.
    pub fn touched_entries(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0.0).count()
    }

    /// Raw value slice in strided (row, col, action) order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
