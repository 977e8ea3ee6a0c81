//! Grid positions and the movement/collision rule

use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::Action;
use crate::error::{Error, Result};

/// A cell on the grid, `(row, col)` with both axes in `[0, size - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The fixed grid environment: dimensions, goal cell, and obstacle set.
///
/// Stateless with respect to the tokens. [`GridWorld::step`] is a total,
/// purely functional movement rule; whichever component owns the token
/// positions decides what to do with the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridWorld {
    size: usize,
    goal: Position,
    obstacles: Vec<Position>,
}

impl GridWorld {
    /// Create a grid world, validating the layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the grid is empty, the goal
    /// or an obstacle lies outside the grid, or the goal cell is itself an
    /// obstacle.
    pub fn new(size: usize, goal: Position, obstacles: Vec<Position>) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "grid size must be at least 1".to_string(),
            });
        }
        if goal.row >= size || goal.col >= size {
            return Err(Error::InvalidConfiguration {
                message: format!("goal {goal} is outside the {size}x{size} grid"),
            });
        }
        for obstacle in &obstacles {
            if obstacle.row >= size || obstacle.col >= size {
                return Err(Error::InvalidConfiguration {
                    message: format!("obstacle {obstacle} is outside the {size}x{size} grid"),
                });
            }
        }
        if obstacles.contains(&goal) {
            return Err(Error::InvalidConfiguration {
                message: format!("goal {goal} coincides with an obstacle"),
            });
        }
        Ok(GridWorld {
            size,
            goal,
            obstacles,
        })
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The goal cell.
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// The obstacle cells.
    pub fn obstacles(&self) -> &[Position] {
        &self.obstacles
    }

    pub fn is_obstacle(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    pub fn is_goal(&self, position: Position) -> bool {
        position == self.goal
    }

    /// Apply one action to a position.
    ///
    /// Each axis is clamped independently to `[0, size - 1]` (no wraparound).
    /// If the clamped destination is an obstacle the move is vetoed and the
    /// original position is returned unchanged. No other outcome exists.
    pub fn step(&self, position: Position, action: Action) -> Position {
        let (dr, dc) = action.delta();
        let row = position
            .row
            .saturating_add_signed(dr)
            .min(self.size - 1);
        let col = position
            .col
            .saturating_add_signed(dc)
            .min(self.size - 1);
        let destination = Position::new(row, col);
        if self.is_obstacle(destination) {
            position
        } else {
            destination
        }
    }
}
