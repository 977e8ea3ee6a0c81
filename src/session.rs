//! Session state and the turn sequencer.
//!
//! [`GameSession`] owns everything mutable for one running session: both
//! token positions, the scores, the round state machine, and the learning
//! agent. The presentation layer drives it through four operations:
//! [`GameSession::apply_human_move`], [`GameSession::apply_agent_turn`],
//! [`GameSession::round_state`], and the two resets. Everything runs
//! synchronously within the calling turn; there is no background work.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    config::GameConfig,
    error::{Error, Result},
    grid::{Action, GridWorld, Position},
    q_learning::{QLearningAgent, QTable},
};

/// State of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    HumanWon,
    AgentWon,
}

impl RoundState {
    pub fn is_over(self) -> bool {
        self != RoundState::InProgress
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundState::InProgress => "in progress",
            RoundState::HumanWon => "human won",
            RoundState::AgentWon => "agent won",
        };
        write!(f, "{s}")
    }
}

/// Round-win counters, reset only by a full session reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub human: u32,
    pub agent: u32,
}

/// What happened during one agent turn, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentTurn {
    /// Action the policy selected
    pub action: Action,
    /// Position before the move
    pub from: Position,
    /// Position after the (possibly vetoed) move
    pub to: Position,
    /// Reward fed into the value-table update
    pub reward: f64,
    /// Round state after the turn
    pub round: RoundState,
}

/// What a cell contains, for rendering. Precedence when tokens overlap:
/// human over agent over goal over obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Human,
    Agent,
    Goal,
    Obstacle,
    Empty,
}

/// One session of the grid race: environment, tokens, scores, and agent.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    world: GridWorld,
    agent: QLearningAgent,
    human_pos: Position,
    agent_pos: Position,
    scores: Scores,
    round: RoundState,
}

impl GameSession {
    /// Create a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the configuration fails
    /// validation.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let world = GridWorld::new(config.grid_size, config.goal, config.obstacles.clone())?;
        let agent = QLearningAgent::from_config(&config);
        Ok(Self {
            human_pos: config.human_start,
            agent_pos: config.agent_start,
            world,
            agent,
            scores: Scores::default(),
            round: RoundState::InProgress,
            config,
        })
    }

    /// Create a session with the default layout and constants.
    pub fn with_defaults() -> Result<Self> {
        Self::new(GameConfig::default())
    }

    /// Apply one human move.
    ///
    /// If the move lands on the goal the round transitions to
    /// [`RoundState::HumanWon`], the human score increments, and the agent's
    /// turn for this round is skipped entirely (no update, no decay).
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoundOver`] if the round has already ended.
    pub fn apply_human_move(&mut self, action: Action) -> Result<RoundState> {
        if self.round.is_over() {
            return Err(Error::RoundOver);
        }
        self.human_pos = self.world.step(self.human_pos, action);
        if self.world.is_goal(self.human_pos) {
            self.scores.human += 1;
            self.round = RoundState::HumanWon;
        }
        Ok(self.round)
    }

    /// Run one agent turn: select, move, reward, learn, decay.
    ///
    /// The reward is `win_reward` when the resolved move lands on the goal
    /// (the round then transitions to [`RoundState::AgentWon`] and the agent
    /// score increments) and `step_reward` otherwise. The value-table update
    /// and the exploration decay run on every agent turn, winning or not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoundOver`] if the round has already ended. In
    /// particular a human win skips the agent turn for that round.
    pub fn apply_agent_turn(&mut self) -> Result<AgentTurn> {
        if self.round.is_over() {
            return Err(Error::RoundOver);
        }
        let from = self.agent_pos;
        let action = self.agent.select_action(from);
        let to = self.world.step(from, action);

        let reward = if self.world.is_goal(to) {
            self.scores.agent += 1;
            self.round = RoundState::AgentWon;
            self.config.win_reward
        } else {
            self.config.step_reward
        };

        self.agent.update(from, action, reward, to);
        self.agent_pos = to;
        self.agent.decay_exploration();

        Ok(AgentTurn {
            action,
            from,
            to,
            reward,
            round: self.round,
        })
    }

    /// Run one full turn: the human move, then the agent's turn if the
    /// round is still in progress.
    pub fn play_turn(&mut self, action: Action) -> Result<RoundState> {
        if self.apply_human_move(action)?.is_over() {
            return Ok(self.round);
        }
        let turn = self.apply_agent_turn()?;
        Ok(turn.round)
    }

    /// Reset the round: tokens back to their start cells, round back to
    /// [`RoundState::InProgress`]. Scores, exploration rate, and the value
    /// table are untouched.
    pub fn reset_round(&mut self) {
        self.human_pos = self.config.human_start;
        self.agent_pos = self.config.agent_start;
        self.round = RoundState::InProgress;
    }

    /// Full session reset: round reset plus scores to zero and the
    /// exploration rate back to its initial value.
    ///
    /// The value table is deliberately not cleared, so the agent keeps what
    /// it has learned across session restarts.
    pub fn reset_session(&mut self) {
        self.reset_round();
        self.scores = Scores::default();
        self.agent.reset_exploration();
    }

    pub fn round_state(&self) -> RoundState {
        self.round
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn human_pos(&self) -> Position {
        self.human_pos
    }

    pub fn agent_pos(&self) -> Position {
        self.agent_pos
    }

    pub fn epsilon(&self) -> f64 {
        self.agent.epsilon()
    }

    pub fn q_table(&self) -> &QTable {
        self.agent.q_table()
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Classify a cell for rendering.
    pub fn cell(&self, position: Position) -> Cell {
        if position == self.human_pos {
            Cell::Human
        } else if position == self.agent_pos {
            Cell::Agent
        } else if self.world.is_goal(position) {
            Cell::Goal
        } else if self.world.is_obstacle(position) {
            Cell::Obstacle
        } else {
            Cell::Empty
        }
    }
}
