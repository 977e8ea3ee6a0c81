//! gridrace: a human-vs-agent grid navigation race
//!
//! This crate provides:
//! - A fixed 8x8 grid environment with static obstacles and a goal cell
//! - A tabular Q-learning agent (ε-greedy policy, one-step TD updates)
//! - A session/turn sequencer exposing the operations a presentation layer
//!   needs: human moves, agent turns, round state, and resets
//! - A headless training pipeline with simulated human opponents

pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod q_learning;
pub mod session;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use grid::{Action, GridWorld, Position};
pub use pipeline::{
    BeelinePolicy, HumanPolicy, RandomPolicy, TrainingConfig, TrainingPipeline, TrainingResult,
};
pub use q_learning::{QLearningAgent, QTable};
pub use session::{AgentTurn, Cell, GameSession, RoundState, Scores};
