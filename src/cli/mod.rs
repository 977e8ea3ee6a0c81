//! CLI infrastructure for the gridrace binary
//!
//! This module provides the command-line interface for playing the grid race
//! interactively and for training the agent against simulated opponents.

pub mod commands;
pub mod output;
