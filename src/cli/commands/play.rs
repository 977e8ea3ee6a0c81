//! Interactive play against the learning agent

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use crate::{
    cli::output,
    config::GameConfig,
    grid::Action,
    session::{GameSession, RoundState},
};

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Random seed for reproducible agent behavior
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = GameConfig::default();
    config.seed = args.seed;
    let mut session = GameSession::new(config)?;

    println!("Race the agent to the goal (G). Obstacles (#) block moves.");
    println!("Commands: up/down/left/right (or u/d/l/r), reset, restart, quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n{}", output::render_grid(&session));
        output::print_scores(&session);
        if session.round_state().is_over() {
            println!("Round over: {}. Type 'reset' to play again.", session.round_state());
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        let input = input.trim();
        match input {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "reset" => {
                session.reset_round();
                continue;
            }
            "restart" => {
                session.reset_session();
                continue;
            }
            _ => {}
        }

        let action: Action = match input.parse() {
            Ok(action) => action,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match session.play_turn(action) {
            Ok(RoundState::HumanWon) => println!("You win the round!"),
            Ok(RoundState::AgentWon) => println!("The agent wins the round."),
            Ok(RoundState::InProgress) => {}
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
