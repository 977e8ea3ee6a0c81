//! Train the agent against a simulated human

use anyhow::Result;
use clap::Args;

use crate::{
    cli::output,
    config::GameConfig,
    pipeline::{TrainingConfig, TrainingPipeline, parse_human_policy},
    session::GameSession,
};

#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Number of rounds to simulate
    #[arg(long, default_value_t = 500)]
    pub rounds: usize,

    /// Turn cap per round before the round counts as stalled
    #[arg(long, default_value_t = 200)]
    pub max_turns: usize,

    /// Simulated human policy (random, beeline)
    #[arg(long, default_value = "random")]
    pub human: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let mut config = GameConfig::default();
    config.seed = args.seed;
    let mut session = GameSession::new(config)?;
    let mut human = parse_human_policy(&args.human, args.seed)?;

    let pipeline = TrainingPipeline::new(TrainingConfig {
        rounds: args.rounds,
        max_turns: args.max_turns,
    });

    let pb = (!args.quiet).then(|| output::create_training_progress(args.rounds as u64));
    let result = pipeline.run(&mut session, human.as_mut(), |_, _| {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    output::print_section("Training summary");
    output::print_kv("Opponent", human.name());
    output::print_kv("Rounds", &result.rounds.to_string());
    output::print_kv("Agent wins", &result.agent_wins.to_string());
    output::print_kv("Human wins", &result.human_wins.to_string());
    output::print_kv("Stalled rounds", &result.stalled.to_string());
    output::print_kv("Turns played", &result.turns_played.to_string());
    output::print_kv(
        "Final epsilon",
        &format!("{:.4}", session.epsilon()),
    );
    output::print_kv(
        "Q-entries touched",
        &format!(
            "{}/{}",
            session.q_table().touched_entries(),
            session.q_table().len()
        ),
    );

    Ok(())
}
