//! End-to-end tests for the turn sequencer and round state machine

use gridrace::{
    Action, Error, GameConfig, GameSession, Position, RoundState, Scores,
};

/// A config whose agent never explores, so its moves are predictable.
fn greedy_config() -> GameConfig {
    GameConfig {
        initial_epsilon: 0.0,
        min_epsilon: 0.0,
        ..GameConfig::default()
    }
}

#[test]
fn full_turn_on_default_layout() {
    let mut session = GameSession::new(greedy_config()).unwrap();

    // Human (0,0) moves right
    let state = session.apply_human_move(Action::Right).unwrap();
    assert_eq!(state, RoundState::InProgress);
    assert_eq!(session.human_pos(), Position::new(0, 1));

    // Agent (0,7) takes its turn. With a zero table and no exploration the
    // greedy action is Up (first in index order), which clamps at the edge.
    let before = session.q_table().get(Position::new(0, 7), Action::Up);
    let turn = session.apply_agent_turn().unwrap();

    assert_eq!(turn.from, Position::new(0, 7));
    assert_eq!(turn.action, Action::Up);
    assert_eq!(turn.to, Position::new(0, 7));
    assert_eq!(turn.reward, -0.01);
    assert_eq!(turn.round, RoundState::InProgress);

    // The updated entry moved strictly toward the TD target
    // r + γ max_a Q(s') = -0.01 + 0.9 * 0 = -0.01
    let target = -0.01 + 0.9 * session.q_table().max_q(turn.to);
    let after = session.q_table().get(Position::new(0, 7), Action::Up);
    assert!((after - target).abs() < (before - target).abs());
    assert!((after - (-0.001)).abs() < 1e-12);
}

#[test]
fn human_win_skips_agent_turn_and_leaves_table_untouched() {
    let config = GameConfig {
        human_start: Position::new(7, 6),
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config).unwrap();
    let table_before = session.q_table().as_slice().to_vec();
    let epsilon_before = session.epsilon();

    let state = session.apply_human_move(Action::Right).unwrap();

    assert_eq!(state, RoundState::HumanWon);
    assert_eq!(session.human_pos(), Position::new(7, 7));
    assert_eq!(session.scores(), Scores { human: 1, agent: 0 });

    // The agent's turn is skipped entirely for this round: no update, no
    // exploration decay.
    assert!(matches!(session.apply_agent_turn(), Err(Error::RoundOver)));
    assert_eq!(session.epsilon(), epsilon_before);
    for (old, new) in table_before.iter().zip(session.q_table().as_slice()) {
        assert_eq!(old.to_bits(), new.to_bits());
    }
}

#[test]
fn agent_win_increments_score_and_blocks_moves() {
    // Goal directly above the agent: the greedy zero-table action (Up)
    // wins on the agent's first turn.
    let config = GameConfig {
        goal: Position::new(0, 7),
        agent_start: Position::new(1, 7),
        ..greedy_config()
    };
    let mut session = GameSession::new(config).unwrap();

    session.apply_human_move(Action::Down).unwrap();
    let turn = session.apply_agent_turn().unwrap();

    assert_eq!(turn.action, Action::Up);
    assert_eq!(turn.to, Position::new(0, 7));
    assert_eq!(turn.reward, 1.0);
    assert_eq!(turn.round, RoundState::AgentWon);
    assert_eq!(session.scores(), Scores { human: 0, agent: 1 });

    // The winning transition was learned
    let q = session.q_table().get(Position::new(1, 7), Action::Up);
    assert!((q - 0.1).abs() < 1e-12);

    assert!(matches!(
        session.apply_human_move(Action::Down),
        Err(Error::RoundOver)
    ));
}

#[test]
fn play_turn_runs_human_then_agent() {
    let mut session = GameSession::new(greedy_config()).unwrap();
    let state = session.play_turn(Action::Down).unwrap();

    assert_eq!(state, RoundState::InProgress);
    assert_eq!(session.human_pos(), Position::new(1, 0));
    // The agent moved too (greedy Up clamps in place, but the update ran)
    assert!(session.q_table().touched_entries() > 0);
}

#[test]
fn play_turn_skips_agent_when_human_wins() {
    let config = GameConfig {
        human_start: Position::new(7, 6),
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config).unwrap();
    let state = session.play_turn(Action::Right).unwrap();
    assert_eq!(state, RoundState::HumanWon);
    assert_eq!(session.q_table().touched_entries(), 0);
}

#[test]
fn reset_round_keeps_scores_epsilon_and_table() {
    let config = GameConfig {
        human_start: Position::new(7, 6),
        ..GameConfig::default()
    }
    .with_seed(11);
    let mut session = GameSession::new(config).unwrap();

    session.play_turn(Action::Right).unwrap();
    assert_eq!(session.round_state(), RoundState::HumanWon);

    session.reset_round();

    assert_eq!(session.round_state(), RoundState::InProgress);
    assert_eq!(session.human_pos(), Position::new(7, 6));
    assert_eq!(session.agent_pos(), Position::new(0, 7));
    assert_eq!(session.scores(), Scores { human: 1, agent: 0 });
}

#[test]
fn session_reset_restores_everything_but_the_table() {
    let mut session = GameSession::new(GameConfig::default().with_seed(5)).unwrap();

    // Walk the human along the obstacle-free top row and right column until
    // somebody wins; every turn also runs an agent update and decay.
    while session.round_state() == RoundState::InProgress {
        let towards = if session.human_pos().col < 7 {
            Action::Right
        } else {
            Action::Down
        };
        session.play_turn(towards).unwrap();
    }

    let table_before = session.q_table().as_slice().to_vec();
    assert!(session.epsilon() < 0.2);
    assert!(session.scores() != Scores::default());

    session.reset_session();

    assert_eq!(session.scores(), Scores::default());
    assert_eq!(session.epsilon(), 0.2);
    assert_eq!(session.human_pos(), Position::new(0, 0));
    assert_eq!(session.agent_pos(), Position::new(0, 7));
    assert_eq!(session.round_state(), RoundState::InProgress);
    // Learning persists across session restarts
    for (old, new) in table_before.iter().zip(session.q_table().as_slice()) {
        assert_eq!(old.to_bits(), new.to_bits());
    }
}

#[test]
fn invalid_config_is_rejected_at_session_creation() {
    let config = GameConfig {
        agent_start: Position::new(5, 1), // an obstacle cell
        ..GameConfig::default()
    };
    assert!(matches!(
        GameSession::new(config),
        Err(Error::InvalidConfiguration { .. })
    ));
}
