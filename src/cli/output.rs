//! Output formatting and progress bars for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    grid::Position,
    session::{Cell, GameSession},
};

/// Create a progress bar for a training run
pub fn create_training_progress(total_rounds: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_rounds);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rounds ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Render the session grid as ASCII art.
///
/// `H` human, `A` agent, `G` goal, `#` obstacle, `.` empty.
pub fn render_grid(session: &GameSession) -> String {
    let size = session.world().size();
    let mut out = String::with_capacity(size * (2 * size + 1));
    for row in 0..size {
        for col in 0..size {
            let glyph = match session.cell(Position::new(row, col)) {
                Cell::Human => 'H',
                Cell::Agent => 'A',
                Cell::Goal => 'G',
                Cell::Obstacle => '#',
                Cell::Empty => '.',
            };
            out.push(glyph);
            if col + 1 < size {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the score line for a session
pub fn print_scores(session: &GameSession) {
    let scores = session.scores();
    println!(
        "Human {human} : {agent} Agent   (epsilon {epsilon:.3})",
        human = scores.human,
        agent = scores.agent,
        epsilon = session.epsilon()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::GameConfig, session::GameSession};

    #[test]
    fn test_render_grid_marks_all_cells() {
        let session = GameSession::new(GameConfig::default()).unwrap();
        let rendered = render_grid(&session);
        assert_eq!(rendered.lines().count(), 8);
        assert_eq!(rendered.matches('H').count(), 1);
        assert_eq!(rendered.matches('A').count(), 1);
        assert_eq!(rendered.matches('G').count(), 1);
        assert_eq!(rendered.matches('#').count(), 5);
    }
}
