//! End-of-run conditions and their status messages.

use super::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Running,
    /// The princess reached the gate.
    Escaped,
    /// The dragon touched the princess.
    Caught,
    /// Every guard is down.
    Won,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Running)
    }

    pub fn message(self, score: u32) -> String {
        match self {
            Outcome::Running => format!("Points: {score}"),
            Outcome::Escaped => format!("GAME OVER - The princess escaped! Score: {score}"),
            Outcome::Caught => format!(
                "GAME OVER - You touched the princess! She escaped in the confusion. Score: {score}"
            ),
            Outcome::Won => format!("VICTORY - All defenders fallen! Score: {score}"),
        }
    }
}

/// Check the end conditions in a fixed order: escape, contact, victory. Every
/// check runs and the last one that holds decides the outcome.
pub fn evaluate(state: &GameState) -> Outcome {
    let cfg = &state.config;
    let mut outcome = Outcome::Running;
    if state.princess.x >= cfg.gate_x {
        outcome = Outcome::Escaped;
    }
    if (state.dragon.x - state.princess.x).abs() < cfg.caught_distance {
        outcome = Outcome::Caught;
    }
    if state.guards.iter().all(|g| !g.alive) {
        outcome = Outcome::Won;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::world::Guard;

    fn state_with_guard() -> GameState {
        let mut state = GameState::empty(GameConfig::default(), 1);
        state.guards.push(Guard::new(3990.0, 280.0, 0.0));
        state
    }

    #[test]
    fn running_while_nothing_holds() {
        assert_eq!(evaluate(&state_with_guard()), Outcome::Running);
    }

    #[test]
    fn escape_and_contact() {
        let mut state = state_with_guard();
        state.princess.x = 3800.0;
        assert_eq!(evaluate(&state), Outcome::Escaped);

        state.princess.x = 1000.0;
        state.dragon.x = 1059.0;
        assert_eq!(evaluate(&state), Outcome::Caught);
        state.dragon.x = 1060.0;
        assert_eq!(evaluate(&state), Outcome::Running);
    }

    #[test]
    fn later_checks_override_earlier_ones() {
        let mut state = state_with_guard();
        state.princess.x = 3800.0;
        state.dragon.x = 3790.0;
        assert_eq!(evaluate(&state), Outcome::Caught);

        state.guards[0].alive = false;
        assert_eq!(evaluate(&state), Outcome::Won);
    }

    #[test]
    fn messages_carry_the_score() {
        assert_eq!(
            Outcome::Escaped.message(300),
            "GAME OVER - The princess escaped! Score: 300"
        );
        assert!(Outcome::Won.message(2000).ends_with("Score: 2000"));
        assert!(!Outcome::Running.is_terminal());
        assert!(Outcome::Caught.is_terminal());
    }
}
