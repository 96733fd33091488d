//! Round outcome evaluation

use serde::{Deserialize, Serialize};

use super::state::RoundState;

/// Verdict after a coin or enemy event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    /// Health ran out; carries the final score
    Lost(u32),
    /// Every coin collected; carries the final score
    Won(u32),
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    /// End-of-round banner text
    pub fn banner(&self) -> Option<String> {
        match self {
            Outcome::Continue => None,
            Outcome::Lost(score) => Some(format!("Game over! Your score: {}", score)),
            Outcome::Won(score) => Some(format!("You won! Your score: {}", score)),
        }
    }
}

/// Losing beats winning when health and coins run out in the same step
pub fn evaluate(state: &RoundState) -> Outcome {
    if state.health() == 0 {
        Outcome::Lost(state.score())
    } else if state.remaining_coins() == 0 {
        Outcome::Won(state.score())
    } else {
        Outcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EntityHandle;

    #[test]
    fn test_continue_while_coins_and_health_remain() {
        let state = RoundState::new(3, [EntityHandle(1)], [EntityHandle(2)]);
        assert_eq!(evaluate(&state), Outcome::Continue);
        assert!(!evaluate(&state).is_terminal());
    }

    #[test]
    fn test_lost_on_third_hit() {
        let mut state = RoundState::new(3, [EntityHandle(1)], []);
        state.increase_score();
        for hit in 1..=3 {
            state.decrease_health();
            let expected = if hit < 3 { Outcome::Continue } else { Outcome::Lost(1) };
            assert_eq!(evaluate(&state), expected);
        }
    }

    #[test]
    fn test_won_when_last_coin_removed() {
        let mut state = RoundState::new(3, [EntityHandle(1), EntityHandle(2)], []);
        state.remove_coin(EntityHandle(1));
        state.increase_score();
        assert_eq!(evaluate(&state), Outcome::Continue);
        state.remove_coin(EntityHandle(2));
        state.increase_score();
        assert_eq!(evaluate(&state), Outcome::Won(2));
    }

    #[test]
    fn test_loss_beats_win() {
        let mut state = RoundState::new(1, [EntityHandle(1)], [EntityHandle(2)]);
        state.remove_coin(EntityHandle(1));
        state.increase_score();
        state.decrease_health();
        assert_eq!(evaluate(&state), Outcome::Lost(1));
    }

    #[test]
    fn test_banners() {
        assert_eq!(Outcome::Continue.banner(), None);
        assert_eq!(
            Outcome::Lost(4).banner().as_deref(),
            Some("Game over! Your score: 4")
        );
        assert_eq!(
            Outcome::Won(7).banner().as_deref(),
            Some("You won! Your score: 7")
        );
    }
}
