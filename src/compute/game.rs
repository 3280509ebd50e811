//! Two-player social games scoring cooperation strategies.

use rand::Rng;

use crate::schema::GameKind;

/// The four payoff constants of a symmetric 2x2 game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payoffs {
    /// Defecting against a cooperator.
    pub temptation: f64,
    /// Mutual cooperation.
    pub reward: f64,
    /// Mutual defection.
    pub punishment: f64,
    /// Cooperating against a defector.
    pub sucker: f64,
}

impl GameKind {
    /// Payoff constants of this game.
    pub fn payoffs(self) -> Payoffs {
        let (temptation, reward, punishment, sucker) = match self {
            GameKind::None => (0.0, 0.0, 0.0, 0.0),
            GameKind::PrisonersDilemma => (5.0, 3.0, 1.0, 0.0),
            GameKind::HawkDove => (5.0, 3.0, 0.0, 1.0),
            GameKind::StagHunt => (3.0, 5.0, 1.0, 0.0),
            GameKind::Harmonic => (1.0, 5.0, 0.0, 3.0),
        };
        Payoffs {
            temptation,
            reward,
            punishment,
            sucker,
        }
    }
}

/// A pure strategy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Cooperate,
    Defect,
}

impl Choice {
    #[inline]
    fn index(self) -> usize {
        match self {
            Choice::Cooperate => 0,
            Choice::Defect => 1,
        }
    }
}

/// Immutable payoff matrix shared by every evaluation in a run.
#[derive(Debug, Clone)]
pub struct Game {
    kind: GameKind,
    /// `matrix[row][col]` holds (row payoff, column payoff).
    matrix: [[(f64, f64); 2]; 2],
}

impl Game {
    /// Build the payoff matrix for a game.
    pub fn new(kind: GameKind) -> Self {
        let Payoffs {
            temptation: t,
            reward: r,
            punishment: p,
            sucker: s,
        } = kind.payoffs();

        Self {
            kind,
            matrix: [[(r, r), (s, t)], [(t, s), (p, p)]],
        }
    }

    /// The game this matrix was built from.
    pub fn kind(&self) -> GameKind {
        self.kind
    }

    /// Payoffs for a pair of pure choices.
    #[inline]
    pub fn payoff(&self, row: Choice, col: Choice) -> (f64, f64) {
        self.matrix[row.index()][col.index()]
    }

    /// Play one round: each player independently cooperates with its own probability.
    pub fn play<R: Rng + ?Sized>(&self, p1_coop: f64, p2_coop: f64, rng: &mut R) -> (f64, f64) {
        let row = choose(p1_coop, rng);
        let col = choose(p2_coop, rng);
        self.payoff(row, col)
    }
}

fn choose<R: Rng + ?Sized>(coop_prob: f64, rng: &mut R) -> Choice {
    if rng.r#gen::<f64>() < coop_prob {
        Choice::Cooperate
    } else {
        Choice::Defect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_prisoners_dilemma_matrix() {
        let game = Game::new(GameKind::PrisonersDilemma);
        assert_eq!(game.payoff(Choice::Cooperate, Choice::Cooperate), (3.0, 3.0));
        assert_eq!(game.payoff(Choice::Cooperate, Choice::Defect), (0.0, 5.0));
        assert_eq!(game.payoff(Choice::Defect, Choice::Cooperate), (5.0, 0.0));
        assert_eq!(game.payoff(Choice::Defect, Choice::Defect), (1.0, 1.0));
    }

    #[test]
    fn test_named_variants() {
        let hd = GameKind::HawkDove.payoffs();
        assert_eq!((hd.temptation, hd.reward, hd.punishment, hd.sucker), (5.0, 3.0, 0.0, 1.0));
        let sh = GameKind::StagHunt.payoffs();
        assert_eq!((sh.temptation, sh.reward, sh.punishment, sh.sucker), (3.0, 5.0, 1.0, 0.0));
        let hg = GameKind::Harmonic.payoffs();
        assert_eq!((hg.temptation, hg.reward, hg.punishment, hg.sucker), (1.0, 5.0, 0.0, 3.0));
    }

    #[test]
    fn test_neutral_game_pays_nothing() {
        let game = Game::new(GameKind::None);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let p1 = rng.r#gen::<f64>();
            let p2 = rng.r#gen::<f64>();
            assert_eq!(game.play(p1, p2, &mut rng), (0.0, 0.0));
        }
    }

    #[test]
    fn test_extreme_probabilities_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        for kind in GameKind::ALL {
            let game = Game::new(kind);
            let p = kind.payoffs();
            for _ in 0..100 {
                assert_eq!(game.play(1.0, 1.0, &mut rng), (p.reward, p.reward));
                assert_eq!(game.play(0.0, 0.0, &mut rng), (p.punishment, p.punishment));
                assert_eq!(game.play(1.0, 0.0, &mut rng), (p.sucker, p.temptation));
                assert_eq!(game.play(0.0, 1.0, &mut rng), (p.temptation, p.sucker));
            }
        }
    }

    #[test]
    fn test_mixed_strategy_hits_every_cell() {
        let game = Game::new(GameKind::PrisonersDilemma);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let (a, b) = game.play(0.5, 0.5, &mut rng);
            seen.insert((a as i64, b as i64));
        }
        assert_eq!(seen.len(), 4);
    }
}
