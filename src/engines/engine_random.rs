//! Uniform random clicker.
//!
//! Selects a random movable piece, then a random destination for it, and is
//! used for autoplay, diagnostics, and integration testing.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game::Game;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Reproducible engine: the same seed clicks the same squares.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "TileChess Random"
    }

    fn choose_square(&mut self, game: &Game) -> Result<EngineOutput, String> {
        let mut out = EngineOutput::default();
        let square = game.random_move_with(&mut self.rng);

        match game.selected() {
            Some(piece) => out.info_lines.push(format!(
                "info string random_engine destination {square} for {piece} options {}",
                game.board().options(piece).len()
            )),
            None => out.info_lines.push(format!(
                "info string random_engine select {square} turn {}",
                game.turn().name()
            )),
        }

        out.square = Some(square);
        Ok(out)
    }
}
