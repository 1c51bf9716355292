//! Engine abstraction layer used by the drivers and the playout harness.
//!
//! An engine looks at a `Game` and names the square to click next. Two clicks
//! make a ply, so an engine is asked twice per move: once to select, once to
//! pick a destination.

use crate::game_state::chess_types::Square;
use crate::game_state::game::Game;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub square: Option<Square>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_square(&mut self, game: &Game) -> Result<EngineOutput, String>;
}
