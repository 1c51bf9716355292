//! Minimal head-to-head engine playout harness for local testing.
//!
//! This module drives two `Engine` implementations click by click through a
//! `Game` until it ends or a ply cap is reached. It replaces a UI autoplay
//! timer with a plain synchronous loop.

use std::time::Instant;

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::game_state::game::{ActivateResult, Game, GameOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Clicks an engine may spend on one ply before the match is aborted.
    pub max_clicks_per_ply: u8,
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            max_clicks_per_ply: 8,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_game: Game,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} white_moves={} black_moves={} white_ms={:.3} black_ms={:.3}",
            self.outcome,
            self.final_game.move_index(),
            self.white_move_count,
            self.black_move_count,
            self.white_total_time_ns as f64 / 1_000_000.0,
            self.black_total_time_ns as f64 / 1_000_000.0
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} white_wins={} black_wins={} draws={}",
            self.games, self.white_wins, self.black_wins, self.draws
        )
    }
}

/// Terminal outcome of `game` as it stands, if any.
pub fn game_over(game: &Game) -> Option<MatchOutcome> {
    match game.move_result_state().outcome() {
        GameOutcome::Ongoing => None,
        GameOutcome::Stalemate => Some(MatchOutcome::DrawStalemate),
        GameOutcome::Checkmate {
            winner: Color::Light,
        } => Some(MatchOutcome::WhiteWinCheckmate),
        GameOutcome::Checkmate { winner: Color::Dark } => Some(MatchOutcome::BlackWinCheckmate),
    }
}

/// Play `start` out between two engines.
///
/// `engine_white` clicks for Light, `engine_black` for Dark.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start: Game,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();

    let mut game = start;
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if let Some(outcome) = game_over(&game) {
            return Ok(MatchResult {
                outcome,
                final_game: game,
                white_move_count,
                black_move_count,
                white_total_time_ns,
                black_total_time_ns,
            });
        }

        let mover = game.turn();
        let engine: &mut dyn Engine = match mover {
            Color::Light => &mut *engine_white,
            Color::Dark => &mut *engine_black,
        };

        let started = Instant::now();
        play_one_ply(engine, &mut game, config)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }
    }

    Ok(MatchResult {
        outcome: game_over(&game).unwrap_or(MatchOutcome::DrawMaxPlies),
        final_game: game,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

fn play_one_ply(engine: &mut dyn Engine, game: &mut Game, config: &MatchConfig) -> Result<(), String> {
    for _ in 0..config.max_clicks_per_ply {
        let out = engine.choose_square(game)?;
        if config.verbose {
            for line in &out.info_lines {
                println!("{line}");
            }
        }

        let square = out
            .square
            .ok_or_else(|| format!("{} returned no square", engine.name()))?;
        match game.activate(square) {
            ActivateResult::Move { .. } | ActivateResult::Capture { .. } => {
                if config.verbose {
                    if let Some(record) = game.move_log().last() {
                        println!("info string ply {} {record}", game.move_index());
                    }
                }
                return Ok(());
            }
            ActivateResult::Touch { .. } | ActivateResult::Cancel | ActivateResult::Invalid => {}
        }
    }

    Err(format!(
        "{} did not complete a ply within {} clicks",
        engine.name(),
        config.max_clicks_per_ply
    ))
}

/// Seeded random-vs-random playout from `start`.
pub fn play_random_game(start: Game, seed: u64, config: &MatchConfig) -> Result<MatchResult, String> {
    let mut white = RandomEngine::new(seed);
    let mut black = RandomEngine::new(seed ^ 0xA5A5_5A5A_0123_4567);
    play_engine_match(&mut white, &mut black, start, config)
}

/// Play `games` seeded random playouts from `start` and tally the outcomes.
pub fn play_random_series(
    start: &Game,
    games: u16,
    base_seed: u64,
    config: &MatchConfig,
) -> Result<MatchSeriesStats, String> {
    let mut stats = MatchSeriesStats {
        games,
        ..MatchSeriesStats::default()
    };

    for i in 0..games {
        let seed = base_seed.wrapping_add(u64::from(i));
        let result = play_random_game(start.clone(), seed, config)?;
        match result.outcome {
            MatchOutcome::WhiteWinCheckmate => stats.white_wins += 1,
            MatchOutcome::BlackWinCheckmate => stats.black_wins += 1,
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);

        if config.verbose {
            println!(
                "[series] game {}/{} seed={} {}",
                i + 1,
                games,
                seed,
                result.report()
            );
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::{
        game_over, play_engine_match, play_random_game, play_random_series, MatchConfig,
        MatchOutcome,
    };
    use crate::engines::engine_trait::{Engine, EngineOutput};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game::Game;

    struct StubbornEngine;

    impl Engine for StubbornEngine {
        fn name(&self) -> &str {
            "Stubborn"
        }

        fn choose_square(&mut self, _game: &Game) -> Result<EngineOutput, String> {
            Ok(EngineOutput {
                square: Some("A1".parse().map_err(|e| format!("{e}"))?),
                info_lines: Vec::new(),
            })
        }
    }

    #[test]
    fn random_playout_is_reproducible_and_bounded() {
        let config = MatchConfig {
            max_plies: 60,
            ..MatchConfig::default()
        };
        let first = play_random_game(Game::standard(), 9, &config).expect("playout should run");
        let second = play_random_game(Game::standard(), 9, &config).expect("playout should run");

        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.final_game.move_log(), second.final_game.move_log());
        assert!(first.final_game.move_index() <= 60);
        assert_eq!(
            first.white_move_count + first.black_move_count,
            first.final_game.move_index()
        );
        assert!(first.final_game.board().is_consistent());
    }

    #[test]
    fn finished_positions_end_immediately() {
        let game = Game::from_short_code("E1,E8", Color::Light).expect("code parses");
        assert_eq!(game_over(&game), Some(MatchOutcome::DrawStalemate));

        let result = play_random_game(game, 1, &MatchConfig::default()).expect("playout should run");
        assert_eq!(result.outcome, MatchOutcome::DrawStalemate);
        assert_eq!(result.final_game.move_index(), 0);
    }

    #[test]
    fn engine_that_never_moves_is_an_error() {
        let mut white = StubbornEngine;
        let mut black = StubbornEngine;
        let err = play_engine_match(&mut white, &mut black, Game::standard(), &MatchConfig::default())
            .expect_err("A1 never produces a ply");
        assert!(err.contains("Stubborn"));
    }

    #[test]
    fn series_tallies_every_game() {
        let config = MatchConfig {
            max_plies: 20,
            ..MatchConfig::default()
        };
        let stats = play_random_series(&Game::standard(), 3, 100, &config).expect("series should run");
        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.white_wins + stats.black_wins + stats.draws, 3);
    }
}
