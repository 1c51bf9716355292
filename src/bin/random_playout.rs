//! Seeded random-vs-random playout runner.
//!
//! Usage:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --seed 7 --plies 200 --verbose`
//! `cargo run --release --bin random_playout -- --code E1,E8,A2A7 --games 20`

use tile_chess::game_state::chess_rules::STARTING_POSITION_SHORT_CODE;
use tile_chess::game_state::chess_types::Color;
use tile_chess::game_state::game::Game;
use tile_chess::utils::engine_match_harness::{play_random_game, play_random_series, MatchConfig};
use tile_chess::utils::move_log::{result_token, write_move_log};

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn parse_arg_str(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn main() -> Result<(), String> {
    let seed = parse_arg_u64("--seed", 0);
    let games = u16::try_from(parse_arg_u64("--games", 1).max(1)).unwrap_or(u16::MAX);
    let code = parse_arg_str("--code").unwrap_or_else(|| STARTING_POSITION_SHORT_CODE.to_owned());
    let config = MatchConfig {
        max_plies: u16::try_from(parse_arg_u64("--plies", 300)).unwrap_or(u16::MAX),
        verbose: has_flag("--verbose"),
        ..MatchConfig::default()
    };

    let start = Game::from_short_code(&code, Color::Light).map_err(|e| e.to_string())?;

    if games > 1 {
        let stats = play_random_series(&start, games, seed, &config)?;
        println!("{}", stats.report());
        return Ok(());
    }

    let result = play_random_game(start, seed, &config)?;
    println!("{}", result.report());
    println!("final code: {}", result.final_game.board().to_short_code());
    println!(
        "{}",
        write_move_log(
            &code,
            Color::Light,
            result.final_game.move_log(),
            result_token(&result.final_game)
        )
    );
    Ok(())
}
