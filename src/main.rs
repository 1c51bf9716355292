//! Interactive stdin driver.
//!
//! Every line is one command. A square (`E2`) clicks it; `random` clicks the
//! random engine's choice; `code`, `load <code>`, `new`, `board`, `log` and
//! `quit` manage the session.

use std::io::{self, BufRead, Write};

use tile_chess::engines::engine_random::RandomEngine;
use tile_chess::engines::engine_trait::Engine;
use tile_chess::game_state::chess_types::{Color, Square};
use tile_chess::game_state::game::{ActivateResult, Game, GameOutcome, MoveResultState};
use tile_chess::utils::move_log::{result_token, write_move_log};
use tile_chess::utils::render_game_state::{render_board, render_board_with_marks};

struct Session {
    game: Game,
    initial_code: String,
    engine: RandomEngine,
}

impl Session {
    fn new(game: Game) -> Self {
        let initial_code = game.board().to_short_code();
        Self {
            game,
            initial_code,
            engine: RandomEngine::default(),
        }
    }

    fn click(&mut self, square: Square) -> String {
        match self.game.activate(square) {
            ActivateResult::Touch {
                piece,
                moves,
                captures,
            } => {
                let marks: Vec<Square> = moves
                    .iter()
                    .copied()
                    .chain(captures.iter().map(|c| c.square))
                    .collect();
                format!(
                    "touch {piece} moves={} captures={}\n{}",
                    join_squares(&moves),
                    join_squares(&captures.iter().map(|c| c.square).collect::<Vec<_>>()),
                    render_board_with_marks(self.game.board(), &marks)
                )
            }
            ActivateResult::Move {
                piece,
                to,
                castled,
                status,
            } => {
                let castled = castled.map(|rook| format!(" castled={rook}")).unwrap_or_default();
                format!("move {piece} to {to}{castled}\n{}", describe_status(&status))
            }
            ActivateResult::Capture {
                piece,
                captured,
                to,
                status,
            } => format!(
                "capture {captured} by {piece} on {to}\n{}",
                describe_status(&status)
            ),
            ActivateResult::Cancel => "cancel".to_owned(),
            ActivateResult::Invalid => "invalid".to_owned(),
        }
    }

    fn handle(&mut self, line: &str) -> Result<Option<String>, String> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(Some(String::new()));
        };

        let reply = match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(None),
            "board" => render_board(self.game.board()),
            "code" => self.game.board().to_short_code(),
            "log" => write_move_log(
                &self.initial_code,
                Color::Light,
                self.game.move_log(),
                result_token(&self.game),
            ),
            "new" => {
                *self = Session::new(Game::standard());
                render_board(self.game.board())
            }
            "load" => {
                let code = parts.next().ok_or("load needs a short code")?;
                let game = Game::from_short_code(code, Color::Light).map_err(|e| e.to_string())?;
                *self = Session::new(game);
                render_board(self.game.board())
            }
            "random" => {
                let out = self.engine.choose_square(&self.game)?;
                let square = out.square.ok_or("random engine returned no square")?;
                format!("{}\n{}", out.info_lines.join("\n"), self.click(square))
            }
            _ => {
                let square: Square = command.parse().map_err(|e| format!("{e}"))?;
                self.click(square)
            }
        };
        Ok(Some(reply))
    }
}

fn join_squares(squares: &[Square]) -> String {
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn describe_status(status: &MoveResultState) -> String {
    let summary = format!(
        "turn={} checked={} moves={} captures={} code={}",
        status.turn.name(),
        status.checked,
        status.moves,
        status.captures,
        status.code
    );
    match status.outcome() {
        GameOutcome::Ongoing => summary,
        GameOutcome::Stalemate => format!("{summary}\nStalemate!"),
        GameOutcome::Checkmate { winner } => format!("{summary}\n{} Wins!", winner.name()),
    }
}

fn main() {
    let mut session = Session::new(Game::standard());
    println!("{}", render_board(session.game.board()));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        match session.handle(line.trim()) {
            Ok(Some(reply)) => println!("{reply}"),
            Ok(None) => break,
            Err(e) => println!("error {e}"),
        }
        io::stdout().flush().ok();
    }
}
