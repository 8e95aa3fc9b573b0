use std::env;
use std::process::ExitCode;

use chess_rules::GameState;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: game_status <move1> <move2> ...   (square pairs, e.g. e2e4)");
        return ExitCode::FAILURE;
    }

    let mut game = GameState::new();
    for notation in args.iter().skip(1) {
        if let Err(err) = game.play(notation) {
            eprintln!("{notation}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = game.legal_moves();
    println!(
        "side_to_move: {}",
        if game.white_to_move() { "white" } else { "black" }
    );
    println!("{}", game.board());
    println!("in_check: {}", game.in_check());
    println!("checkmate: {}", game.is_checkmate());
    println!("stalemate: {}", game.is_stalemate());
    println!("legal_moves: {}", legal_moves.len());
    for mv in legal_moves.iter() {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
