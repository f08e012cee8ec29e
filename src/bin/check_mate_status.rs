use std::env;
use std::process::ExitCode;

use mailbox_chess::board::{Position, START_FEN};

fn main() -> ExitCode {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_mate_status [--fen <fen>] <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let fen = if args[0] == "--fen" {
        if args.len() < 2 {
            eprintln!("--fen needs a value");
            return ExitCode::FAILURE;
        }
        let fen = args[1].clone();
        args.drain(..2);
        fen
    } else {
        START_FEN.to_string()
    };

    let mut board = match Position::try_from_fen(&fen) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("bad fen: {e}");
            return ExitCode::FAILURE;
        }
    };

    for mv in &args {
        if let Err(e) = board.play_move(mv) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = board.legal_moves();
    println!("fen: {}", board.to_fen());
    println!("side_to_move: {}", board.side_to_move());
    println!("legal_moves: {}", legal_moves.len());
    println!("status: {:?}", board.game_status());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
