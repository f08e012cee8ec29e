//! Perft testing binary to verify move generation correctness.
//!
//! Usage: `perft <depth> [fen]`

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use mailbox_chess::board::{Position, START_FEN};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(depth) = args.first().and_then(|d| d.parse::<usize>().ok()) else {
        eprintln!("usage: perft <depth> [fen]");
        return ExitCode::FAILURE;
    };
    let fen = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        START_FEN.to_string()
    };

    let mut position = match Position::try_from_fen(&fen) {
        Ok(position) => position,
        Err(e) => {
            eprintln!("bad fen: {e}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let tallies = position.perft(depth);
    let elapsed = start.elapsed();
    for (ply, nodes) in tallies.iter().enumerate() {
        println!("perft({}) = {}", ply + 1, nodes);
    }
    let total: u64 = tallies.iter().sum();
    println!(
        "{} nodes in {:.3}s ({:.0} nps)",
        total,
        elapsed.as_secs_f64(),
        total as f64 / elapsed.as_secs_f64().max(1e-9)
    );

    if depth > 0 {
        println!("\nDivide for depth {depth}:");
        for (mv, nodes) in position.perft_divide(depth) {
            println!("{mv}: {nodes}");
        }
    }
    ExitCode::SUCCESS
}
