//! Reversi engine CLI
//!
//! Plays one self-play game from the standard opening and prints every move.
//!
//! Usage: `reversi [size] [time_ms] [seed]`
//!
//! Set `RUST_LOG=debug` to see each completed search depth.

use std::env;
use std::process;

use reversi::rules::{is_terminal, make_move};
use reversi::{Board, Disc, Engine, EngineConfig, EngineResult, SelectionKind};

const USAGE: &str = "usage: reversi [size: 6|8|10|12] [time_ms] [seed]";

struct Args {
    size: usize,
    time_ms: u64,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let argv: Vec<String> = env::args().skip(1).collect();
    let field = |i: usize, name: &str| -> Result<Option<u64>, String> {
        argv.get(i)
            .map(|s| s.parse::<u64>().map_err(|_| format!("invalid {}: {}", name, s)))
            .transpose()
    };

    Ok(Args {
        size: field(0, "size")?.map_or(8, |v| v as usize),
        time_ms: field(1, "time_ms")?.unwrap_or(1950),
        seed: field(2, "seed")?,
    })
}

fn play(args: &Args) -> EngineResult<()> {
    let mut board = Board::initial(args.size)?;
    let mut engine = Engine::with_config(EngineConfig {
        time_limit: std::time::Duration::from_millis(args.time_ms),
        seed: args.seed,
        ..EngineConfig::default()
    });

    println!("===========================================");
    println!("   Reversi {}x{} self-play, {}ms per move", args.size, args.size, args.time_ms);
    println!("===========================================\n");
    print!("{}", board);

    let mut to_move = Disc::Black;
    let mut turn = 1;
    while !is_terminal(&board) {
        let result = engine.select_move_with_stats(&board, to_move, to_move.opponent());

        match result.best_move {
            Some(mov) => {
                board = make_move(&board, mov, to_move);
                print!("\n{:>3}. {:?} plays {}", turn, to_move, mov);
                if result.kind == SelectionKind::Search {
                    println!(
                        "  [depth {}, score {:.1}, {} nodes, {}ms]",
                        result.depth, result.score, result.nodes, result.time_ms
                    );
                } else {
                    println!("  [{:?}]", result.kind);
                }
                print!("{}", board);
            }
            None => println!("\n{:>3}. {:?} passes", turn, to_move),
        }

        to_move = to_move.opponent();
        turn += 1;
    }

    let black = board.count(Disc::Black);
    let white = board.count(Disc::White);
    println!("\n===========================================");
    println!("   Final: Black {} - White {}", black, white);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => println!("   Black wins"),
        std::cmp::Ordering::Less => println!("   White wins"),
        std::cmp::Ordering::Equal => println!("   Draw"),
    }
    println!("===========================================");
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = play(&args) {
        eprintln!("error: {}\n{}", e, USAGE);
        process::exit(1);
    }
}
