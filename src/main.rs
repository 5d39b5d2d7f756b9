use anyhow::Result;
use clap::Parser;
use noughtbot::board::{Board, Move};
use noughtbot::search::Strategy;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against a perfect search engine", long_about = None)]
struct Args {
    /// Search strategy: 'minimax', 'negamax', or 'alphabeta'
    #[arg(long, default_value = "alphabeta")]
    strategy: String,

    /// Who opens: 'human', 'engine', or 'coin' for a coin flip
    #[arg(long, default_value = "coin")]
    first: String,
}

fn parse_strategy(s: &str) -> Result<Strategy> {
    match s.to_lowercase().as_str() {
        "minimax" => Ok(Strategy::Minimax),
        "negamax" => Ok(Strategy::Negamax),
        "alphabeta" | "ab" => Ok(Strategy::AlphaBeta),
        _ => anyhow::bail!("Invalid strategy: use 'minimax', 'negamax', or 'alphabeta'"),
    }
}

fn engine_opens(first: &str, rng: &mut SmallRng) -> Result<bool> {
    match first.to_lowercase().as_str() {
        "human" => Ok(false),
        "engine" => Ok(true),
        "coin" => Ok(rng.gen_bool(0.5)),
        _ => anyhow::bail!("Invalid opener: use 'human', 'engine', or 'coin'"),
    }
}

/// Prompt until the human names an empty square; all validation happens here,
/// before the move ever reaches the board's unchecked path.
fn human_turn(board: &mut Board) -> Result<()> {
    loop {
        print!("Where would you like to play? (1-9): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        match input.trim().parse::<Move>() {
            Ok(mv) => match board.try_apply(mv) {
                Ok(()) => return Ok(()),
                Err(e) => println!("{e}, try again."),
            },
            Err(_) => println!("You made an invalid move, try again."),
        }
    }
}

fn engine_turn(board: &mut Board, strategy: Strategy) -> Result<()> {
    let (score, best) = strategy.search(board);
    let mv = best.ok_or_else(|| anyhow::anyhow!("search returned no move on a live position"))?;
    log::debug!("engine eval {score:+.3}, plays square {mv}");
    println!("Computer plays: {mv}");
    board.apply(mv);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let strategy = parse_strategy(&args.strategy)?;
    let mut rng = SmallRng::from_entropy();
    let engine_first = engine_opens(&args.first, &mut rng)?;
    log::info!("{} opens, strategy {:?}", if engine_first { "engine" } else { "human" }, strategy);

    let mut board = Board::new();
    if engine_first {
        engine_turn(&mut board, strategy)?;
        println!("Move: {}", board.move_number());
    }

    loop {
        println!("{board}");
        human_turn(&mut board)?;
        println!("Move: {}", board.move_number());
        println!("{board}");

        // Only the human can have just won here.
        if board.winner().is_some() {
            println!("Congratulations, you win!");
            break;
        }
        if board.is_drawn() {
            println!("Draw!");
            break;
        }

        engine_turn(&mut board, strategy)?;
        if board.winner().is_some() {
            println!("{board}");
            println!("You lose, maybe next time.");
            break;
        }
        if board.is_drawn() {
            println!("{board}");
            println!("Draw!");
            break;
        }
    }

    Ok(())
}
