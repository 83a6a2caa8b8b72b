use quartersolve::prelude::*;

use clap::Parser;
use rand::Rng;

/// 3x3x3 cube solver: IDA* over pattern databases, quarter-turn metric.
#[derive(Parser)]
struct Args {
    /// Scramble to solve, as whitespace-separated turns (e.g. "R U F'").
    /// A random scramble is generated when absent.
    #[arg(long)]
    moves: Option<String>,

    /// Length of the random scramble.
    #[arg(long, default_value_t = 25)]
    scramble: usize,

    /// Seed for the random scramble; picked from entropy when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Search algorithm: "idastar" or "iddfs".
    #[arg(long, default_value = "idastar")]
    algorithm: String,

    /// Threshold rounds before IDA* gives up.
    #[arg(long, default_value_t = 50)]
    max_iterations: u32,

    /// Deepest bound IDDFS iterates to.
    #[arg(long, default_value_t = 12)]
    max_depth: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let algorithm: Algorithm = args.algorithm.parse()?;
    let scramble_moves = match &args.moves {
        Some(s) => Move::parse_sequence(s)?,
        None => {
            let seed = args.seed.unwrap_or_else(|| rand::rng().random());
            eprintln!("seed: {}", seed);
            scramble(args.scramble, seed)
        }
    };
    println!("scramble: {}", Move::format_sequence(&scramble_moves));

    let start = Cube::solved().apply_all(scramble_moves.iter().copied());

    let heuristic = Heuristic::build();
    let options = SolveOptions {
        max_depth: args.max_depth,
        max_iterations: args.max_iterations,
        ..SolveOptions::default()
    };

    let result = solve(&start, algorithm, &heuristic, &options);
    match result.status {
        SolveStatus::Found(moves) => {
            anyhow::ensure!(
                start.apply_all(moves.iter().copied()).is_solved(),
                "solution does not reproduce the solved cube"
            );
            println!("solution: {}", Move::format_sequence(&moves));
            println!(
                "{} turns, {} nodes, {} rounds, {} ms",
                moves.len(),
                result.expanded_nodes,
                result.iterations,
                result.elapsed.as_millis()
            );
            Ok(())
        }
        SolveStatus::Aborted => Err(anyhow::anyhow!(
            "gave up after {} rounds and {} nodes; retry with a larger budget",
            result.iterations,
            result.expanded_nodes
        )),
        SolveStatus::Exhausted => Err(anyhow::anyhow!(
            "search space exhausted without a solution; the input state is unreachable"
        )),
    }
}
