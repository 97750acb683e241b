use std::io::{self, BufRead, Write};

use eight_puzzle::board::{Board, Direction};
use eight_puzzle::search::engine::{solve, CostModel, Strategy};
use eight_puzzle::search::resources::SearchLimits;

fn prompt() {
    print!("move (up/down/left/right), solve <strategy>, or exit: ");
    let _ = io::stdout().flush();
}

fn parse_strategy(name: &str) -> Option<Strategy> {
    match name {
        "breadth_first" => Some(Strategy::BreadthFirst),
        "depth_first" => Some(Strategy::DepthFirst { max_depth: None }),
        "best_first" => Some(Strategy::BestFirst {
            cost: CostModel::Greedy,
        }),
        "astar" => Some(Strategy::BestFirst {
            cost: CostModel::AStar,
        }),
        _ => None,
    }
}

fn main() {
    let mut board = Board::random();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{board}");
        if board.is_goal() {
            println!("Solved!");
            break;
        }

        prompt();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                std::process::exit(1);
            }
            None => break,
        };
        let input = line.trim();

        if input == "exit" {
            break;
        }

        if let Some(dir) = Direction::parse(input) {
            match board.apply(dir) {
                Some(next) => board = next,
                None => println!("Illegal move, board unchanged."),
            }
            continue;
        }

        if let Some(name) = input.strip_prefix("solve ") {
            let Some(strategy) = parse_strategy(name.trim()) else {
                println!("Unknown strategy: {name}");
                continue;
            };

            match solve(&board, strategy, SearchLimits::default()) {
                Ok(solution) => match solution.plan {
                    Some(plan) => {
                        println!(
                            "Found a {}-move plan after exploring {} nodes:",
                            plan.len(),
                            solution.explored
                        );
                        for dir in plan {
                            println!("  {dir}");
                            board = board
                                .apply(dir)
                                .expect("solver plans contain only legal moves");
                        }
                    }
                    None => println!(
                        "No solution found after exploring {} nodes.",
                        solution.explored
                    ),
                },
                Err(e) => println!("Search failed: {e}"),
            }
            continue;
        }

        println!("Unrecognized input: {input}");
    }
}
