use eight_puzzle::board::{Board, TILE_COUNT};
use eight_puzzle::search::engine::{solve, CostModel, Strategy};
use eight_puzzle::search::report::SolveReport;
use eight_puzzle::search::resources::SearchLimits;

fn usage() -> ! {
    eprintln!(
        "Usage: solve_board <strategy> [board] [max_depth]\n\n\
         Strategies:\n  \
         - breadth_first\n  \
         - depth_first      (optional max_depth as third argument)\n  \
         - best_first       (greedy, heuristic-only ordering)\n  \
         - astar            (best-first ordered by depth + heuristic)\n\n\
         The board is 9 digits row-major with 0 as the blank, e.g. 123456708.\n\
         Omit it (or pass 'random') for a random solvable board."
    );
    std::process::exit(2);
}

fn parse_board(arg: &str) -> Board {
    if arg == "random" {
        return Board::random();
    }

    let digits: Vec<u8> = arg
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    if digits.len() != TILE_COUNT || arg.chars().count() != TILE_COUNT {
        eprintln!("Board must be exactly {TILE_COUNT} digits, got: {arg}");
        std::process::exit(2);
    }

    let mut tiles = [0u8; TILE_COUNT];
    tiles.copy_from_slice(&digits);

    match Board::from_tiles(tiles) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Rejected board {arg}: {e}");
            std::process::exit(2);
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        usage();
    }

    let max_depth = match args.get(3) {
        Some(raw) => match raw.parse::<u32>() {
            Ok(d) => Some(d),
            Err(_) => {
                eprintln!("max_depth must be a non-negative integer, got: {raw}");
                std::process::exit(2);
            }
        },
        None => None,
    };

    let strategy = match args[1].as_str() {
        "breadth_first" => Strategy::BreadthFirst,
        "depth_first" => Strategy::DepthFirst { max_depth },
        "best_first" => Strategy::BestFirst {
            cost: CostModel::Greedy,
        },
        "astar" => Strategy::BestFirst {
            cost: CostModel::AStar,
        },
        other => {
            eprintln!("Unknown strategy: {other}");
            usage();
        }
    };
    if max_depth.is_some() && !matches!(strategy, Strategy::DepthFirst { .. }) {
        eprintln!("max_depth only applies to depth_first");
        std::process::exit(2);
    }

    let board = parse_board(args.get(2).map(String::as_str).unwrap_or("random"));

    let solution = match solve(&board, strategy, SearchLimits::default()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    let report = SolveReport::new(&board, strategy, &solution);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize report: {e}");
            std::process::exit(1);
        }
    }
}
