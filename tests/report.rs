use eight_puzzle::board::{Board, Direction};
use eight_puzzle::search::engine::{solve, Strategy};
use eight_puzzle::search::report::SolveReport;
use eight_puzzle::search::resources::SearchLimits;

#[test]
fn directions_serialize_as_lowercase_names() {
    assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
    assert_eq!(
        serde_json::to_string(&Direction::Right).unwrap(),
        "\"right\""
    );

    let parsed: Direction = serde_json::from_str("\"left\"").unwrap();
    assert_eq!(parsed, Direction::Left);
}

#[test]
fn solve_report_round_trips_through_json() {
    let board = Board::from_tiles([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
    let strategy = Strategy::BreadthFirst;
    let solution = solve(&board, strategy, SearchLimits::default()).unwrap();

    let report = SolveReport::new(&board, strategy, &solution);
    assert_eq!(report.strategy, "breadth_first");
    assert!(report.solved);
    assert_eq!(report.plan, vec![Direction::Right]);
    assert_eq!(report.plan_len, 1);
    assert_eq!(report.start, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]);

    let json = serde_json::to_string_pretty(&report).unwrap();
    assert!(json.contains("\"right\""));

    let parsed: SolveReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn exhausted_runs_report_no_plan() {
    let unsolvable = Board::from_tiles([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    let strategy = Strategy::BreadthFirst;
    let solution = solve(&unsolvable, strategy, SearchLimits::default()).unwrap();

    let report = SolveReport::new(&unsolvable, strategy, &solution);
    assert!(!report.solved);
    assert!(report.plan.is_empty());
    assert_eq!(report.plan_len, 0);
    assert!(report.explored >= 181_440);
}
