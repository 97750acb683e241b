use eight_puzzle::board::Board;
use eight_puzzle::search::engine::{solve, Strategy};
use eight_puzzle::search::resources::{SearchError, SearchLimits};

fn scrambled() -> Board {
    Board::from_tiles([0, 1, 3, 4, 2, 5, 7, 8, 6]).unwrap()
}

#[test]
fn state_budget_surfaces_as_limit_exceeded() {
    let limits = SearchLimits {
        max_states: 1,
        ..SearchLimits::default()
    };

    let err = solve(&scrambled(), Strategy::BreadthFirst, limits).unwrap_err();
    match err {
        SearchError::LimitExceeded { metric, limit, .. } => {
            assert_eq!(metric, "states");
            assert_eq!(limit, 1);
        }
        other => panic!("expected LimitExceeded, got: {other}"),
    }
}

#[test]
fn edge_budget_surfaces_as_limit_exceeded() {
    let limits = SearchLimits {
        max_edges: 1,
        ..SearchLimits::default()
    };

    let err = solve(&scrambled(), Strategy::BreadthFirst, limits).unwrap_err();
    assert!(matches!(
        err,
        SearchError::LimitExceeded {
            metric: "edges",
            ..
        }
    ));
}

#[test]
fn step_budget_surfaces_as_limit_exceeded() {
    let limits = SearchLimits {
        max_runtime_steps: 1,
        ..SearchLimits::default()
    };

    let err = solve(&scrambled(), Strategy::BreadthFirst, limits).unwrap_err();
    assert!(matches!(
        err,
        SearchError::LimitExceeded {
            metric: "runtime_steps",
            ..
        }
    ));
}

#[test]
fn limit_errors_carry_counts_and_render_readably() {
    let limits = SearchLimits {
        max_states: 1,
        ..SearchLimits::default()
    };

    let err = solve(&scrambled(), Strategy::BreadthFirst, limits).unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("limit exceeded"));
    assert!(rendered.contains("states"));

    if let SearchError::LimitExceeded { counts, .. } = err {
        assert!(counts.states >= 2);
        assert!(counts.runtime_steps >= 1);
    }
}

#[test]
fn budgets_within_reach_do_not_interfere() {
    // The four-move board needs only a handful of nodes under BFS.
    let limits = SearchLimits {
        max_states: 200,
        max_edges: 1_000,
        max_runtime_steps: 1_000,
    };

    let solution = solve(&scrambled(), Strategy::BreadthFirst, limits).unwrap();
    assert_eq!(solution.plan.map(|p| p.len()), Some(4));
}
