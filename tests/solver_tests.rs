//! Depth-first solver integration tests.

use pursuit_solver::core::{GameState, NodeId, Outcome, Turn};
use pursuit_solver::graph::{build_graph, generate, Graph};
use pursuit_solver::solver::{solve, solve_with_stats, treasure_game, Solver, SolverConfig};
use pursuit_solver::Error;

fn n(id: u32) -> NodeId {
    NodeId::new(id)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The six-node treasure-hunt board.
fn treasure_board() -> Vec<Vec<usize>> {
    vec![
        vec![2, 5],
        vec![3],
        vec![0, 4, 5],
        vec![1, 4, 5],
        vec![2, 3],
        vec![0, 2, 3],
    ]
}

// =============================================================================
// Terminal Laws
// =============================================================================

#[test]
fn test_evader_starting_on_goal_wins() {
    let graph = generate::random(6, 0.4, 11).unwrap();
    for pursuer in graph.nodes() {
        assert_eq!(solve(&graph, NodeId::GOAL, pursuer).unwrap(), Outcome::EvaderWin);
    }
}

#[test]
fn test_shared_start_is_capture() {
    let graph = generate::random(6, 0.4, 12).unwrap();
    for node in graph.nodes().skip(1) {
        assert_eq!(solve(&graph, node, node).unwrap(), Outcome::PursuerWin);
    }
}

#[test]
fn test_pursuer_may_start_on_goal() {
    // The goal has no exits, so a Pursuer parked there is stuck.
    let graph = build_graph(3, [(1, 2), (2, 1)]).unwrap();
    assert_eq!(solve(&graph, n(1), NodeId::GOAL).unwrap(), Outcome::EvaderWin);
}

// =============================================================================
// Known Boards
// =============================================================================

#[test]
fn test_directed_triangle_evader_escapes() {
    let graph = build_graph(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
    assert_eq!(solve(&graph, n(2), n(1)).unwrap(), Outcome::EvaderWin);
}

#[test]
fn test_treasure_board_is_draw() {
    init_logging();
    assert_eq!(treasure_game(&treasure_board()).unwrap(), Outcome::Draw);

    let graph = Graph::from_adjacency(&treasure_board()).unwrap();
    assert_eq!(solve(&graph, n(1), n(2)).unwrap(), Outcome::Draw);
}

#[test]
fn test_evader_boxed_in_by_pursuer_is_caught() {
    // Node 1's only exit leads onto the Pursuer's node.
    let graph = build_graph(
        6,
        [(0, 2), (2, 0), (2, 3), (3, 2), (2, 1), (1, 2), (4, 5), (5, 4)],
    )
    .unwrap();
    assert_eq!(solve(&graph, n(1), n(2)).unwrap(), Outcome::PursuerWin);
}

#[test]
fn test_undirected_path_outcomes() {
    let graph = generate::path(5).unwrap();
    assert_eq!(solve(&graph, n(1), n(3)).unwrap(), Outcome::EvaderWin);
    assert_eq!(solve(&graph, n(2), n(3)).unwrap(), Outcome::EvaderWin);
    assert_eq!(solve(&graph, n(2), n(1)).unwrap(), Outcome::PursuerWin);
    assert_eq!(solve(&graph, n(4), n(1)).unwrap(), Outcome::PursuerWin);
}

#[test]
fn test_directed_cycle_outcomes() {
    let graph = generate::cycle(4).unwrap();
    // Evader one step from the goal.
    assert_eq!(solve(&graph, n(3), n(1)).unwrap(), Outcome::EvaderWin);
    // Pursuer directly behind the Evader catches it.
    assert_eq!(solve(&graph, n(1), n(2)).unwrap(), Outcome::PursuerWin);
}

#[test]
fn test_pursuer_with_only_goal_exit_loses_its_turn() {
    let graph = build_graph(3, [(1, 1), (2, 0)]).unwrap();
    let mut solver = Solver::new(&graph);

    let stuck = GameState::new(n(1), n(2), Turn::Pursuer);
    assert_eq!(solver.evaluate(stuck).unwrap(), Outcome::EvaderWin);
    assert_eq!(solver.solve(n(1), n(2)).unwrap(), Outcome::EvaderWin);
}

// =============================================================================
// Memoization and Repetition
// =============================================================================

#[test]
fn test_each_state_expanded_once() {
    let graph = Graph::from_adjacency(&treasure_board()).unwrap();
    let mut solver = Solver::new(&graph);
    solver.solve(n(1), n(2)).unwrap();

    let stats = solver.stats();
    assert_eq!(stats.states_evaluated as usize, solver.memo_len());
    assert!(solver.memo_len() <= graph.node_count() * graph.node_count() * 2);
    assert!(stats.repetition_hits > 0);
}

#[test]
fn test_memo_holds_no_terminal_states() {
    let graph = generate::random(7, 0.35, 3).unwrap();
    let mut solver = Solver::new(&graph);
    solver.solve(n(3), n(5)).unwrap();

    for (state, _) in solver.memo_entries() {
        assert!(state.terminal().is_none(), "terminal state {state} memoized");
    }
}

#[test]
fn test_repetition_signal_not_cached_for_revisited_state() {
    // Evader tries the loop 1 -> 2 -> 1 first, then the goal.
    let graph = build_graph(5, [(1, 2), (1, 0), (2, 1), (3, 4), (4, 3)]).unwrap();
    let mut solver = Solver::new(&graph);
    assert_eq!(solver.solve(n(1), n(3)).unwrap(), Outcome::EvaderWin);

    // The start state was met again on its own path, yet it keeps its real value.
    let start = GameState::new(n(1), n(3), Turn::Evader);
    assert_eq!(solver.memoized(&start), Some(Outcome::EvaderWin));

    // States evaluated under the repetition signal keep the heuristic Draw.
    let inner = GameState::new(n(1), n(4), Turn::Pursuer);
    assert_eq!(solver.memoized(&inner), Some(Outcome::Draw));
    assert_eq!(solver.memo_len(), 4);
}

#[test]
fn test_repeated_solves_are_independent() {
    let graph = Graph::from_adjacency(&treasure_board()).unwrap();
    let mut solver = Solver::new(&graph);

    let first = solver.solve(n(1), n(2)).unwrap();
    let first_stats = solver.stats().clone();
    solver.solve(n(3), n(4)).unwrap();
    let again = solver.solve(n(1), n(2)).unwrap();

    assert_eq!(first, again);
    assert_eq!(first_stats.states_evaluated, solver.stats().states_evaluated);
}

// =============================================================================
// Determinism and Concurrency
// =============================================================================

#[test]
fn test_solve_deterministic() {
    let graph = generate::random(8, 0.3, 21).unwrap();
    for evader in graph.nodes() {
        for pursuer in graph.nodes() {
            let a = solve(&graph, evader, pursuer).unwrap();
            let b = solve(&graph, evader, pursuer).unwrap();
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_concurrent_solves_share_graph() {
    let graph = generate::random(7, 0.35, 8).unwrap();
    let starts: Vec<(NodeId, NodeId)> = graph
        .nodes()
        .flat_map(|e| graph.nodes().map(move |p| (e, p)))
        .collect();

    let expected: Vec<Outcome> = starts
        .iter()
        .map(|&(e, p)| solve(&graph, e, p).unwrap())
        .collect();

    let parallel: Vec<Outcome> = std::thread::scope(|scope| {
        let handles: Vec<_> = starts
            .chunks(8)
            .map(|chunk| {
                let graph = &graph;
                scope.spawn(move || {
                    let mut solver = Solver::new(graph);
                    chunk
                        .iter()
                        .map(|&(e, p)| solver.solve(e, p).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(expected, parallel);
}

// =============================================================================
// Configuration and Errors
// =============================================================================

#[test]
fn test_pursuer_moves_first() {
    let graph = generate::path(4).unwrap();
    let config = SolverConfig::default().with_first_mover(Turn::Pursuer);
    let mut solver = Solver::with_config(&graph, config);

    // Pursuer steps from 2 onto the Evader at 1.
    assert_eq!(solver.solve(n(1), n(2)).unwrap(), Outcome::PursuerWin);
    // With the Evader first, it reaches the goal.
    assert_eq!(solve(&graph, n(1), n(2)).unwrap(), Outcome::EvaderWin);
}

#[test]
fn test_invalid_starts() {
    let graph = generate::cycle(3).unwrap();

    let err = solve(&graph, n(3), n(1)).unwrap_err();
    assert!(matches!(err, Error::InvalidStart { role: Turn::Evader, node: 3, node_count: 3 }));

    let err = solve(&graph, n(1), n(9)).unwrap_err();
    assert!(matches!(err, Error::InvalidStart { role: Turn::Pursuer, node: 9, .. }));
}

#[test]
fn test_stats_reported() {
    let graph = Graph::from_adjacency(&treasure_board()).unwrap();
    let (outcome, stats) = solve_with_stats(&graph, n(1), n(2)).unwrap();
    assert_eq!(outcome, Outcome::Draw);
    assert!(stats.states_evaluated > 0);
    assert!(stats.max_depth > 0);
    assert!(stats.lookups() >= stats.states_evaluated);
}
