mod common;

use common::{parse_workflows, PUZZLE_EXAMPLE};
use rangeflow::partition::is_pairwise_disjoint;
use rangeflow::{Engine, EngineConfig, SymbolicExecutor, Terminal, WorkflowGraph};

#[test]
fn test_example_accepts_known_count() {
    let engine = Engine::default();
    let evaluation = engine.evaluate(parse_workflows(PUZZLE_EXAMPLE)).unwrap();
    assert_eq!(evaluation.tally.accepted, 167_409_079_868_000);
    assert_eq!(evaluation.tally.total(), 4000u128.pow(4));
}

#[test]
fn test_example_boxes_are_disjoint() {
    let evaluation = Engine::default()
        .evaluate(parse_workflows(PUZZLE_EXAMPLE))
        .unwrap();
    assert!(is_pairwise_disjoint(&evaluation.accepted));
    assert!(is_pairwise_disjoint(&evaluation.rejected));
}

#[test]
fn test_example_terminal_boxes_are_disjoint_before_partitioning() {
    // A single seed through a well-formed graph never produces overlaps.
    let graph = WorkflowGraph::build("in", parse_workflows(PUZZLE_EXAMPLE)).unwrap();
    let execution = SymbolicExecutor::new(&graph, 10)
        .execute(EngineConfig::default().seed())
        .unwrap();
    let mut all = execution.accepted().to_vec();
    all.extend_from_slice(execution.rejected());
    assert!(is_pairwise_disjoint(&all));
}

#[test]
fn test_example_parts_route_as_documented() {
    let graph = WorkflowGraph::build("in", parse_workflows(PUZZLE_EXAMPLE)).unwrap();
    let executor = SymbolicExecutor::new(&graph, 10);

    // {x=787,m=2655,a=1222,s=2876} is accepted, {x=1679,m=44,a=2067,s=496} rejected.
    assert_eq!(executor.route_point(&[787, 2655, 1222, 2876]).unwrap(), Terminal::Accept);
    assert_eq!(executor.route_point(&[1679, 44, 2067, 496]).unwrap(), Terminal::Reject);
    assert_eq!(executor.route_point(&[2036, 264, 79, 2244]).unwrap(), Terminal::Accept);
    assert_eq!(executor.route_point(&[2461, 1339, 466, 291]).unwrap(), Terminal::Reject);
    assert_eq!(executor.route_point(&[2127, 1623, 2188, 1013]).unwrap(), Terminal::Accept);
}

#[test]
fn test_example_accepted_boxes_agree_with_point_routing() {
    let graph = WorkflowGraph::build("in", parse_workflows(PUZZLE_EXAMPLE)).unwrap();
    let executor = SymbolicExecutor::new(&graph, 10);
    let execution = executor.execute(EngineConfig::default().seed()).unwrap();

    for part in execution.accepted() {
        let [x, m, a, s] = *part.ranges();
        for point in [
            [x.min(), m.min(), a.min(), s.min()],
            [x.max(), m.max(), a.max(), s.max()],
            [x.min(), m.max(), a.min(), s.max()],
        ] {
            assert_eq!(executor.route_point(&point).unwrap(), Terminal::Accept, "{}", part);
        }
    }
    for part in execution.rejected() {
        let [x, m, a, s] = *part.ranges();
        let point = [x.max(), m.min(), a.max(), s.min()];
        assert_eq!(executor.route_point(&point).unwrap(), Terminal::Reject, "{}", part);
    }
}
