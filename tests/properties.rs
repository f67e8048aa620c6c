//! Randomised checks of the executor and partitioner against brute force.

mod common;

use std::collections::HashSet;

use common::for_each_point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rangeflow::partition::{is_pairwise_disjoint, partition};
use rangeflow::space::AXIS_COUNT;
use rangeflow::{
    total_volume, Axis, EngineConfig, Interval, Label, PartRange, Rule, SymbolicExecutor,
    Terminal, WorkflowDef, WorkflowGraph,
};

const SIDE: i64 = 6;

fn random_interval(rng: &mut StdRng, max: i64) -> Interval {
    let a = rng.gen_range(1..=max);
    let b = rng.gen_range(1..=max);
    Interval::new(a.min(b), a.max(b))
}

fn random_box(rng: &mut StdRng) -> PartRange {
    PartRange::new(
        [
            random_interval(rng, 8),
            random_interval(rng, 8),
            random_interval(rng, 2),
            random_interval(rng, 2),
        ],
        Label::Accept,
    )
}

fn union_points(boxes: &[PartRange]) -> HashSet<[i64; AXIS_COUNT]> {
    let mut points = HashSet::new();
    for part in boxes {
        for_each_point(part, |p| {
            points.insert(p);
        });
    }
    points
}

/// Random acyclic graph: workflow `w{i}` only ever targets `w{j}` with `j > i`.
fn random_graph(rng: &mut StdRng, workflows: usize) -> Vec<WorkflowDef> {
    let target = |rng: &mut StdRng, from: usize| -> Label {
        let pick = rng.gen_range(0..(workflows - from + 1));
        match pick {
            0 => Label::Accept,
            1 => Label::Reject,
            n => Label::node(format!("w{}", from + n - 1)),
        }
    };

    (0..workflows)
        .map(|i| {
            let mut rules: Vec<Rule> = (0..rng.gen_range(0..4))
                .map(|_| {
                    let axis = Axis::ALL[rng.gen_range(0..AXIS_COUNT)];
                    let threshold = rng.gen_range(0..=SIDE + 1);
                    let to = target(rng, i);
                    if rng.gen_bool(0.5) {
                        Rule::less_than(axis, threshold, to)
                    } else {
                        Rule::greater_than(axis, threshold, to)
                    }
                })
                .collect();
            rules.push(Rule::always(target(rng, i)));
            WorkflowDef::new(format!("w{i}"), rules)
        })
        .collect()
}

#[test]
fn test_executor_conserves_points_and_agrees_with_routing() {
    let mut rng = StdRng::seed_from_u64(19);
    let config = EngineConfig {
        entry: "w0".to_string(),
        ..EngineConfig::with_uniform_domain(Interval::new(1, SIDE))
    };

    for _ in 0..40 {
        let size = rng.gen_range(1..6);
        let graph = WorkflowGraph::build("w0", random_graph(&mut rng, size)).unwrap();
        assert!(!graph.has_cycle());
        let executor = SymbolicExecutor::new(&graph, config.budget_factor);
        let seed = config.seed();
        let execution = executor.execute(seed.clone()).unwrap();

        let mut all = execution.accepted().to_vec();
        all.extend_from_slice(execution.rejected());
        assert!(is_pairwise_disjoint(&all));
        assert_eq!(total_volume(&all), seed.volume());

        for_each_point(&seed, |point| {
            let expected = executor.route_point(&point).unwrap();
            let accepted = execution.accepted().iter().any(|b| b.contains_point(&point));
            assert_eq!(accepted, expected == Terminal::Accept, "{:?}", point);
        });
    }
}

#[test]
fn test_partition_is_disjoint_and_conserves_union() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let count = rng.gen_range(0..8);
        let boxes: Vec<PartRange> = (0..count).map(|_| random_box(&mut rng)).collect();
        let pieces = partition(boxes.clone());

        assert!(is_pairwise_disjoint(&pieces));
        let expected = union_points(&boxes);
        assert_eq!(total_volume(&pieces), expected.len() as u128);
        assert_eq!(union_points(&pieces), expected);
    }
}

#[test]
fn test_partition_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let boxes: Vec<PartRange> = (0..6).map(|_| random_box(&mut rng)).collect();
        let once = partition(boxes);
        let twice = partition(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_partition_of_two_overlapping_ranges_counts_union() {
    let line = |min, max| {
        PartRange::new(
            [
                Interval::new(min, max),
                Interval::new(1, 1),
                Interval::new(1, 1),
                Interval::new(1, 1),
            ],
            Label::Accept,
        )
    };
    let pieces = partition(vec![line(1, 10), line(5, 15)]);
    assert!(is_pairwise_disjoint(&pieces));
    assert_eq!(total_volume(&pieces), 15);
    assert_eq!(union_points(&pieces), union_points(&[line(1, 15)]));
}
