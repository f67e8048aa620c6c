//! Shared helpers for integration tests.

#![allow(dead_code)]

use rangeflow::space::AXIS_COUNT;
use rangeflow::{Axis, Label, PartRange, Rule, WorkflowDef};

/// Reads workflow lines such as `px{a<2006:qkq,m>2090:A,rfg}`.
///
/// Blank lines are skipped. Panics on malformed input; test fixtures only.
pub fn parse_workflows(source: &str) -> Vec<WorkflowDef> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_workflow)
        .collect()
}

fn parse_workflow(line: &str) -> WorkflowDef {
    let (name, body) = line.split_once('{').expect("workflow needs a body");
    let body = body.strip_suffix('}').expect("workflow body must close");
    let rules = body.split(',').map(parse_rule).collect();
    WorkflowDef::new(name, rules)
}

fn parse_rule(text: &str) -> Rule {
    let Some((test, target)) = text.split_once(':') else {
        return Rule::always(Label::parse(text));
    };
    let mut chars = test.chars();
    let axis = Axis::from_symbol(chars.next().expect("axis")).expect("known axis");
    let comparator = chars.next().expect("comparator");
    let threshold: i64 = chars.as_str().parse().expect("numeric threshold");
    let target = Label::parse(target);
    match comparator {
        '<' => Rule::less_than(axis, threshold, target),
        '>' => Rule::greater_than(axis, threshold, target),
        other => panic!("unknown comparator {other}"),
    }
}

/// Calls `visit` for every integer point of `part`.
pub fn for_each_point(part: &PartRange, mut visit: impl FnMut([i64; AXIS_COUNT])) {
    let [x, m, a, s] = *part.ranges();
    for xv in x.min()..=x.max() {
        for mv in m.min()..=m.max() {
            for av in a.min()..=a.max() {
                for sv in s.min()..=s.max() {
                    visit([xv, mv, av, sv]);
                }
            }
        }
    }
}

/// The example workflow set from the puzzle statement.
pub const PUZZLE_EXAMPLE: &str = "
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}
";
