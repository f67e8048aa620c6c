//! Splitting a box against a single rule and against a whole workflow.

use super::error::ExecutionError;
use crate::space::{Axis, PartRange};
use crate::workflow::{Comparator, Rule, WorkflowDef};
use tracing::trace;

/// Splits `part` into the sub-box `rule` matches and the sub-box it does not.
///
/// The matched box is readdressed to the rule's target; the unmatched box keeps
/// `part`'s label. The two are disjoint and their union is exactly `part`.
/// A side that would be empty on the tested axis is `None`.
pub fn apply_rule(rule: &Rule, part: &PartRange) -> (Option<PartRange>, Option<PartRange>) {
    if rule.comparator == Comparator::Always {
        return (Some(part.with_label(rule.target.clone())), None);
    }
    let (matched, rest) = rule.split(&part.interval(rule.axis));
    let matched = matched.map(|interval| {
        part.with_interval(rule.axis, interval)
            .with_label(rule.target.clone())
    });
    let rest = rest.map(|interval| part.with_interval(rule.axis, interval));
    (matched, rest)
}

/// Runs `part` through every rule of `workflow` in order.
///
/// Returns the matched sub-boxes, in rule order, each addressed to its rule's
/// target. Their union is exactly `part`.
///
/// # Errors
///
/// `UnroutedRemainder` if points are left over after the last rule. A
/// validated graph always ends each workflow with an `Always` rule, so this
/// only fires on workflows that bypassed validation.
pub fn route_workflow(
    workflow: &WorkflowDef,
    part: &PartRange,
) -> Result<Vec<PartRange>, ExecutionError> {
    let mut routed = Vec::new();
    let mut remaining = Some(part.clone());

    for rule in &workflow.rules {
        let Some(current) = remaining.take() else {
            break;
        };
        let (matched, rest) = apply_rule(rule, &current);
        if let Some(matched) = matched {
            trace!(node = %workflow.name, rule = %rule, part = %matched, "rule matched");
            routed.push(matched);
        }
        remaining = rest;
    }

    if let Some(rest) = remaining {
        let rule_index = workflow.rules.len().saturating_sub(1);
        let axis = workflow
            .rules
            .last()
            .map(|rule| rule.axis)
            .unwrap_or(Axis::X);
        trace!(node = %workflow.name, part = %rest, "remainder left unrouted");
        return Err(ExecutionError::UnroutedRemainder {
            node: workflow.name.clone(),
            rule_index,
            axis,
        });
    }

    Ok(routed)
}
