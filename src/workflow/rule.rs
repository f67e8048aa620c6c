//! Routing labels and the comparison rules that produce them.

use std::fmt::Display;

use crate::space::{Axis, Interval};

/// Reserved name of the accepting terminal.
pub const ACCEPT: &str = "A";
/// Reserved name of the rejecting terminal.
pub const REJECT: &str = "R";

/// One of the two outcomes at which routing stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    Accept,
    Reject,
}

/// Where a box is currently addressed: a workflow node or a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Label {
    Accept,
    Reject,
    Node(String),
}

impl Label {
    /// Builds a label from source text; `A` and `R` map to the terminals.
    pub fn parse(name: &str) -> Self {
        match name {
            ACCEPT => Label::Accept,
            REJECT => Label::Reject,
            other => Label::Node(other.to_string()),
        }
    }

    pub fn node(name: impl Into<String>) -> Self {
        Label::Node(name.into())
    }

    /// Returns the terminal outcome, or `None` for a workflow node.
    pub fn terminal(&self) -> Option<Terminal> {
        match self {
            Label::Accept => Some(Terminal::Accept),
            Label::Reject => Some(Terminal::Reject),
            Label::Node(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal().is_some()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Label::Accept => ACCEPT,
            Label::Reject => REJECT,
            Label::Node(name) => name,
        }
    }
}

impl From<Terminal> for Label {
    fn from(terminal: Terminal) -> Self {
        match terminal {
            Terminal::Accept => Label::Accept,
            Terminal::Reject => Label::Reject,
        }
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        match name.as_str() {
            ACCEPT => Label::Accept,
            REJECT => Label::Reject,
            _ => Label::Node(name),
        }
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        match label {
            Label::Node(name) => name,
            terminal => terminal.as_str().to_string(),
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Test applied by a [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Comparator {
    LessThan,
    GreaterThan,
    Always,
}

/// One line of a workflow: a comparison on an axis plus a routing target.
///
/// `Always` rules ignore `axis` and `threshold`; build them with
/// [`Rule::always`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub axis: Axis,
    pub comparator: Comparator,
    pub threshold: i64,
    pub target: Label,
}

impl Rule {
    pub fn less_than(axis: Axis, threshold: i64, target: Label) -> Self {
        Self {
            axis,
            comparator: Comparator::LessThan,
            threshold,
            target,
        }
    }

    pub fn greater_than(axis: Axis, threshold: i64, target: Label) -> Self {
        Self {
            axis,
            comparator: Comparator::GreaterThan,
            threshold,
            target,
        }
    }

    pub fn always(target: Label) -> Self {
        Self {
            axis: Axis::X,
            comparator: Comparator::Always,
            threshold: 0,
            target,
        }
    }

    pub fn is_always(&self) -> bool {
        self.comparator == Comparator::Always
    }

    /// Returns true if a single rating value passes this rule's test.
    pub fn matches(&self, value: i64) -> bool {
        match self.comparator {
            Comparator::LessThan => value < self.threshold,
            Comparator::GreaterThan => value > self.threshold,
            Comparator::Always => true,
        }
    }

    /// Splits `interval` into the part this rule matches and the part it does not.
    ///
    /// The two halves are disjoint and together recreate `interval`; either may
    /// be `None` when it would be empty.
    pub fn split(&self, interval: &Interval) -> (Option<Interval>, Option<Interval>) {
        match self.comparator {
            Comparator::LessThan => (
                interval.below(self.threshold),
                interval.at_or_above(self.threshold),
            ),
            Comparator::GreaterThan => (
                interval.above(self.threshold),
                interval.at_or_below(self.threshold),
            ),
            Comparator::Always => (Some(*interval), None),
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.comparator {
            Comparator::LessThan => write!(f, "{}<{}:{}", self.axis, self.threshold, self.target),
            Comparator::GreaterThan => {
                write!(f, "{}>{}:{}", self.axis, self.threshold, self.target)
            }
            Comparator::Always => write!(f, "{}", self.target),
        }
    }
}

/// A named, ordered list of rules as produced by the parsing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkflowDef {
    pub name: String,
    pub rules: Vec<Rule>,
}

impl WorkflowDef {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }
}

impl Display for WorkflowDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{{", self.name)?;
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", rule)?;
        }
        f.write_str("}")
    }
}
