//! The fixed inference-rule table and seed-rule configuration parsing.

use std::fmt;
use std::str::FromStr;

/// A logical connective an inference rule operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
    Implication,
    Equivalence,
    Negation,
}

impl Connective {
    /// The display symbol of the connective.
    pub fn symbol(self) -> char {
        match self {
            Connective::And => '∧',
            Connective::Or => '∨',
            Connective::Implication => '→',
            Connective::Equivalence => '↔',
            Connective::Negation => '¬',
        }
    }
}

/// Whether a rule introduces or eliminates its connective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Introduction,
    Elimination,
}

impl RuleKind {
    /// The display suffix of the rule kind.
    pub fn suffix(self) -> char {
        match self {
            RuleKind::Introduction => 'I',
            RuleKind::Elimination => 'E',
        }
    }
}

/// Number of input placeholders a rule of this shape exposes.
///
/// The table is closed: both enums are exhaustive, so a pair outside it is
/// unrepresentable by construction.
pub fn premise_count(kind: RuleKind, connective: Connective) -> usize {
    match (kind, connective) {
        (RuleKind::Introduction, Connective::And) => 2,
        (RuleKind::Introduction, Connective::Or) => 1,
        (RuleKind::Introduction, Connective::Implication) => 1,
        (RuleKind::Introduction, Connective::Equivalence) => 2,
        (RuleKind::Introduction, Connective::Negation) => 1,
        (RuleKind::Elimination, Connective::And) => 1,
        (RuleKind::Elimination, Connective::Or) => 3,
        (RuleKind::Elimination, Connective::Implication) => 2,
        (RuleKind::Elimination, Connective::Equivalence) => 2,
        (RuleKind::Elimination, Connective::Negation) => 1,
    }
}

/// Display label of a rule, e.g. "∨E" for (elimination, or).
pub fn rule_label(kind: RuleKind, connective: Connective) -> String {
    let mut label = String::new();
    label.push(connective.symbol());
    label.push(kind.suffix());
    label
}

/// Error raised while parsing seed-rule configuration text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseRuleError {
    UnknownRuleKind(String),
    UnknownConnective(String),
    MalformedSeed(String),
    MalformedCoordinates(String),
}

impl fmt::Display for ParseRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseRuleError::UnknownRuleKind(token) => {
                write!(f, "unknown rule kind {token:?}; expected intro or elim")
            }
            ParseRuleError::UnknownConnective(token) => write!(
                f,
                "unknown connective {token:?}; expected and, or, implication, equivalence or negation"
            ),
            ParseRuleError::MalformedSeed(text) => write!(
                f,
                "malformed seed rule {text:?}; expected <kind>-<connective>@<x>,<y>"
            ),
            ParseRuleError::MalformedCoordinates(text) => {
                write!(f, "malformed seed coordinates {text:?}; expected <x>,<y>")
            }
        }
    }
}

impl std::error::Error for ParseRuleError {}

impl FromStr for RuleKind {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intro" | "introduction" => Ok(RuleKind::Introduction),
            "elim" | "elimination" => Ok(RuleKind::Elimination),
            other => Err(ParseRuleError::UnknownRuleKind(other.to_string())),
        }
    }
}

impl FromStr for Connective {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Connective::And),
            "or" => Ok(Connective::Or),
            "implication" => Ok(Connective::Implication),
            "equivalence" => Ok(Connective::Equivalence),
            "negation" => Ok(Connective::Negation),
            other => Err(ParseRuleError::UnknownConnective(other.to_string())),
        }
    }
}

/// A rule placed on the canvas at startup.
///
/// The textual form is `<kind>-<connective>@<x>,<y>`, e.g.
/// `intro-and@100,100`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedRule {
    pub x: f32,
    pub y: f32,
    pub kind: RuleKind,
    pub connective: Connective,
}

impl SeedRule {
    pub fn new(x: f32, y: f32, kind: RuleKind, connective: Connective) -> Self {
        Self {
            x,
            y,
            kind,
            connective,
        }
    }
}

impl FromStr for SeedRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (shape, coordinates) = s
            .split_once('@')
            .ok_or_else(|| ParseRuleError::MalformedSeed(s.to_string()))?;
        let (kind, connective) = shape
            .split_once('-')
            .ok_or_else(|| ParseRuleError::MalformedSeed(s.to_string()))?;
        let (x, y) = coordinates
            .split_once(',')
            .ok_or_else(|| ParseRuleError::MalformedCoordinates(coordinates.to_string()))?;
        let parse_axis = |token: &str| {
            token
                .trim()
                .parse::<f32>()
                .map_err(|_| ParseRuleError::MalformedCoordinates(coordinates.to_string()))
        };
        Ok(SeedRule {
            x: parse_axis(x)?,
            y: parse_axis(y)?,
            kind: kind.parse()?,
            connective: connective.parse()?,
        })
    }
}
