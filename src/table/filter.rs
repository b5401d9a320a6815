//! Row filters of the form `<header> <op> <value>`.

use std::fmt;
use std::str::FromStr;

/// Comparison applied to a cell's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Equal,
    NotEqual,
    GreaterOrEqual,
    LessOrEqual,
    Greater,
    Less,
}

impl Comparator {
    /// Lexicographic comparison: `"10" < "9"` holds.
    pub fn matches(self, text: &str, value: &str) -> bool {
        match self {
            Comparator::Equal => text == value,
            Comparator::NotEqual => text != value,
            Comparator::GreaterOrEqual => text >= value,
            Comparator::LessOrEqual => text <= value,
            Comparator::Greater => text > value,
            Comparator::Less => text < value,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
            Comparator::GreaterOrEqual => ">=",
            Comparator::LessOrEqual => "<=",
            Comparator::Greater => ">",
            Comparator::Less => "<",
        }
    }
}

impl FromStr for Comparator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(Comparator::Equal),
            "!=" => Ok(Comparator::NotEqual),
            ">=" => Ok(Comparator::GreaterOrEqual),
            "<=" => Ok(Comparator::LessOrEqual),
            ">" => Ok(Comparator::Greater),
            "<" => Ok(Comparator::Less),
            _ => Err(()),
        }
    }
}

/// A parsed filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDef {
    pub header: String,
    pub comparator: Comparator,
    pub value: String,
}

impl FilterDef {
    /// Parse exactly three space-separated parts. Anything else is `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let parts: Vec<&str> = text.split(' ').collect();
        let [header, comparator, value] = parts.as_slice() else {
            return None;
        };
        Some(Self {
            header: header.to_string(),
            comparator: comparator.parse().ok()?,
            value: value.to_string(),
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.comparator.matches(text, &self.value)
    }
}

impl fmt::Display for FilterDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.header, self.comparator.symbol(), self.value)
    }
}
