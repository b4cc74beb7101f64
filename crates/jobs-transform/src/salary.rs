//! Salary-estimate parsing.
//!
//! Source values look like `"$53K-$91K (Glassdoor est.)"` with varying
//! spacing. Parsing truncates at the first `(`, strips every `K`, `$`, and
//! whitespace character, then splits the remainder on `-` into exactly two
//! integer bounds.

use std::fmt;

/// A parsed salary range in thousands, as listed in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

impl SalaryRange {
    /// Difference between the bounds. Written to the cleaned dataset as
    /// `med_salary`, a name inherited from the source schema even though
    /// the value is a spread, not a median.
    pub fn spread(&self) -> i64 {
        self.max - self.min
    }

    /// Average of the bounds with truncating integer division.
    pub fn midpoint(&self) -> i64 {
        (self.max + self.min) / 2
    }
}

/// Why a salary estimate failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalaryParseReason {
    /// No `-` remained after stripping, so there is no min/max pair.
    NoSeparator,
    /// More than one `-` remained, so the bounds are ambiguous.
    MultipleSeparators,
    /// One side of the `-` is not an integer.
    InvalidBound(String),
}

impl fmt::Display for SalaryParseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSeparator => write!(f, "no '-' between salary bounds"),
            Self::MultipleSeparators => write!(f, "more than one '-' between salary bounds"),
            Self::InvalidBound(bound) => write!(f, "salary bound '{bound}' is not an integer"),
        }
    }
}

/// Parse a salary-estimate string into its integer bounds.
pub fn parse_salary_estimate(value: &str) -> Result<SalaryRange, SalaryParseReason> {
    // Drop the trailing annotation, e.g. "(Glassdoor est.)".
    let truncated = value.split('(').next().unwrap_or(value);
    let cleaned: String = truncated
        .chars()
        .filter(|c| *c != 'K' && *c != '$' && !c.is_whitespace())
        .collect();

    let parts: Vec<&str> = cleaned.split('-').collect();
    match parts.len() {
        0 | 1 => Err(SalaryParseReason::NoSeparator),
        2 => {
            let min = parse_bound(parts[0])?;
            let max = parse_bound(parts[1])?;
            Ok(SalaryRange { min, max })
        }
        _ => Err(SalaryParseReason::MultipleSeparators),
    }
}

fn parse_bound(bound: &str) -> Result<i64, SalaryParseReason> {
    bound
        .parse()
        .map_err(|_| SalaryParseReason::InvalidBound(bound.to_string()))
}
