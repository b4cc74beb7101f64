//! Error types for the normalization transform.

use thiserror::Error;

use crate::salary::SalaryParseReason;

/// Errors surfaced by the normalization transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A row's salary estimate could not be decomposed into a min/max pair.
    ///
    /// `row` is the zero-based position in the input batch before
    /// dedup/drop-missing filtering, so it can be traced back to the source
    /// file.
    #[error("malformed salary estimate in row {row} ('{value}'): {reason}")]
    MalformedSalary {
        row: usize,
        value: String,
        reason: SalaryParseReason,
    },
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::MalformedSalary {
            row: 7,
            value: "Employer Provided Salary:$50K".to_string(),
            reason: SalaryParseReason::NoSeparator,
        };
        assert_eq!(
            err.to_string(),
            "malformed salary estimate in row 7 ('Employer Provided Salary:$50K'): \
             no '-' between salary bounds"
        );
    }
}
