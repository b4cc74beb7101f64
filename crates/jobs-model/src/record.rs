//! Raw and cleaned posting records.

use serde::{Deserialize, Serialize};

use crate::sentinel;

/// One job posting as it appears in the source CSV.
///
/// Field renames match the source headers verbatim. `rating` is `Option`
/// because blank cells deserialize as `None`; the `-1.0` sentinel is a
/// present value and is resolved separately via [`RawPosting::known_rating`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPosting {
    #[serde(rename = "Salary Estimate")]
    pub salary_estimate: String,
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Headquarters")]
    pub headquarters: String,
    #[serde(rename = "Job Description")]
    pub job_description: String,
}

impl RawPosting {
    /// Rating with both the blank cell and the `-1.0` sentinel mapped to `None`.
    pub fn known_rating(&self) -> Option<f64> {
        self.rating.and_then(sentinel::known_rating)
    }

    /// Headquarters with the `"-1"` sentinel mapped to `None`.
    pub fn known_headquarters(&self) -> Option<&str> {
        sentinel::known_text(&self.headquarters)
    }

    /// True when any column used downstream is missing.
    ///
    /// Blank text cells and an absent rating count as missing; sentinel
    /// values do not, since the transform resolves those itself.
    pub fn has_missing_fields(&self) -> bool {
        self.rating.is_none()
            || self.salary_estimate.is_empty()
            || self.company_name.is_empty()
            || self.location.is_empty()
            || self.headquarters.is_empty()
            || self.job_description.is_empty()
    }
}

/// One cleaned posting, column order as written to the cleaned dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanPosting {
    pub min_salary: i64,
    pub max_salary: i64,
    /// Salary spread (`max_salary - min_salary`). The name is inherited from
    /// the source dataset; it is not a statistical median.
    pub med_salary: i64,
    /// Truncated average of the salary bounds.
    pub range_salary: i64,
    pub company_name: String,
    pub rating: f64,
    pub location: String,
    pub headquarters: String,
    /// Matched skill tags in vocabulary order, never empty: records with no
    /// match carry the singleton `["None"]`.
    pub techtools: Vec<String>,
}
