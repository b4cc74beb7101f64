//! Company, rating, and headquarters reconciliation.

/// Company name before the first embedded line break.
///
/// Source values sometimes carry a rating suffix on a second line, e.g.
/// `"Tecolote Research\n3.8"`.
pub fn primary_company_name(raw: &str) -> &str {
    raw.split('\n').next().unwrap_or(raw)
}

/// Rating with the missing sentinel normalized to `0.0`.
///
/// Takes the already-resolved value from
/// [`jobs_model::RawPosting::known_rating`].
pub fn normalize_rating(rating: Option<f64>) -> f64 {
    rating.unwrap_or(0.0)
}

/// Headquarters with the missing sentinel replaced by the row's location.
pub fn resolve_headquarters<'a>(headquarters: Option<&'a str>, location: &'a str) -> &'a str {
    headquarters.unwrap_or(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_name_before_line_break() {
        assert_eq!(
            primary_company_name("Tecolote Research\n3.8"),
            "Tecolote Research"
        );
    }

    #[test]
    fn test_company_name_without_line_break() {
        assert_eq!(primary_company_name("Tecolote Research"), "Tecolote Research");
    }

    #[test]
    fn test_rating_sentinel_becomes_zero() {
        assert_eq!(normalize_rating(None), 0.0);
    }

    #[test]
    fn test_rating_passthrough() {
        assert_eq!(normalize_rating(Some(3.8)), 3.8);
    }

    #[test]
    fn test_headquarters_falls_back_to_location() {
        assert_eq!(resolve_headquarters(None, "Goleta, CA"), "Goleta, CA");
    }

    #[test]
    fn test_headquarters_passthrough() {
        assert_eq!(
            resolve_headquarters(Some("Boston, MA"), "Goleta, CA"),
            "Boston, MA"
        );
    }
}
