//! Skill-tag extraction from free-text job descriptions.
//!
//! The vocabulary is fixed and ordered; matches collect in vocabulary
//! order. Most tokens are plain substring matches against the lower-cased
//! description, so `java` also fires inside `javascript` and `go` inside
//! `google`. That false-positive source is inherited from the upstream
//! dataset definition and is pinned by tests rather than corrected. Only
//! the single-letter languages `r` and `c` match as exact words to keep
//! them from firing inside ordinary prose.

/// Tag recorded when no vocabulary token matches a description.
pub const TECHTOOLS_NONE: &str = "None";

/// How a vocabulary token matches against the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Plain substring containment.
    Substring,
    /// Exact word: no alphanumeric or `_` neighbor on either side.
    ExactWord,
}

/// One entry of the skill vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct SkillToken {
    pub tag: &'static str,
    pub kind: MatchKind,
}

const fn substring(tag: &'static str) -> SkillToken {
    SkillToken {
        tag,
        kind: MatchKind::Substring,
    }
}

const fn exact_word(tag: &'static str) -> SkillToken {
    SkillToken {
        tag,
        kind: MatchKind::ExactWord,
    }
}

/// The fixed skill vocabulary, in reporting order.
pub const SKILL_VOCABULARY: &[SkillToken] = &[
    substring("python"),
    substring("java"),
    substring("c++"),
    substring("javascript"),
    substring("tensorflow"),
    substring("pytorch"),
    substring("computer vision"),
    substring("spark"),
    substring("mlops"),
    substring("ci/cd"),
    substring("data cleaning"),
    substring("data manipulation"),
    substring("etl"),
    substring("elt"),
    substring("tableau"),
    substring("power bi"),
    substring("big data"),
    substring("docker"),
    substring("kubernetes"),
    substring("hadoop"),
    substring("kafka"),
    substring("aws"),
    substring("google cloud"),
    substring("azure"),
    substring("mongodb"),
    substring("kibana"),
    substring("elasticsearch"),
    substring("airflow"),
    substring("scala"),
    substring("go"),
    substring("rust"),
    exact_word("r"),
    substring("dashboard"),
    substring("google looker"),
    substring("c#"),
    exact_word("c"),
];

/// Extract the skill tags matched by a job description.
///
/// Returns tags in vocabulary order; an empty match set becomes the
/// singleton `["None"]`, so the result is never empty. Per-record and
/// stateless.
pub fn extract_techtools(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();
    let mut tags = Vec::new();
    for token in SKILL_VOCABULARY {
        let matched = match token.kind {
            MatchKind::Substring => lowered.contains(token.tag),
            MatchKind::ExactWord => contains_word(&lowered, token.tag),
        };
        if matched {
            tags.push(token.tag.to_string());
        }
    }
    if tags.is_empty() {
        tags.push(TECHTOOLS_NONE.to_string());
    }
    tags
}

/// Substring containment with word boundaries on both sides.
fn contains_word(haystack: &str, needle: &str) -> bool {
    let bytes = haystack.as_bytes();
    let mut search_from = 0;
    while let Some(offset) = haystack[search_from..].find(needle) {
        let begin = search_from + offset;
        let end = begin + needle.len();
        let left_bounded = begin == 0 || !is_word_byte(bytes[begin - 1]);
        let right_bounded = end == bytes.len() || !is_word_byte(bytes[end]);
        if left_bounded && right_bounded {
            return true;
        }
        search_from = begin + 1;
    }
    false
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_in_vocabulary_order() {
        let tags = extract_techtools("We use Kubernetes and Python daily.");
        assert_eq!(tags, vec!["python".to_string(), "kubernetes".to_string()]);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let tags = extract_techtools("TENSORFLOW and PyTorch experience");
        assert_eq!(
            tags,
            vec!["tensorflow".to_string(), "pytorch".to_string()]
        );
    }

    #[test]
    fn test_no_match_yields_none_singleton() {
        let tags = extract_techtools("Great benefits and free snacks.");
        assert_eq!(tags, vec![TECHTOOLS_NONE.to_string()]);
    }

    #[test]
    fn test_java_matches_inside_javascript() {
        // Known substring false positive, kept to match the upstream
        // vocabulary semantics.
        let tags = extract_techtools("Frontend role: JavaScript only.");
        assert_eq!(tags, vec!["java".to_string(), "javascript".to_string()]);
    }

    #[test]
    fn test_go_matches_inside_google() {
        let tags = extract_techtools("Ads team at Google.");
        assert_eq!(tags, vec!["go".to_string()]);
    }

    #[test]
    fn test_r_requires_word_boundary() {
        assert_eq!(
            extract_techtools("Analytics in R and SQL."),
            vec!["r".to_string()]
        );
        // "r" inside ordinary words must not fire.
        assert_eq!(
            extract_techtools("Strong writing required."),
            vec![TECHTOOLS_NONE.to_string()]
        );
    }

    #[test]
    fn test_c_requires_word_boundary() {
        assert_eq!(
            extract_techtools("Embedded work in C."),
            vec!["c".to_string()]
        );
        assert_eq!(
            extract_techtools("Welcome to our clinic."),
            vec![TECHTOOLS_NONE.to_string()]
        );
    }

    #[test]
    fn test_c_plus_plus_and_c_sharp() {
        let tags = extract_techtools("Systems roles: C++ and C# welcome.");
        assert_eq!(
            tags,
            vec!["c++".to_string(), "c#".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_multiword_tokens() {
        let tags = extract_techtools("Computer vision plus big data on Google Cloud.");
        // "go" rides along inside "google", in vocabulary order.
        assert_eq!(
            tags,
            vec![
                "computer vision".to_string(),
                "big data".to_string(),
                "google cloud".to_string(),
                "go".to_string(),
            ]
        );
    }

    #[test]
    fn test_vocabulary_size_and_word_tokens() {
        assert_eq!(SKILL_VOCABULARY.len(), 36);
        let word_tokens: Vec<&str> = SKILL_VOCABULARY
            .iter()
            .filter(|token| token.kind == MatchKind::ExactWord)
            .map(|token| token.tag)
            .collect();
        assert_eq!(word_tokens, vec!["r", "c"]);
    }
}
