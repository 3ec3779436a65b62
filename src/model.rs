//! Recommendation payload types as returned by the recommendations endpoint.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Proficiency level of a competency, in cycling order.
///
/// Serialized lowercase. Parsing ignores case and surrounding whitespace,
/// so "Advanced" from the API is accepted; any other word is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

pub const LEVEL_ORDER: [Level; 4] = [
    Level::Beginner,
    Level::Intermediate,
    Level::Advanced,
    Level::Expert,
];

impl Level {
    /// Position of this level in [`LEVEL_ORDER`].
    pub fn index(self) -> usize {
        match self {
            Level::Beginner => 0,
            Level::Intermediate => 1,
            Level::Advanced => 2,
            Level::Expert => 3,
        }
    }

    /// The following level, wrapping from expert back to beginner.
    pub fn next(self) -> Level {
        LEVEL_ORDER[(self.index() + 1) % LEVEL_ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
            Level::Expert => "expert",
        }
    }

    /// CSS class that colours the level badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Level::Beginner => "level-beginner",
            Level::Intermediate => "level-intermediate",
            Level::Advanced => "level-advanced",
            Level::Expert => "level-expert",
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LEVEL_ORDER
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown level '{}'", s))
    }
}

impl TryFrom<String> for Level {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A suggested skill or competency for an employee.
///
/// Items carrying a `level` are competencies; the rest are plain skills.
/// `is_rejected` and `is_approved` are review annotations that only exist
/// in the browser and are never read from or written to the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub id: String,
    pub name: String,
    /// Match percentage in 0..=100; may be fractional
    pub confidence: f64,
    pub level: Option<Level>,
    pub reasoning: Option<String>,
    #[serde(skip)]
    pub is_rejected: bool,
    #[serde(skip)]
    pub is_approved: bool,
}

impl RecommendationItem {
    pub fn is_competency(&self) -> bool {
        self.level.is_some()
    }

    pub fn has_reasoning(&self) -> bool {
        self.reasoning
            .as_deref()
            .is_some_and(|r| !r.trim().is_empty())
    }

    /// "95% match", "87.5% match"
    pub fn confidence_label(&self) -> String {
        format!("{}% match", self.confidence)
    }
}

/// Recommendations for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecommendationSet {
    pub employee_id: String,
    pub employee_name: String,
    pub recommendations: Vec<RecommendationItem>,
}

/// Stable sort by confidence, highest first. Equal confidences keep their
/// payload order.
pub fn sort_by_confidence(items: &mut [RecommendationItem]) {
    items.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}

/// Parse a response body into a display-ready set: ids checked for
/// uniqueness and items sorted by confidence.
pub fn parse_recommendation_set(body: &str) -> Result<EmployeeRecommendationSet, FetchError> {
    let mut set: EmployeeRecommendationSet = serde_json::from_str(body)?;

    let mut seen = HashSet::new();
    for item in &set.recommendations {
        if !seen.insert(item.id.as_str()) {
            return Err(FetchError::Parse(format!(
                "duplicate recommendation id '{}'",
                item.id
            )));
        }
    }

    sort_by_confidence(&mut set.recommendations);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, confidence: f64) -> RecommendationItem {
        RecommendationItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            confidence,
            level: None,
            reasoning: None,
            is_rejected: false,
            is_approved: false,
        }
    }

    #[test]
    fn test_level_next_wraps() {
        assert_eq!(Level::Beginner.next(), Level::Intermediate);
        assert_eq!(Level::Intermediate.next(), Level::Advanced);
        assert_eq!(Level::Advanced.next(), Level::Expert);
        assert_eq!(Level::Expert.next(), Level::Beginner);
    }

    #[test]
    fn test_level_serde_lowercase() {
        let level: Level = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(level, Level::Advanced);
        assert_eq!(serde_json::to_string(&Level::Expert).unwrap(), "\"expert\"");
        assert!(serde_json::from_str::<Level>("\"guru\"").is_err());
    }

    #[test]
    fn test_level_parse_ignores_case() {
        let level: Level = serde_json::from_str("\"Advanced\"").unwrap();
        assert_eq!(level, Level::Advanced);
        let level: Level = serde_json::from_str("\" EXPERT \"").unwrap();
        assert_eq!(level, Level::Expert);
        assert_eq!(" Beginner".parse::<Level>(), Ok(Level::Beginner));
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let mut items = vec![
            item("a", 70.0),
            item("b", 92.0),
            item("c", 70.0),
            item("d", 85.5),
            item("e", 70.0),
        ];
        sort_by_confidence(&mut items);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_parse_ignores_client_flags_and_extra_fields() {
        let body = r#"{
            "employee_id": "11707953",
            "employee_name": "Dana Reyes",
            "source": "agent_v2",
            "recommendations": [
                {"id": "1", "name": "CI/CD", "confidence": 85, "level": "intermediate",
                 "reasoning": "Maintains the release pipeline", "is_rejected": true}
            ]
        }"#;
        let set = parse_recommendation_set(body).unwrap();

        let first = &set.recommendations[0];
        assert_eq!(first.level, Some(Level::Intermediate));
        assert!(!first.is_rejected, "Rejection is never taken from the payload");
        assert!(!first.is_approved);
        assert!(first.has_reasoning());
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let body = r#"{
            "employee_id": "1",
            "employee_name": "X",
            "recommendations": [
                {"id": "1", "name": "A", "confidence": 50},
                {"id": "1", "name": "B", "confidence": 60}
            ]
        }"#;
        match parse_recommendation_set(body) {
            Err(FetchError::Parse(msg)) => assert!(msg.contains("duplicate"), "got: {}", msg),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_level_fails() {
        let body = r#"{
            "employee_id": "1",
            "employee_name": "X",
            "recommendations": [{"id": "1", "name": "A", "confidence": 50, "level": "guru"}]
        }"#;
        assert!(matches!(
            parse_recommendation_set(body),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn test_confidence_label() {
        assert_eq!(item("a", 95.0).confidence_label(), "95% match");
        assert_eq!(item("b", 87.5).confidence_label(), "87.5% match");
    }

    #[test]
    fn test_blank_reasoning_is_not_shown() {
        let mut blank = item("a", 10.0);
        blank.reasoning = Some("   ".to_string());
        assert!(!blank.has_reasoning());
    }
}
