use chrono::Utc;
use tracing::debug;

use super::topics::{FALLBACK, TOPIC_RULES, TopicTemplate};
use crate::models::AnswerResult;

/// Confidence reported with every answer. Not derived from the query.
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.85;

/// Select the template for a query: first matching rule in priority order, else the fallback
pub fn select_template(query: &str) -> &'static TopicTemplate {
    let lowered = query.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.template)
        .unwrap_or(FALLBACK)
}

/// Build a canned answer for a query.
///
/// Total over any string; callers skip blank input before calling. Never sleeps, the
/// simulated latency belongs to [`SearchSession`](super::session::SearchSession).
///
/// # Examples
///
/// ```
/// use dog_training_assistant::assistant::synthesize;
/// use dog_training_assistant::models::Topic;
///
/// let result = synthesize("Why does my dog SNIFF everything?");
/// assert_eq!(result.topic, Topic::Sniffing);
/// assert_eq!(result.suggestion_list.len(), 4);
/// ```
pub fn synthesize(query: &str) -> AnswerResult {
    let template = select_template(query);
    debug!(topic = ?template.topic, "synthesized answer");

    AnswerResult {
        topic: template.topic,
        answer_text: template.answer.to_string(),
        source_list: template.sources.iter().map(|s| s.to_string()).collect(),
        suggestion_list: template.suggestions.iter().map(|s| s.to_string()).collect(),
        confidence_score: PLACEHOLDER_CONFIDENCE,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::topics::DEFAULT_SOURCES;
    use crate::models::Topic;

    #[test]
    fn test_sniffing_keywords_any_case() {
        for query in ["my dog sniffs a lot", "SMELL obsessed", "Sniffing on walks"] {
            assert_eq!(synthesize(query).topic, Topic::Sniffing, "query: {}", query);
        }
    }

    #[test]
    fn test_biting_keywords() {
        assert_eq!(synthesize("How to stop puppy biting?").topic, Topic::Biting);
        assert_eq!(synthesize("she nips at my hands").topic, Topic::Biting);
        assert_eq!(synthesize("will he bite").topic, Topic::Biting);
    }

    #[test]
    fn test_leash_keywords() {
        assert_eq!(synthesize("My dog pulls on the leash").topic, Topic::Leash);
        assert_eq!(synthesize("walk training").topic, Topic::Leash);
    }

    #[test]
    fn test_priority_order_sniff_beats_leash() {
        // Matches both the sniffing and leash sets; sniffing is checked first
        let result = synthesize("he sniffs and pulls on every walk");
        assert_eq!(result.topic, Topic::Sniffing);
    }

    #[test]
    fn test_priority_order_bite_beats_leash() {
        assert_eq!(synthesize("bites the leash").topic, Topic::Biting);
    }

    #[test]
    fn test_generic_fallback() {
        let result = synthesize("How to teach a dog to stay?");
        assert_eq!(result.topic, Topic::General);
        assert_eq!(
            result.suggestion_list,
            FALLBACK.suggestions.iter().map(|s| s.to_string()).collect::<Vec<_>>()
        );
        assert_eq!(
            result.source_list,
            DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_confidence_is_constant() {
        assert_eq!(synthesize("sniff").confidence_score, PLACEHOLDER_CONFIDENCE);
        assert_eq!(synthesize("anything").confidence_score, PLACEHOLDER_CONFIDENCE);
    }

    #[test]
    fn test_always_four_suggestions() {
        for query in ["sniff", "bite", "leash", "crate", ""] {
            assert_eq!(synthesize(query).suggestion_list.len(), 4);
        }
    }
}
