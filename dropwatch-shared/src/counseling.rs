//! Canned replies for the counselor chat.
//!
//! The automated counselor matches on keywords in the student's message;
//! human counselors answer with a fixed acknowledgement until a real
//! conversation starts.

/// Reply sent on behalf of a human counselor.
pub const COUNSELOR_ACKNOWLEDGEMENT: &str =
    "Thank you for reaching out. I understand your concern. Let's discuss this further.";

const FALLBACK_REPLY: &str = "Thanks for sharing. Can you provide more details so I can help better?";

/// Keyword groups checked in order; the first group with a match wins.
const RULES: [(&[&str], &str); 3] = [
    (
        &["stress", "anx"],
        "I'm sorry you're feeling stressed. Try breaking tasks into smaller steps and consider scheduling a short counseling session.",
    ),
    (
        &["attendance", "absent"],
        "Attendance issues can often be addressed by setting a small daily routine. Would you like resources on time management?",
    ),
    (
        &["grades", "score"],
        "Consider forming a study group and reaching out to your instructors early. I can suggest study resources.",
    ),
];

/// Automated counselor reply to `message`. Matching is case-insensitive
/// and works on substrings, so "anxious" matches the stress rule.
#[must_use]
pub fn ai_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| message.contains(keyword)))
        .map_or(FALLBACK_REPLY, |(_, reply)| *reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("I am so stressed about exams", "stressed" ; "stress")]
    #[test_case("Feeling ANXIOUS lately", "stressed" ; "anxiety uppercase")]
    #[test_case("I was absent twice this week", "daily routine" ; "absence")]
    #[test_case("my attendance dropped", "daily routine" ; "attendance")]
    #[test_case("How do I improve my grades?", "study group" ; "grades")]
    #[test_case("low test score", "study group" ; "score")]
    #[test_case("hello", "more details" ; "fallback")]
    #[test_case("", "more details" ; "empty")]
    fn replies_by_keyword(message: &str, expected_fragment: &str) {
        assert!(
            ai_reply(message).contains(expected_fragment),
            "{message:?} -> {}",
            ai_reply(message)
        );
    }

    #[test]
    fn earlier_rules_win() {
        assert!(ai_reply("stress about my grades").contains("stressed"));
    }
}
