//! Question sub-engine.
//!
//! Dispatches an interrogative utterance on its question word, then walks
//! that word's sub-patterns in order. Every word ends in a generic reply, so
//! [`answer`] always produces something.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::clock::Clock;
use super::matcher::Utterance;
use super::replies;

/// Question words in dispatch precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionWord {
    What,
    How,
    Why,
    When,
    Where,
    Who,
}

impl QuestionWord {
    pub const ALL: [QuestionWord; 6] = [
        QuestionWord::What,
        QuestionWord::How,
        QuestionWord::Why,
        QuestionWord::When,
        QuestionWord::Where,
        QuestionWord::Who,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            QuestionWord::What => "what",
            QuestionWord::How => "how",
            QuestionWord::Why => "why",
            QuestionWord::When => "when",
            QuestionWord::Where => "where",
            QuestionWord::Who => "who",
        }
    }

    /// First question word contained in the utterance.
    pub fn detect(utterance: &Utterance) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|word| utterance.contains(word.keyword()))
    }

    fn patterns(&self) -> &'static [SubPattern] {
        match self {
            QuestionWord::What => WHAT_PATTERNS,
            QuestionWord::How => HOW_PATTERNS,
            QuestionWord::Why => WHY_PATTERNS,
            QuestionWord::When => WHEN_PATTERNS,
            QuestionWord::Where => WHERE_PATTERNS,
            QuestionWord::Who => WHO_PATTERNS,
        }
    }

    fn generic_reply(&self) -> &'static str {
        match self {
            QuestionWord::What | QuestionWord::How => replies::QUESTION_GENERIC,
            QuestionWord::Why => replies::WHY_GENERIC,
            QuestionWord::When => replies::WHEN_GENERIC,
            QuestionWord::Where => replies::WHERE_GENERIC,
            QuestionWord::Who => replies::WHO_GENERIC,
        }
    }
}

impl fmt::Display for QuestionWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

enum Answer {
    Fixed(&'static str),
    CurrentTime,
}

/// One sub-pattern: any of `phrases` and, if non-empty, any of `topics`.
struct SubPattern {
    name: &'static str,
    phrases: &'static [&'static str],
    topics: &'static [&'static str],
    answer: Answer,
}

impl SubPattern {
    fn matches(&self, utterance: &Utterance) -> bool {
        utterance.contains_any(self.phrases)
            && (self.topics.is_empty() || utterance.contains_any(self.topics))
    }
}

const WHAT_IS: &[&str] = &["what is", "what are"];

static WHAT_PATTERNS: &[SubPattern] = &[
    SubPattern {
        name: "ai",
        phrases: WHAT_IS,
        topics: &["ai", "artificial intelligence"],
        answer: Answer::Fixed(replies::WHAT_AI),
    },
    SubPattern {
        name: "javascript",
        phrases: WHAT_IS,
        topics: &["javascript", "js"],
        answer: Answer::Fixed(replies::WHAT_JAVASCRIPT),
    },
    SubPattern {
        name: "react",
        phrases: WHAT_IS,
        topics: &["react"],
        answer: Answer::Fixed(replies::WHAT_REACT),
    },
    SubPattern {
        name: "passion",
        phrases: WHAT_IS,
        topics: &["love", "favorite"],
        answer: Answer::Fixed(replies::WHAT_PASSION),
    },
    SubPattern {
        name: "capabilities",
        phrases: &["what can", "what do"],
        topics: &[],
        answer: Answer::Fixed(replies::WHAT_CAPABILITIES),
    },
    SubPattern {
        name: "time",
        phrases: &["what time", "what's the time"],
        topics: &[],
        answer: Answer::CurrentTime,
    },
];

static HOW_PATTERNS: &[SubPattern] = &[
    SubPattern {
        name: "wellbeing",
        phrases: &["how are", "how do you"],
        topics: &[],
        answer: Answer::Fixed(replies::HOW_WELLBEING),
    },
    SubPattern {
        name: "age",
        phrases: &["how old", "how long"],
        topics: &[],
        answer: Answer::Fixed(replies::HOW_AGE),
    },
    SubPattern {
        name: "how_to",
        phrases: &["how to", "how can"],
        topics: &[],
        answer: Answer::Fixed(replies::HOW_TO),
    },
];

static WHY_PATTERNS: &[SubPattern] = &[SubPattern {
    name: "purpose",
    phrases: &["why are you", "why do you"],
    topics: &[],
    answer: Answer::Fixed(replies::WHY_PURPOSE),
}];

static WHEN_PATTERNS: &[SubPattern] = &[SubPattern {
    name: "history",
    phrases: &["when did", "when was"],
    topics: &[],
    answer: Answer::Fixed(replies::WHEN_HISTORY),
}];

static WHERE_PATTERNS: &[SubPattern] = &[SubPattern {
    name: "location",
    phrases: &["where are you", "where do you"],
    topics: &[],
    answer: Answer::Fixed(replies::WHERE_LOCATION),
}];

static WHO_PATTERNS: &[SubPattern] = &[SubPattern {
    name: "identity",
    phrases: &["who are you", "who is"],
    topics: &[],
    answer: Answer::Fixed(replies::WHO_IDENTITY),
}];

/// Name reported when no sub-pattern matched.
pub const GENERIC_PATTERN: &str = "generic";

/// Result of the question sub-engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionAnswer {
    /// Question word that selected the pattern table. `None` only when the
    /// utterance had no question word at all.
    pub word: Option<QuestionWord>,
    /// Name of the sub-pattern that fired, or [`GENERIC_PATTERN`].
    pub pattern: &'static str,
    pub reply: String,
}

/// Answers an interrogative utterance.
pub fn answer(utterance: &Utterance, clock: &dyn Clock) -> QuestionAnswer {
    let Some(word) = QuestionWord::detect(utterance) else {
        return QuestionAnswer {
            word: None,
            pattern: GENERIC_PATTERN,
            reply: replies::QUESTION_GENERIC.to_string(),
        };
    };

    let hit = word.patterns().iter().find(|p| p.matches(utterance));
    let (pattern, reply) = match hit {
        Some(SubPattern {
            name,
            answer: Answer::Fixed(text),
            ..
        }) => (*name, text.to_string()),
        Some(SubPattern {
            name,
            answer: Answer::CurrentTime,
            ..
        }) => (
            *name,
            format!(
                "It's currently {}. Are you planning something special?",
                clock.time_string()
            ),
        ),
        None => (GENERIC_PATTERN, word.generic_reply().to_string()),
    };

    QuestionAnswer {
        word: Some(word),
        pattern,
        reply,
    }
}
