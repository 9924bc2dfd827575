//! Ordered rule table for the rule-based responder.
//!
//! [`RULES`] is evaluated top to bottom and the first rule whose trigger
//! fires produces the reply. The last entry always fires.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::matcher::Utterance;
use super::replies;

/// Identifies which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Question,
    MusicFollowUp,
    FoodFollowUp,
    Greeting,
    Status,
    Capabilities,
    Identity,
    Time,
    Date,
    Weather,
    Technology,
    Help,
    Farewell,
    Gratitude,
    QuestionMark,
    Compliment,
    Happy,
    Sad,
    Preference,
    Food,
    Music,
    Work,
    Sports,
    Travel,
    Books,
    Short,
    Default,
}

impl RuleId {
    pub fn label(&self) -> &'static str {
        match self {
            RuleId::Question => "question",
            RuleId::MusicFollowUp => "music_follow_up",
            RuleId::FoodFollowUp => "food_follow_up",
            RuleId::Greeting => "greeting",
            RuleId::Status => "status",
            RuleId::Capabilities => "capabilities",
            RuleId::Identity => "identity",
            RuleId::Time => "time",
            RuleId::Date => "date",
            RuleId::Weather => "weather",
            RuleId::Technology => "technology",
            RuleId::Help => "help",
            RuleId::Farewell => "farewell",
            RuleId::Gratitude => "gratitude",
            RuleId::QuestionMark => "question_mark",
            RuleId::Compliment => "compliment",
            RuleId::Happy => "happy",
            RuleId::Sad => "sad",
            RuleId::Preference => "preference",
            RuleId::Food => "food",
            RuleId::Music => "music",
            RuleId::Work => "work",
            RuleId::Sports => "sports",
            RuleId::Travel => "travel",
            RuleId::Books => "books",
            RuleId::Short => "short",
            RuleId::Default => "conversation",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// When a rule fires.
pub enum Trigger {
    /// Utterance contains any of the keywords.
    Keywords(&'static [&'static str]),
    /// Arbitrary predicate over the utterance and the context string.
    When(fn(&Utterance, &str) -> bool),
    Always,
}

impl Trigger {
    pub fn fires(&self, utterance: &Utterance, context: &str) -> bool {
        match self {
            Trigger::Keywords(keywords) => utterance.contains_any(keywords),
            Trigger::When(predicate) => predicate(utterance, context),
            Trigger::Always => true,
        }
    }
}

/// What a rule answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Fixed(&'static str),
    /// One candidate, chosen by the selector.
    OneOf(&'static [&'static str]),
    CurrentTime,
    CurrentDate,
    /// Delegate to the question sub-engine.
    Question,
}

pub struct Rule {
    pub id: RuleId,
    pub trigger: Trigger,
    pub reply: Reply,
}

const QUESTION_WORDS: &[&str] = &["what", "how", "why", "when", "where", "who"];
const AFFIRMATIONS: &[&str] = &["yes", "yeah", "sure"];

fn is_music_follow_up(utterance: &Utterance, context: &str) -> bool {
    context.contains("music") && utterance.contains_any(AFFIRMATIONS)
}

fn is_food_follow_up(utterance: &Utterance, context: &str) -> bool {
    context.contains("food") && utterance.contains_any(AFFIRMATIONS)
}

fn is_greeting(utterance: &Utterance, _context: &str) -> bool {
    utterance.contains_any(&["hello", "hey", "hi "]) || utterance.is("hi")
}

fn is_short(utterance: &Utterance, _context: &str) -> bool {
    utterance.char_len() <= 3
}

/// Terminal rule; also used if the table is ever exhausted.
pub static DEFAULT_RULE: Rule = Rule {
    id: RuleId::Default,
    trigger: Trigger::Always,
    reply: Reply::OneOf(replies::CONTINUERS),
};

/// Rules in precedence order, highest first.
pub static RULES: &[Rule] = &[
    Rule {
        id: RuleId::Question,
        trigger: Trigger::Keywords(QUESTION_WORDS),
        reply: Reply::Question,
    },
    Rule {
        id: RuleId::MusicFollowUp,
        trigger: Trigger::When(is_music_follow_up),
        reply: Reply::Fixed(replies::MUSIC_FOLLOW_UP),
    },
    Rule {
        id: RuleId::FoodFollowUp,
        trigger: Trigger::When(is_food_follow_up),
        reply: Reply::Fixed(replies::FOOD_FOLLOW_UP),
    },
    Rule {
        id: RuleId::Greeting,
        trigger: Trigger::When(is_greeting),
        reply: Reply::OneOf(replies::GREETINGS),
    },
    Rule {
        id: RuleId::Status,
        trigger: Trigger::Keywords(&["how are you", "how do you do", "how's it going"]),
        reply: Reply::OneOf(replies::STATUS),
    },
    Rule {
        id: RuleId::Capabilities,
        trigger: Trigger::Keywords(&["what can you do", "what do you do", "your capabilities"]),
        reply: Reply::Fixed(replies::CAPABILITIES),
    },
    Rule {
        id: RuleId::Identity,
        trigger: Trigger::Keywords(&["what is your name", "your name", "who are you"]),
        reply: Reply::Fixed(replies::IDENTITY),
    },
    Rule {
        id: RuleId::Time,
        trigger: Trigger::Keywords(&["time"]),
        reply: Reply::CurrentTime,
    },
    Rule {
        id: RuleId::Date,
        trigger: Trigger::Keywords(&["date", "today"]),
        reply: Reply::CurrentDate,
    },
    Rule {
        id: RuleId::Weather,
        trigger: Trigger::Keywords(&["weather", "temperature"]),
        reply: Reply::Fixed(replies::WEATHER),
    },
    Rule {
        id: RuleId::Technology,
        trigger: Trigger::Keywords(&["react", "javascript", "programming"]),
        reply: Reply::Fixed(replies::TECHNOLOGY),
    },
    Rule {
        id: RuleId::Help,
        trigger: Trigger::Keywords(&["help", "assist", "support"]),
        reply: Reply::Fixed(replies::HELP),
    },
    Rule {
        id: RuleId::Farewell,
        trigger: Trigger::Keywords(&["bye", "goodbye", "see you", "farewell"]),
        reply: Reply::OneOf(replies::GOODBYES),
    },
    Rule {
        id: RuleId::Gratitude,
        trigger: Trigger::Keywords(&["thank", "thanks"]),
        reply: Reply::OneOf(replies::THANKS),
    },
    Rule {
        id: RuleId::QuestionMark,
        trigger: Trigger::Keywords(&["?"]),
        reply: Reply::OneOf(replies::QUESTION_ACKS),
    },
    Rule {
        id: RuleId::Compliment,
        trigger: Trigger::Keywords(&["good", "nice", "awesome", "great"]),
        reply: Reply::OneOf(replies::COMPLIMENT_ACKS),
    },
    Rule {
        id: RuleId::Happy,
        trigger: Trigger::Keywords(&["happy", "joy", "excited"]),
        reply: Reply::Fixed(replies::HAPPY),
    },
    Rule {
        id: RuleId::Sad,
        trigger: Trigger::Keywords(&["sad", "upset", "down"]),
        reply: Reply::Fixed(replies::SAD),
    },
    Rule {
        id: RuleId::Preference,
        trigger: Trigger::Keywords(&["favorite", "like", "love"]),
        reply: Reply::OneOf(replies::PREFERENCES),
    },
    Rule {
        id: RuleId::Food,
        trigger: Trigger::Keywords(&["food", "eat", "hungry", "meal"]),
        reply: Reply::Fixed(replies::FOOD),
    },
    Rule {
        id: RuleId::Music,
        trigger: Trigger::Keywords(&["music", "song", "listen"]),
        reply: Reply::Fixed(replies::MUSIC),
    },
    Rule {
        id: RuleId::Work,
        trigger: Trigger::Keywords(&["work", "job", "school", "study"]),
        reply: Reply::Fixed(replies::WORK),
    },
    Rule {
        id: RuleId::Sports,
        trigger: Trigger::Keywords(&["sport", "game", "play", "team"]),
        reply: Reply::Fixed(replies::SPORTS),
    },
    Rule {
        id: RuleId::Travel,
        trigger: Trigger::Keywords(&["travel", "trip", "vacation", "visit"]),
        reply: Reply::Fixed(replies::TRAVEL),
    },
    Rule {
        id: RuleId::Books,
        trigger: Trigger::Keywords(&["book", "read", "movie", "watch"]),
        reply: Reply::Fixed(replies::BOOKS),
    },
    Rule {
        id: RuleId::Short,
        trigger: Trigger::When(is_short),
        reply: Reply::OneOf(replies::SHORT),
    },
    Rule {
        id: RuleId::Default,
        trigger: Trigger::Always,
        reply: Reply::OneOf(replies::CONTINUERS),
    },
];

/// First rule that fires for the utterance.
pub fn first_match(utterance: &Utterance, context: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.trigger.fires(utterance, context))
        .unwrap_or(&DEFAULT_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_for(text: &str, context: &str) -> RuleId {
        first_match(&Utterance::new(text), context).id
    }

    #[test]
    fn test_table_ends_with_default() {
        let last = RULES.last().map(|r| r.id);
        assert_eq!(last, Some(RuleId::Default));
        assert!(matches!(RULES.last().map(|r| &r.trigger), Some(Trigger::Always)));
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let mut ids: Vec<RuleId> = RULES.iter().map(|r| r.id).collect();
        let total = ids.len();
        ids.sort_by_key(|id| id.label());
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_greeting_hi_forms() {
        assert_eq!(rule_for("hi", ""), RuleId::Greeting);
        assert_eq!(rule_for("hi there", ""), RuleId::Greeting);
        // "hi" inside a word without the trailing space is not a greeting
        assert_eq!(rule_for("chip", ""), RuleId::Default);
    }

    #[test]
    fn test_question_mark_without_question_word() {
        assert_eq!(rule_for("really?", ""), RuleId::QuestionMark);
    }

    #[test]
    fn test_small_talk_topic_order() {
        assert_eq!(rule_for("music with food", ""), RuleId::Food);
        assert_eq!(rule_for("a trip to the movies", ""), RuleId::Travel);
        assert_eq!(rule_for("playing on a team", ""), RuleId::Sports);
    }

    #[test]
    fn test_follow_up_needs_context() {
        assert_eq!(rule_for("yeah", "i love music"), RuleId::MusicFollowUp);
        assert_eq!(rule_for("sure", "fast food"), RuleId::FoodFollowUp);
        assert_eq!(rule_for("yeah", "travel plans"), RuleId::Default);
        assert_eq!(rule_for("yes", ""), RuleId::Short);
    }

    #[test]
    fn test_music_follow_up_beats_food() {
        assert_eq!(rule_for("yes", "music and food"), RuleId::MusicFollowUp);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(RuleId::Default.to_string(), "conversation");
        assert_eq!(RuleId::MusicFollowUp.to_string(), "music_follow_up");
    }
}
