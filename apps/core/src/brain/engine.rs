//! Response Engine - rule-based responder used when no remote model answers.
//!
//! Pipeline:
//! 1. Normalize the utterance
//! 2. Build the context string from recent history
//! 3. Walk the rule table, first match wins
//! 4. Render the reply (fixed, random candidate, clock, or question sub-engine)

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::context::extract_context;
use super::matcher::Utterance;
use super::question;
use super::rules::{self, Reply, RuleId};
use super::selector::{self, ReplySelector};
use crate::models::Turn;

/// Anything that can produce a local reply from an utterance and history.
pub trait Responder: Send + Sync {
    fn respond(&self, utterance: &str, history: &[Turn], selector: &mut dyn ReplySelector)
        -> String;
}

/// Reply together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub rule: RuleId,
    pub reply: String,
}

/// Stateless rule engine. Cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct ResponseEngine {
    clock: Arc<dyn Clock>,
}

impl Default for ResponseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseEngine {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Classifies the utterance and renders the reply of the winning rule.
    pub fn classify(
        &self,
        utterance: &str,
        history: &[Turn],
        selector: &mut dyn ReplySelector,
    ) -> Classification {
        let utterance = Utterance::new(utterance);
        let context = extract_context(history);
        let rule = rules::first_match(&utterance, &context);

        let reply = match rule.reply {
            Reply::Fixed(text) => text.to_string(),
            Reply::OneOf(candidates) => selector::choose(selector, candidates).to_string(),
            Reply::CurrentTime => format!("The current time is {}.", self.clock.time_string()),
            Reply::CurrentDate => format!("Today is {}.", self.clock.date_string()),
            Reply::Question => question::answer(&utterance, self.clock.as_ref()).reply,
        };

        debug!(rule = %rule.id, context_len = context.len(), "Rule engine matched");

        Classification {
            rule: rule.id,
            reply,
        }
    }
}

impl Responder for ResponseEngine {
    fn respond(
        &self,
        utterance: &str,
        history: &[Turn],
        selector: &mut dyn ReplySelector,
    ) -> String {
        self.classify(utterance, history, selector).reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::clock::FixedClock;
    use crate::brain::replies;
    use crate::brain::selector::FixedSelector;
    use chrono::{Local, TimeZone};

    fn engine() -> ResponseEngine {
        let instant = Local.with_ymd_and_hms(2025, 12, 24, 18, 5, 9).unwrap();
        ResponseEngine::with_clock(Arc::new(FixedClock(instant)))
    }

    #[test]
    fn test_hello_with_index_zero() {
        let reply = engine().respond("hello", &[], &mut FixedSelector(0));
        assert_eq!(reply, replies::GREETINGS[0]);
    }

    #[test]
    fn test_time_and_date_rules() {
        let engine = engine();
        let time = engine.classify("tell me the time", &[], &mut FixedSelector(0));
        assert_eq!(time.rule, RuleId::Time);
        assert_eq!(time.reply, "The current time is 6:05:09 PM.");

        let date = engine.classify("is it a holiday today", &[], &mut FixedSelector(0));
        assert_eq!(date.rule, RuleId::Date);
        assert_eq!(date.reply, "Today is 12/24/2025.");
    }

    #[test]
    fn test_question_rule_delegates() {
        let result = engine().classify("What is AI?", &[], &mut FixedSelector(0));
        assert_eq!(result.rule, RuleId::Question);
        assert_eq!(result.reply, replies::WHAT_AI);
    }

    #[test]
    fn test_context_continuation() {
        let history = vec![
            Turn::user("alice", "let's talk about music"),
            Turn::generated("ChatBot", replies::MUSIC),
        ];
        let result = engine().classify("yeah", &history, &mut FixedSelector(0));
        assert_eq!(result.rule, RuleId::MusicFollowUp);
        assert_eq!(result.reply, replies::MUSIC_FOLLOW_UP);
    }
}
