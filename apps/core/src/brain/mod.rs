//! # Brain Module
//!
//! Offline, rule-based reply generation for ChatBot.
//! Answers user utterances when the remote model is unavailable.
//!
//! ## Components
//! - `matcher`: normalization and substring keyword matching
//! - `selector`: injectable random choice among candidate replies
//! - `replies`: candidate reply sets
//! - `rules`: ordered rule table (precedence is the table order)
//! - `question`: question-word dispatch for interrogative utterances
//! - `context`: recent-topic signal from history
//! - `clock`: wall-clock source for time/date replies
//! - `engine`: main orchestrator

pub mod clock;
pub mod context;
pub mod engine;
pub mod matcher;
pub mod question;
pub mod replies;
pub mod rules;
pub mod selector;

pub use clock::{Clock, FixedClock, SystemClock};
pub use context::extract_context;
pub use engine::{Classification, Responder, ResponseEngine};
pub use matcher::{matches, normalize, Utterance};
pub use question::{QuestionAnswer, QuestionWord};
pub use rules::RuleId;
pub use selector::{FixedSelector, RandomSelector, ReplySelector};
