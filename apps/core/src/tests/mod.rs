//! Test Module
//!
//! Cross-module test suite for the ChatBot core.
//!
//! ## Test Categories
//! - `brain_tests`: rule precedence, question dispatch, context, determinism
//! - `supervisor_tests`: room history, validation, remote fallback through the actor
//! - `chaos_test`: concurrency and flaky remote behaviour

pub mod supervisor_tests;
