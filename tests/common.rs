//! Common test utilities for the akinator test suite.
//!
//! This module provides an oracle player that answers truthfully for a
//! secret item, and helpers to drive sessions to completion with it.

#![allow(dead_code)]

use akinator::{Answer, Catalog, Item, Session, Step, Verdict};

/// Look up an item of the built-in food catalog.
pub fn food_item(name: &str) -> Item {
    Catalog::food()
        .item(name)
        .cloned()
        .unwrap_or_else(|| panic!("{name} is not in the food catalog"))
}

/// Truthful answer about `attribute` for `secret`.
pub fn oracle_answer(secret: &Item, attribute: &str) -> Answer {
    match secret.value(attribute) {
        Some(true) => Answer::Yes,
        Some(false) => Answer::No,
        None => Answer::Maybe,
    }
}

/// Answer every question truthfully until the session finishes.
pub fn play_out(session: &mut Session, secret: &Item) -> Verdict {
    loop {
        match session.next_question() {
            Step::Ask(question) => {
                session.submit_answer(oracle_answer(secret, question.attribute.as_str()));
            }
            Step::Finished(verdict) => return verdict,
        }
    }
}

/// Answer every question with the same answer until the session finishes.
pub fn play_constant(session: &mut Session, answer: Answer) -> Verdict {
    loop {
        match session.next_question() {
            Step::Ask(_) => session.submit_answer(answer),
            Step::Finished(verdict) => return verdict,
        }
    }
}
