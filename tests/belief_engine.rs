//! Integration tests for the entropy-driven belief engine over the food catalog.

mod common;

use std::sync::Arc;

use akinator::{
    Answer, AttributeId, BeliefEngine, Catalog, Item, Verdict,
    beliefs::{CONFIDENCE_THRESHOLD, SHORTLIST_THRESHOLD},
};
use common::{food_item, oracle_answer};

fn engine() -> BeliefEngine {
    BeliefEngine::new(Arc::new(Catalog::food()))
}

fn answer(engine: &mut BeliefEngine, attribute: &str, answer: Answer) {
    engine.record_answer(answer, &AttributeId::from(attribute));
}

fn assert_normalized(engine: &BeliefEngine) {
    let total: f64 = engine.distribution().iter().map(|(_, p)| p).sum();
    assert!((total - 1.0).abs() < 1e-9, "total mass {total}");
}

#[test]
fn test_mass_stays_normalized_through_answers() {
    let mut engine = engine();
    answer(&mut engine, "Solid", Answer::Yes);
    assert_normalized(&engine);
    answer(&mut engine, "ServedHot", Answer::Maybe);
    assert_normalized(&engine);
    answer(&mut engine, "MainDish", Answer::No);
    assert_normalized(&engine);
}

#[test]
fn test_first_question_is_vegetarian() {
    // Vegetarian, Spicy and ServedHot all split the catalog 8/6; the earliest wins.
    let mut engine = engine();
    let vegetarian = engine.information_gain("Vegetarian");
    assert!((vegetarian - engine.information_gain("Spicy")).abs() < 1e-12);
    assert!(vegetarian > engine.information_gain("Vegan"));
    assert_eq!(engine.pick_attribute().unwrap(), "Vegetarian");
}

#[test]
fn test_never_repeats_an_attribute() {
    let mut engine = engine();
    let mut seen = Vec::new();
    while let Some(attribute) = engine.pick_attribute() {
        assert!(!seen.contains(&attribute), "{attribute} asked twice");
        seen.push(attribute);
    }
    assert_eq!(seen.len(), 6);
    assert!(engine.pick_attribute().is_none());
}

#[test]
fn test_vegetarian_not_spicy_not_vegan_narrows_to_three() {
    let mut engine = engine();
    answer(&mut engine, "Vegetarian", Answer::Yes);
    answer(&mut engine, "Spicy", Answer::No);
    answer(&mut engine, "Vegan", Answer::No);

    for name in ["pizza", "ice cream", "pasta"] {
        let p = engine.probability(name).unwrap();
        assert!((p - 1.0 / 3.0).abs() < 1e-9, "{name}: {p}");
    }
    assert_eq!(engine.probability("burger"), Some(0.0));
    assert_eq!(engine.verdict(), Verdict::InProgress);
}

#[test]
fn test_unique_yes_lifts_item_above_the_rest() {
    let catalog = Catalog::new(
        vec![
            Item::new("lemon", [("Sour", true), ("Round", true)]),
            Item::new("apple", [("Sour", false), ("Round", true)]),
            Item::new("banana", [("Sour", false), ("Round", false)]),
        ],
        vec!["Sour".into(), "Round".into()],
    )
    .unwrap();
    let mut engine = BeliefEngine::new(Arc::new(catalog));
    answer(&mut engine, "Sour", Answer::Yes);

    let lemon = engine.probability("lemon").unwrap();
    assert!(engine
        .distribution()
        .iter()
        .filter(|(item, _)| **item != "lemon")
        .all(|(_, p)| *p < lemon));
    assert_eq!(engine.verdict(), Verdict::Decided("lemon".into()));
}

#[test]
fn test_maybe_leaves_ranking_unchanged() {
    let mut engine = engine();
    answer(&mut engine, "Vegetarian", Answer::Yes);
    let before: Vec<f64> = engine.distribution().iter().map(|(_, p)| *p).collect();
    answer(&mut engine, "Spicy", Answer::Maybe);
    let after: Vec<f64> = engine.distribution().iter().map(|(_, p)| *p).collect();
    for (b, a) in before.iter().zip(&after) {
        assert!((b - a).abs() < 1e-12);
    }
    assert!(engine.asked().contains("Spicy"));
}

#[test]
fn test_contradiction_resets_to_uniform() {
    let mut engine = engine();
    answer(&mut engine, "Vegan", Answer::Yes);
    answer(&mut engine, "Spicy", Answer::Yes);

    assert_eq!(engine.uniform_resets(), 1);
    for (_, p) in engine.distribution() {
        assert!((p - 1.0 / 14.0).abs() < 1e-12);
    }
}

#[test]
fn test_oracle_finds_pizza_within_six_questions() {
    let pizza = food_item("pizza");
    let mut engine = engine();
    let mut questions = 0;
    while !engine.verdict().is_terminal() {
        let attribute = engine.pick_attribute().unwrap();
        engine.record_answer(oracle_answer(&pizza, attribute.as_str()), &attribute);
        questions += 1;
    }

    assert!(questions <= 6);
    assert!(engine.probability("pizza").unwrap() >= CONFIDENCE_THRESHOLD);
    assert_eq!(engine.verdict(), Verdict::Decided("pizza".into()));
}

#[test]
fn test_indistinguishable_items_end_uncertain() {
    // biryani, tacos, quesadilla and ramen share every attribute value.
    let biryani = food_item("biryani");
    let mut engine = engine();
    while let Some(attribute) = engine.pick_attribute() {
        engine.record_answer(oracle_answer(&biryani, attribute.as_str()), &attribute);
    }

    match engine.verdict() {
        Verdict::Uncertain {
            candidates,
            most_likely,
        } => {
            let names: Vec<&str> = candidates.iter().map(|item| item.as_str()).collect();
            assert_eq!(names, ["biryani", "tacos", "quesadilla", "ramen"]);
            assert_eq!(most_likely, "biryani");
        }
        other => panic!("expected an uncertain verdict, got {other:?}"),
    }
    assert!(engine
        .distribution()
        .iter()
        .all(|(_, p)| *p == 0.0 || *p > SHORTLIST_THRESHOLD));
}

#[test]
fn test_reset_restores_fresh_state() {
    let mut engine = engine();
    let first = engine.pick_attribute().unwrap();
    engine.record_answer(Answer::No, &first);
    engine.reset();

    assert!(engine.asked().is_empty());
    assert_eq!(engine.pick_attribute().unwrap(), first);
}
