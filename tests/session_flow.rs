//! Integration tests for the session API through the app container.
//!
//! These tests cover:
//! - Full games with both strategies and an oracle player
//! - Deterministic behavior with fixed seeds
//! - Configuration errors surfacing at session start

mod common;

use std::{collections::BTreeSet, sync::Arc};

use akinator::{
    Answer, App, AttributeId, Catalog, Difficulty, Error, Item, RewardScheduler, SessionConfig,
    Step, StrategyKind, Verdict, ports::QuestionStrategy, strategy::RewardStrategy,
};
use common::{food_item, play_constant, play_out};

#[test]
fn test_entropy_session_guesses_pizza() {
    let app = App::new();
    let mut session = app
        .start_session(SessionConfig::new(StrategyKind::Entropy))
        .unwrap();

    let verdict = play_out(&mut session, &food_item("pizza"));
    assert_eq!(verdict, Verdict::Decided("pizza".into()));
    assert!(session.questions_asked() <= 6);
    assert!(session.is_finished());

    let first = &session.transcript()[0];
    assert_eq!(first.attribute, "Vegetarian");
    assert_eq!(first.prompt, "Is it vegetarian?");
    assert_eq!(first.answer, Answer::Yes);
}

#[test]
fn test_finished_session_keeps_returning_verdict() {
    let app = App::new();
    let mut session = app.start_session(SessionConfig::default()).unwrap();
    let verdict = play_out(&mut session, &food_item("sushi"));
    assert_eq!(session.next_question(), Step::Finished(verdict.clone()));
    assert_eq!(session.current_verdict(), verdict);
}

#[test]
fn test_reward_session_predicts_burger() {
    let app = App::for_testing().with_default_seed(7).build();
    let config = SessionConfig::new(StrategyKind::Reward).with_difficulty(Difficulty::Hard);
    let mut session = app.start_session(config).unwrap();

    let verdict = play_out(&mut session, &food_item("burger"));
    assert_eq!(verdict, Verdict::Decided("burger".into()));
    assert_eq!(session.questions_asked(), 6);
    assert_eq!(session.transcript()[0].attribute, "Vegetarian");

    let strategy = session
        .strategy()
        .as_any()
        .downcast_ref::<RewardStrategy>()
        .unwrap();
    // Every rewarded answer, the final one included, reached the table.
    let table = strategy.scheduler().table();
    let rewarded = session
        .transcript()
        .iter()
        .filter(|exchange| exchange.answer == Answer::Yes)
        .inspect(|exchange| assert!(table.get(&exchange.attribute, "yes") > 0.0))
        .count();
    assert_eq!(rewarded, 5);
}

#[test]
fn test_reward_session_updates_every_answered_row() {
    let app = App::new();
    let config = SessionConfig::new(StrategyKind::Reward).with_seed(3);
    let mut session = app.start_session(config).unwrap();
    play_constant(&mut session, Answer::Yes);

    let strategy = session
        .strategy()
        .as_any()
        .downcast_ref::<RewardStrategy>()
        .unwrap();
    assert_eq!(session.transcript().len(), 6);
    for exchange in session.transcript() {
        let utility = strategy.scheduler().table().get(&exchange.attribute, "yes");
        assert!((utility - 0.1).abs() < 1e-12);
    }
}

#[test]
fn test_same_seed_same_easy_question_order() {
    let app = App::new();
    let order = |seed: u64| {
        let config = SessionConfig::new(StrategyKind::Reward).with_seed(seed);
        let mut session = app.start_session(config).unwrap();
        play_constant(&mut session, Answer::No);
        session
            .transcript()
            .iter()
            .map(|exchange| exchange.attribute.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(order(11), order(11));
}

#[test]
fn test_easy_order_varies_with_seed_and_ignores_utility() {
    let catalog = Arc::new(Catalog::food());
    let boosted = AttributeId::from("ServedHot");
    let mut second_picks = BTreeSet::new();
    for seed in 0..16 {
        let mut scheduler =
            RewardScheduler::with_seed(catalog.attributes().to_vec(), Some(seed)).unwrap();
        scheduler.update_utility(&boosted, "yes", 1.0, None);
        let mut strategy =
            RewardStrategy::new(Arc::clone(&catalog), scheduler, Difficulty::Easy, 0.0).unwrap();

        assert_eq!(strategy.next_attribute().unwrap(), "Vegetarian");
        second_picks.insert(strategy.next_attribute().unwrap());
    }
    assert!(second_picks.len() > 1);
    assert!(second_picks.iter().any(|attribute| *attribute != boosted));
}

#[test]
fn test_attribute_override_limits_questions() {
    let app = App::new();
    let config = SessionConfig::new(StrategyKind::Entropy).with_attributes(["Spicy", "Vegan"]);
    let mut session = app.start_session(config).unwrap();

    let verdict = play_constant(&mut session, Answer::No);
    assert_eq!(session.questions_asked(), 2);
    match verdict {
        Verdict::Uncertain { candidates, .. } => assert_eq!(candidates.len(), 4),
        other => panic!("expected an uncertain verdict, got {other:?}"),
    }
}

#[test]
fn test_custom_catalog_through_builder() {
    let catalog = Catalog::new(
        vec![
            Item::new("tea", [("Hot", true), ("Sweet", false)]),
            Item::new("lemonade", [("Hot", false), ("Sweet", true)]),
        ],
        vec!["Hot".into(), "Sweet".into()],
    )
    .unwrap();
    let app = App::for_testing().with_catalog(catalog).build();
    let mut session = app.start_session(SessionConfig::default()).unwrap();

    match session.next_question() {
        Step::Ask(question) => {
            assert_eq!(question.attribute, "Hot");
            assert_eq!(question.prompt, "Does it have Hot?");
        }
        Step::Finished(verdict) => panic!("finished early with {verdict:?}"),
    }
    session.submit_answer(Answer::Yes);
    assert_eq!(session.current_verdict(), Verdict::Decided("tea".into()));
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let app = App::new();

    let unknown = SessionConfig::default().with_attributes(["Crunchy"]);
    assert!(matches!(
        app.start_session(unknown),
        Err(Error::UnknownAttribute { .. })
    ));

    let exploration = SessionConfig::new(StrategyKind::Reward).with_exploration_rate(1.5);
    assert!(matches!(
        app.start_session(exploration),
        Err(Error::InvalidParameter { .. })
    ));

    let learning = SessionConfig::new(StrategyKind::Reward).with_learning_rate(0.0);
    assert!(matches!(
        app.start_session(learning),
        Err(Error::InvalidParameter { .. })
    ));
}
