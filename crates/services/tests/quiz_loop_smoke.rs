use rand::SeedableRng;
use rand::rngs::StdRng;

use drill_core::model::CategoryId;
use services::{CategorySelector, QuizError, QuizSession};

#[test]
fn full_loop_builds_and_resets_streak() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = QuizSession::new();

    // Answer five random problems correctly in a row.
    for round in 1..=5 {
        let answer = session
            .next_problem(&mut rng, CategorySelector::Any)
            .unwrap()
            .answer();
        let outcome = session.submit(answer).unwrap();
        assert!(outcome.correct, "round {round}");
        assert_eq!(outcome.streak, round);
        assert_eq!(outcome.expected, None);
    }

    // One miss resets the streak and reveals the expected answer.
    let answer = session
        .next_problem(&mut rng, CategorySelector::Any)
        .unwrap()
        .answer();
    let wrong = answer + answer.abs() * 0.01 + 1.0;
    let outcome = session.submit(wrong).unwrap();
    assert!(!outcome.correct);
    assert_eq!(outcome.streak, 0);
    assert!(outcome.expected.is_some());

    // The streak rebuilds from zero afterwards.
    let answer = session
        .next_problem(&mut rng, CategorySelector::Any)
        .unwrap()
        .answer();
    assert_eq!(session.submit(answer).unwrap().streak, 1);
}

#[test]
fn custom_question_mode_joins_the_same_streak() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = QuizSession::new();

    let answer = session
        .next_problem(&mut rng, CategorySelector::Only(CategoryId::Area))
        .unwrap()
        .answer();
    session.submit(answer).unwrap();

    let prompt = session
        .pose(5.0, "km", "m", CategoryId::Length)
        .unwrap()
        .prompt();
    assert_eq!(prompt, "5 km は何 m ですか？");

    let outcome = session.submit(5000.0001).unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.streak, 2);

    assert!(matches!(
        session.submit(5000.0),
        Err(QuizError::AlreadyAnswered)
    ));
}
