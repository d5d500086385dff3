use bitkids_core::model::{Difficulty, FeedbackTier};
use bitkids_core::time::{fixed_clock, fixed_now};
use services::{AdvanceOutcome, QuizService, Wallet};

#[test]
fn quiz_flow_full_run_over_shipped_catalog() {
    let service = QuizService::new(fixed_clock());
    let mut session = service.start_session(Difficulty::Medium, 5);
    assert_eq!(session.total(), 5);
    assert_eq!(session.started_at(), fixed_now());

    // Answer every question correctly by looking the answer up.
    for step in 0..5 {
        let question = *session.current_question().expect("question available");
        assert_eq!(question.difficulty, Difficulty::Medium);

        session.select_option(question.correct_answer).unwrap();
        let checked = session.check_answer().unwrap();
        assert!(checked.correct);
        assert!(checked.celebrate);

        let outcome = session.advance(service.clock().now()).unwrap();
        if step == 4 {
            assert_eq!(outcome, AdvanceOutcome::Completed);
        } else {
            assert_eq!(outcome, AdvanceOutcome::Next);
        }
    }

    assert!(session.is_complete());
    assert_eq!(session.completed_at(), Some(fixed_now()));
    assert_eq!(session.score(), 5);
    assert_eq!(session.feedback_tier(), FeedbackTier::Perfect);

    let progress = session.progress();
    assert_eq!(progress.answered, 5);
    assert_eq!(progress.score, 5);
    assert!(progress.is_complete);
}

#[test]
fn quiz_flow_missed_answers_land_in_a_lower_tier() {
    let service = QuizService::new(fixed_clock());
    let mut session = service.start_session(Difficulty::Hard, 5);

    // Deliberately pick a wrong option everywhere.
    for _ in 0..5 {
        let question = *session.current_question().expect("question available");
        let wrong = (question.correct_answer + 1) % 4;
        session.select_option(wrong).unwrap();
        let checked = session.check_answer().unwrap();
        assert!(!checked.correct);
        session.advance(service.clock().now()).unwrap();
    }

    assert_eq!(session.score(), 0);
    assert_eq!(session.feedback_tier(), FeedbackTier::KeepGoing);
}

#[test]
fn piggy_connect_and_save_alongside_a_quiz() {
    let mut wallet = Wallet::simulated(fixed_clock());
    wallet.begin_connect();
    wallet.complete_connect();
    assert!(wallet.is_connected());

    let opening = wallet.balance();
    assert!((100..=4_999).contains(&opening));

    // The balance may only ever grow while connected.
    let mut previous = opening;
    for _ in 0..50 {
        if let Some(balance) = wallet.tick() {
            assert!(balance > previous);
            previous = balance;
        }
        assert_eq!(wallet.balance(), previous);
    }

    wallet.disconnect();
    assert_eq!(wallet.balance(), 0);
}
