//! End-to-end walks through the quiz engine as a presentation layer drives it.

use atomlab_core::quiz::DEFAULT_QUESTION_COUNT;
use atomlab_core::{
    EngineError, Feedback, Grade, QuizSession, QuizStatus, ShellConfiguration,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Place every available electron following `counts`, innermost shell first.
fn answer(quiz: &mut QuizSession, counts: &[u32]) {
    let mut electrons = quiz.available_electrons().clone().into_iter();
    for (shell, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            let electron = electrons.next().expect("enough electrons");
            quiz.place_electron(electron, shell).expect("placement accepted");
        }
    }
}

/// Answer the current question correctly or with everything crammed outward.
fn answer_current(quiz: &mut QuizSession, correctly: bool) {
    let target = quiz.target();
    if correctly {
        answer(quiz, target.as_slice());
    } else {
        // Shift one electron from the outermost target shell to the next one.
        let mut counts = target.as_slice().to_vec();
        if let Some(last) = counts.last_mut() {
            *last -= 1;
        }
        counts.push(1);
        answer(quiz, &counts);
    }
}

fn run_quiz(quiz: &mut QuizSession, correct_answers: usize) {
    for index in 0..quiz.total_questions() {
        assert_eq!(quiz.current_index(), index);
        answer_current(quiz, index < correct_answers);
        let result = quiz.check_answer().expect("check accepted");
        assert_eq!(result.correct, index < correct_answers);
        quiz.fire_advance(result.ticket).expect("advance accepted");
    }
}

#[test]
fn full_traversal_completes_and_restarts() {
    let mut quiz = QuizSession::new();
    run_quiz(&mut quiz, DEFAULT_QUESTION_COUNT);

    assert_eq!(quiz.status(), QuizStatus::Complete);
    assert!(quiz.is_complete());
    assert_eq!(quiz.current_element(), None);
    assert_eq!(quiz.current_index(), DEFAULT_QUESTION_COUNT);

    let outcome = quiz.outcome().expect("outcome once complete");
    assert_eq!(outcome.score, 10);
    assert_eq!(outcome.total_questions, 10);
    assert!((outcome.percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(outcome.grade, Grade::Outstanding);

    quiz.restart();
    assert_eq!(quiz.status(), QuizStatus::InProgress);
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.available_electrons().len(), 1);
    assert_eq!(quiz.outcome(), None);
}

#[rstest]
#[case(10, Grade::Outstanding)]
#[case(9, Grade::Outstanding)]
#[case(7, Grade::Great)]
#[case(5, Grade::Good)]
#[case(2, Grade::KeepStudying)]
fn grade_follows_score(#[case] correct: usize, #[case] grade: Grade) {
    let mut quiz = QuizSession::new();
    run_quiz(&mut quiz, correct);
    let outcome = quiz.outcome().expect("complete");
    assert_eq!(outcome.score as usize, correct);
    assert_eq!(outcome.grade, grade);
}

#[test]
fn complete_quiz_refuses_question_intents() {
    let mut quiz = QuizSession::with_question_count(2).expect("valid count");
    run_quiz(&mut quiz, 2);

    assert_eq!(quiz.reset_question(), Err(EngineError::QuizComplete));
    assert_eq!(quiz.check_answer(), Err(EngineError::QuizComplete));
    assert!(quiz.available_electrons().is_empty());
}

#[test]
fn carbon_question_matches_reference_answers() {
    let mut quiz = QuizSession::new();
    run_quiz_until(&mut quiz, 6);
    assert_eq!(quiz.target(), ShellConfiguration::from(vec![2, 4]));

    answer(&mut quiz, &[2, 4]);
    let score = quiz.score();
    assert!(quiz.check_answer().expect("accepted").correct);
    assert_eq!(quiz.score(), score + 1);

    let ticket = quiz.pending_advance().expect("armed");
    quiz.reset_question().expect("reset accepted");
    assert!(quiz.fire_advance(ticket).is_err());

    answer(&mut quiz, &[1, 5]);
    assert!(!quiz.check_answer().expect("accepted").correct);
    match quiz.feedback() {
        Feedback::Incorrect { message, expected } => {
            assert!(message.ends_with("2, 4"));
            assert_eq!(expected.as_slice(), &[2, 4]);
        }
        other => panic!("expected incorrect feedback, got {other:?}"),
    }
}

fn run_quiz_until(quiz: &mut QuizSession, atomic_number: u32) {
    while quiz.current_element().map(|e| e.atomic_number) != Some(atomic_number) {
        answer_current(quiz, true);
        let ticket = quiz.check_answer().expect("accepted").ticket;
        quiz.fire_advance(ticket).expect("advance");
    }
}
