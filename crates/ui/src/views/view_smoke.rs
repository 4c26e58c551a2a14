use quiz_core::model::{QuestionDraft, QuestionSet};

use super::test_harness::{setup_builtin_harness, setup_view_harness};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_builtin_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("What is the capital of France?"), "missing question in {html}");
    assert!(html.contains("Question 1 of 10"), "missing progress in {html}");
    assert!(html.contains("Paris"), "missing choice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_marks_wrong_answer() {
    let mut harness = setup_builtin_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(0));
    let html = harness.render();

    assert!(html.contains("quiz-choice--incorrect"), "missing incorrect mark in {html}");
    assert!(html.contains("quiz-choice--revealed"), "missing revealed mark in {html}");
    assert!(html.contains("Score: 0"), "score changed in {html}");
    assert!(!html.contains("disabled"), "next still disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_enables_next_after_selection() {
    let mut harness = setup_builtin_harness();
    harness.rebuild();
    let before = harness.render();
    assert!(before.contains("disabled"), "next should start disabled in {before}");

    harness.dispatch(QuizIntent::Select(2));
    let html = harness.render();

    assert!(html.contains("id=\"next-btn\""), "missing next button in {html}");
    assert!(!html.contains("disabled"), "next still disabled in {html}");
    assert!(html.contains("quiz-choice--correct"), "missing correct mark in {html}");
    assert!(html.contains("Score: 1"), "score not updated in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_walks_to_results_and_restarts() {
    let questions = QuestionSet::from_drafts(vec![
        QuestionDraft::new("What is 2 + 2?", ["3", "4"], 1),
        QuestionDraft::new("What is 60 - 20?", ["30", "40"], 1),
    ])
    .unwrap();
    let mut harness = setup_view_harness(questions);
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(1));
    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "missing progress in {html}");
    assert!(html.contains("View Results"), "missing results button in {html}");

    harness.dispatch(QuizIntent::Select(1));
    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("You scored 2 out of 2!"), "missing summary in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "restart did not reset in {html}");
    assert!(html.contains("Score: 0"), "restart kept score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_ignores_next_before_answer() {
    let mut harness = setup_builtin_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Next);
    let html = harness.render();

    assert!(html.contains("Question 1 of 10"), "advanced without an answer: {html}");
}
